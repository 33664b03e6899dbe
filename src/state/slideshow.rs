/// Randomized photo slideshow
///
/// Every cell of the slideshow runs the same four-phase transition,
/// ticking in lockstep on one shared clock:
///
/// ```text
/// Idle -> FadingOut -> Swapping -> FadingIn -> Idle
///          (cycle       (500ms      (photo      (fade
///           begins)      later)      loaded)     done)
/// ```
///
/// Cycles are tagged with a monotonically increasing sequence number.
/// The swap delay and the photo load are asynchronous, so a new cycle can
/// begin while callbacks from an older one are still in flight; stale
/// callbacks are detected by their sequence number and discarded, so only
/// the most recent cycle's outcome ever applies to a cell.

/// Phase of one slideshow cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellPhase {
    /// Showing its current photo at full size
    Idle,
    /// Shrinking/fading towards black at the start of a cycle
    FadingOut,
    /// Blacked out; the new photo has been assigned and is loading
    Swapping,
    /// New photo confirmed loaded, growing/fading back in
    FadingIn,
}

#[derive(Debug, Clone)]
struct Cell {
    phase: CellPhase,
    /// Sequence number of the cycle that last touched this cell
    cycle: u64,
    /// Catalog index picked for the in-flight cycle
    pending: Option<usize>,
    /// Catalog index of the photo currently assigned to the cell
    current: Option<usize>,
}

impl Cell {
    fn new() -> Self {
        Cell {
            phase: CellPhase::Idle,
            cycle: 0,
            pending: None,
            current: None,
        }
    }
}

/// A swap scheduled for one cell, to be delivered after the swap delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapRequest {
    pub cell: usize,
    pub cycle: u64,
}

/// Drives all cells through their transition phases
#[derive(Debug)]
pub struct Slideshow {
    catalog: Vec<String>,
    cells: Vec<Cell>,
    cycle: u64,
}

impl Slideshow {
    pub fn new(catalog: Vec<String>, cell_count: usize) -> Self {
        Slideshow {
            catalog,
            cells: vec![Cell::new(); cell_count],
            cycle: 0,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    /// Start a new cycle: every cell fades out simultaneously and gets a
    /// fresh uniform pick from the catalog. Repeats are allowed, the
    /// previous photo is not excluded. Returns one swap request per cell;
    /// the caller schedules each for delivery after the swap delay.
    pub fn begin_cycle(&mut self, rng: &mut fastrand::Rng) -> Vec<SwapRequest> {
        if self.catalog.is_empty() || self.cells.is_empty() {
            return Vec::new();
        }

        self.cycle += 1;
        let cycle = self.cycle;

        self.cells
            .iter_mut()
            .enumerate()
            .map(|(index, cell)| {
                cell.phase = CellPhase::FadingOut;
                cell.cycle = cycle;
                cell.pending = Some(rng.usize(..self.catalog.len()));
                SwapRequest { cell: index, cycle }
            })
            .collect()
    }

    /// The swap delay for a cell has elapsed. If the request is stale
    /// (a newer cycle touched the cell first) it is discarded; otherwise
    /// the pending photo becomes the cell's current one and its name is
    /// returned for loading.
    pub fn swap_due(&mut self, cell: usize, cycle: u64) -> Option<&str> {
        let slot = self.cells.get_mut(cell)?;
        if slot.cycle != cycle {
            return None;
        }

        slot.phase = CellPhase::Swapping;
        slot.current = slot.pending.take();
        slot.current.map(|index| self.catalog[index].as_str())
    }

    /// The new photo finished loading. Stale confirmations are discarded.
    /// Returns true when the cell actually entered `FadingIn`, i.e. the
    /// caller should display the freshly loaded photo.
    pub fn photo_loaded(&mut self, cell: usize, cycle: u64) -> bool {
        let Some(slot) = self.cells.get_mut(cell) else {
            return false;
        };
        if slot.cycle != cycle || slot.phase != CellPhase::Swapping {
            return false;
        }

        slot.phase = CellPhase::FadingIn;
        true
    }

    /// The new photo failed to load. The assignment is dropped and the
    /// cell stays blacked out in `Swapping` until the next cycle
    /// overwrites it. No retry.
    pub fn photo_failed(&mut self, cell: usize, cycle: u64) {
        if let Some(slot) = self.cells.get_mut(cell) {
            if slot.cycle == cycle && slot.phase == CellPhase::Swapping {
                slot.current = None;
            }
        }
    }

    /// The fade-in transition finished; the cell returns to rest
    pub fn settled(&mut self, cell: usize, cycle: u64) {
        if let Some(slot) = self.cells.get_mut(cell) {
            if slot.cycle == cycle && slot.phase == CellPhase::FadingIn {
                slot.phase = CellPhase::Idle;
            }
        }
    }

    pub fn phase(&self, cell: usize) -> Option<CellPhase> {
        self.cells.get(cell).map(|slot| slot.phase)
    }

    /// Whether the cell should currently display its photo at full size
    pub fn is_loaded(&self, cell: usize) -> bool {
        matches!(
            self.phase(cell),
            Some(CellPhase::Idle) | Some(CellPhase::FadingIn)
        )
    }

    /// Name of the photo currently assigned to a cell
    pub fn current_photo(&self, cell: usize) -> Option<&str> {
        let index = self.cells.get(cell)?.current?;
        Some(self.catalog[index].as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<String> {
        (1..=20).map(|n| format!("photo{n}.jpg")).collect()
    }

    fn rng() -> fastrand::Rng {
        fastrand::Rng::with_seed(0xAB9_0705)
    }

    #[test]
    fn cells_start_idle_and_empty() {
        let show = Slideshow::new(catalog(), 4);

        for cell in 0..4 {
            assert_eq!(show.phase(cell), Some(CellPhase::Idle));
            assert_eq!(show.current_photo(cell), None);
        }
    }

    #[test]
    fn full_cycle_walks_all_phases() {
        let mut show = Slideshow::new(catalog(), 2);
        let requests = show.begin_cycle(&mut rng());
        assert_eq!(requests.len(), 2);

        for request in requests {
            assert_eq!(show.phase(request.cell), Some(CellPhase::FadingOut));

            let photo = show.swap_due(request.cell, request.cycle).unwrap().to_owned();
            assert!(show.catalog().iter().any(|name| name == &photo));
            assert_eq!(show.phase(request.cell), Some(CellPhase::Swapping));
            assert!(!show.is_loaded(request.cell));

            assert!(show.photo_loaded(request.cell, request.cycle));
            assert_eq!(show.phase(request.cell), Some(CellPhase::FadingIn));
            assert!(show.is_loaded(request.cell));

            show.settled(request.cell, request.cycle);
            assert_eq!(show.phase(request.cell), Some(CellPhase::Idle));
        }
    }

    #[test]
    fn assigned_photos_are_always_catalog_members() {
        let mut show = Slideshow::new(catalog(), 4);
        let mut rng = rng();

        for _ in 0..50 {
            let requests = show.begin_cycle(&mut rng);
            for request in requests {
                let photo = show.swap_due(request.cell, request.cycle).unwrap().to_owned();
                assert!(show.catalog().contains(&photo));
                show.photo_loaded(request.cell, request.cycle);
                show.settled(request.cell, request.cycle);
            }
        }
    }

    #[test]
    fn stale_swap_is_discarded() {
        let mut show = Slideshow::new(catalog(), 1);
        let mut rng = rng();

        let old = show.begin_cycle(&mut rng)[0];
        // A new cycle fires before the old swap delay elapses.
        let new = show.begin_cycle(&mut rng)[0];

        assert_eq!(show.swap_due(old.cell, old.cycle), None);
        assert_eq!(show.phase(0), Some(CellPhase::FadingOut));

        // The current cycle still goes through.
        assert!(show.swap_due(new.cell, new.cycle).is_some());
        assert_eq!(show.phase(0), Some(CellPhase::Swapping));
    }

    #[test]
    fn stale_load_confirmation_is_discarded() {
        let mut show = Slideshow::new(catalog(), 1);
        let mut rng = rng();

        let old = show.begin_cycle(&mut rng)[0];
        show.swap_due(old.cell, old.cycle);

        // Next cycle begins while the old photo is still loading.
        let new = show.begin_cycle(&mut rng)[0];

        assert!(!show.photo_loaded(old.cell, old.cycle));
        assert_eq!(show.phase(0), Some(CellPhase::FadingOut));
        assert!(!show.is_loaded(0));

        show.swap_due(new.cell, new.cycle);
        assert!(show.photo_loaded(new.cell, new.cycle));
    }

    #[test]
    fn failed_load_keeps_cell_blacked_out_until_next_cycle() {
        let mut show = Slideshow::new(catalog(), 1);
        let mut rng = rng();

        let first = show.begin_cycle(&mut rng)[0];
        show.swap_due(first.cell, first.cycle);
        show.photo_failed(first.cell, first.cycle);

        assert_eq!(show.phase(0), Some(CellPhase::Swapping));
        assert!(!show.is_loaded(0));

        // The next cycle overwrites the dead cell as usual.
        let second = show.begin_cycle(&mut rng)[0];
        show.swap_due(second.cell, second.cycle);
        assert!(show.photo_loaded(second.cell, second.cycle));
        assert!(show.is_loaded(0));
    }

    #[test]
    fn cycle_numbers_increase_monotonically() {
        let mut show = Slideshow::new(catalog(), 1);
        let mut rng = rng();
        let mut last = 0;

        for _ in 0..10 {
            let request = show.begin_cycle(&mut rng)[0];
            assert!(request.cycle > last);
            last = request.cycle;
        }
    }

    #[test]
    fn empty_catalog_produces_no_requests() {
        let mut show = Slideshow::new(Vec::new(), 4);
        assert!(show.begin_cycle(&mut rng()).is_empty());
    }
}
