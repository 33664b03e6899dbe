/// Progressive gallery reveal
///
/// The gallery starts with one visible row. Each trigger activation
/// reveals the next hidden row in order, up to a fixed maximum; once the
/// maximum is reached the trigger permanently switches to opening the
/// external portfolio instead. Rows are never re-hidden and the visible
/// count never decreases.

/// Result of one trigger activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// A new row became visible. `now_full` is true exactly when this
    /// reveal reached the maximum and flipped the trigger into
    /// external-navigation mode.
    Revealed { row: usize, now_full: bool },
    /// The gallery is at its maximum; the caller should open the
    /// external portfolio link instead.
    OpenExternal,
    /// The next row does not exist (fewer rows than the maximum allows);
    /// nothing changed.
    Skipped,
}

/// Owns the reveal counter and the trigger mode
#[derive(Debug)]
pub struct GalleryController {
    visible_rows: usize,
    total_rows: usize,
    max_rows: usize,
    show_more_visible: bool,
}

impl GalleryController {
    /// One row is visible from the start. If there is nothing left to
    /// reveal, the trigger control is hidden entirely.
    pub fn new(total_rows: usize, max_rows: usize) -> Self {
        GalleryController {
            visible_rows: 1,
            total_rows,
            max_rows,
            show_more_visible: total_rows > 1,
        }
    }

    /// Rows currently visible, in [1, max_rows]
    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Whether the trigger control should be shown at all
    pub fn show_more_visible(&self) -> bool {
        self.show_more_visible
    }

    /// Whether the trigger has switched to external-navigation mode
    pub fn is_full(&self) -> bool {
        self.visible_rows >= self.max_rows
    }

    /// Label for the trigger control in its current mode
    pub fn trigger_label(&self) -> &'static str {
        if self.is_full() {
            "Full Portfolio"
        } else {
            "Show More"
        }
    }

    /// Handle one trigger activation.
    ///
    /// A missing next row is skipped without incrementing the counter;
    /// the caller decides how loudly to report it.
    pub fn reveal_next(&mut self) -> RevealOutcome {
        if self.is_full() {
            return RevealOutcome::OpenExternal;
        }

        let next = self.visible_rows;
        if next >= self.total_rows {
            return RevealOutcome::Skipped;
        }

        self.visible_rows += 1;
        RevealOutcome::Revealed {
            row: next,
            now_full: self.is_full(),
        }
    }
}
