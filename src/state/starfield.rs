/// Decorative starfield backdrop
///
/// Stars are generated in bulk at startup, never mutated afterwards, and
/// never individually removed. The field is split into layers of different
/// densities; each layer mixes static "twinkle" stars with a small fraction
/// of falling stars. All animation state is derived from elapsed time, so
/// the renderer only ever samples `y_at` / `alpha_at`.

use serde::{Deserialize, Serialize};

/// Seconds per full twinkle oscillation of a static star
const TWINKLE_PERIOD: f32 = 3.0;

/// Count and fall probability for one backdrop layer
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LayerSpec {
    /// How many stars to generate in this layer
    pub count: usize,
    /// Probability in [0, 1] that a star is the falling variant
    pub fall_chance: f32,
}

/// Variant of a decorative star
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarKind {
    /// Stays in place and twinkles
    Static,
    /// Drifts down the backdrop, wrapping around when it leaves
    Falling,
}

/// One decorative star, positioned in viewport-percentage coordinates
#[derive(Debug, Clone, Copy)]
pub struct Star {
    kind: StarKind,
    /// Radius in logical pixels, within [0.5, 2.0)
    size: f32,
    /// Horizontal position as a percentage of the backdrop width
    x: f32,
    /// Initial vertical position as a percentage of the backdrop height
    y: f32,
    /// Fall duration in seconds (falling stars only, otherwise 0)
    duration: f32,
    /// Animation start delay in seconds
    delay: f32,
}

impl Star {
    /// Draw a new star with independently randomized attributes.
    ///
    /// Falling stars get a duration in [5, 15) and a delay in [0, 15);
    /// static stars only get a twinkle phase delay in [0, 3).
    fn random(fall_chance: f32, rng: &mut fastrand::Rng) -> Self {
        let kind = if rng.f32() < fall_chance {
            StarKind::Falling
        } else {
            StarKind::Static
        };

        let size = 0.5 + rng.f32() * 1.5;
        let x = rng.f32() * 100.0;
        let y = rng.f32() * 100.0;

        let (duration, delay) = match kind {
            StarKind::Falling => (5.0 + rng.f32() * 10.0, rng.f32() * 15.0),
            StarKind::Static => (0.0, rng.f32() * 3.0),
        };

        Star {
            kind,
            size,
            x,
            y,
            duration,
            delay,
        }
    }

    pub fn kind(&self) -> StarKind {
        self.kind
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    /// Vertical position (percent) at `elapsed` seconds since startup.
    ///
    /// Static stars never move. Falling stars hold their spawn position
    /// until their delay passes, then sweep from just above the backdrop
    /// to just below it, wrapping every `duration` seconds.
    pub fn y_at(&self, elapsed: f32) -> f32 {
        match self.kind {
            StarKind::Static => self.y,
            StarKind::Falling => {
                if elapsed < self.delay {
                    return self.y;
                }
                let progress = ((elapsed - self.delay) / self.duration).fract();
                -10.0 + progress * 120.0
            }
        }
    }

    /// Opacity at `elapsed` seconds since startup.
    ///
    /// Static stars twinkle on a fixed period, phase-shifted by their
    /// delay; falling stars stay at full opacity once in motion.
    pub fn alpha_at(&self, elapsed: f32) -> f32 {
        match self.kind {
            StarKind::Static => {
                let phase = (elapsed + self.delay) / TWINKLE_PERIOD * std::f32::consts::TAU;
                0.3 + 0.7 * (0.5 + 0.5 * phase.sin())
            }
            StarKind::Falling => {
                if elapsed < self.delay {
                    0.0
                } else {
                    1.0
                }
            }
        }
    }
}

/// The full layered starfield
#[derive(Debug, Clone, Default)]
pub struct StarField {
    layers: Vec<Vec<Star>>,
}

impl StarField {
    /// Create an empty field with the given number of layers
    pub fn new(layer_count: usize) -> Self {
        StarField {
            layers: vec![Vec::new(); layer_count],
        }
    }

    /// Generate a field from layer specs, one populate call per layer
    pub fn generate(specs: &[LayerSpec], rng: &mut fastrand::Rng) -> Self {
        let mut field = StarField::new(specs.len());
        for (index, spec) in specs.iter().enumerate() {
            field.populate(index, spec.count, spec.fall_chance, rng);
        }
        field
    }

    /// Append `count` freshly randomized stars to one layer.
    ///
    /// Additive on purpose: repeated calls accumulate stars, existing ones
    /// are never touched. A layer index that does not exist makes this a
    /// no-op, matching the rest of the app's treatment of absent targets.
    pub fn populate(&mut self, layer: usize, count: usize, fall_chance: f32, rng: &mut fastrand::Rng) {
        let Some(stars) = self.layers.get_mut(layer) else {
            return;
        };

        stars.reserve(count);
        for _ in 0..count {
            stars.push(Star::random(fall_chance, rng));
        }
    }

    /// Iterate over the layers, shallowest first
    pub fn layers(&self) -> impl Iterator<Item = &[Star]> {
        self.layers.iter().map(Vec::as_slice)
    }

    /// Total number of stars across all layers
    pub fn star_count(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> fastrand::Rng {
        fastrand::Rng::with_seed(0x5747_4152)
    }

    #[test]
    fn populate_appends_exactly_count_stars() {
        let mut field = StarField::new(1);
        field.populate(0, 120, 0.05, &mut rng());

        assert_eq!(field.star_count(), 120);
    }

    #[test]
    fn populate_is_additive_not_idempotent() {
        let mut field = StarField::new(1);
        let mut rng = rng();

        field.populate(0, 80, 0.1, &mut rng);
        field.populate(0, 80, 0.1, &mut rng);

        assert_eq!(field.star_count(), 160);
    }

    #[test]
    fn populate_missing_layer_is_a_noop() {
        let mut field = StarField::new(2);
        field.populate(5, 50, 0.1, &mut rng());

        assert_eq!(field.star_count(), 0);
    }

    #[test]
    fn star_attributes_stay_in_range() {
        let mut field = StarField::new(1);
        field.populate(0, 500, 0.5, &mut rng());

        for star in field.layers().flatten() {
            assert!((0.5..=2.0).contains(&star.size()));
            assert!((0.0..=100.0).contains(&star.x()));
            assert!((0.0..=100.0).contains(&star.y_at(0.0)));
        }
    }

    #[test]
    fn fall_chance_extremes_pick_one_kind() {
        let mut rng = rng();

        let mut all_static = StarField::new(1);
        all_static.populate(0, 100, 0.0, &mut rng);
        for star in all_static.layers().flatten() {
            assert_eq!(star.kind(), StarKind::Static);
            assert!((0.0..3.0).contains(&star.delay));
        }

        let mut all_falling = StarField::new(1);
        all_falling.populate(0, 100, 1.0, &mut rng);
        for star in all_falling.layers().flatten() {
            assert_eq!(star.kind(), StarKind::Falling);
            assert!((5.0..15.0).contains(&star.duration));
            assert!((0.0..15.0).contains(&star.delay));
        }
    }

    #[test]
    fn falling_star_wraps_and_stays_drawable() {
        let mut field = StarField::new(1);
        field.populate(0, 50, 1.0, &mut rng());

        for star in field.layers().flatten() {
            for tick in 0..400 {
                let y = star.y_at(tick as f32 * 0.25);
                assert!((-10.0..=110.0).contains(&y), "y out of range: {y}");
            }
        }
    }

    #[test]
    fn twinkle_alpha_stays_in_unit_range() {
        let mut field = StarField::new(1);
        field.populate(0, 50, 0.0, &mut rng());

        for star in field.layers().flatten() {
            for tick in 0..120 {
                let alpha = star.alpha_at(tick as f32 * 0.1);
                assert!((0.0..=1.0).contains(&alpha), "alpha out of range: {alpha}");
            }
        }
    }
}
