/// 3D tilt hover effect for photo cards
///
/// Pointer movement over a card tilts it towards the cursor: the vertical
/// offset from the card centre drives rotation around X, the horizontal
/// offset drives rotation around Y with the opposite sign, both capped at
/// a fixed maximum angle reached at the card edge. Leaving the card resets
/// it. The controller only reacts to cards that were explicitly attached,
/// and attaching is idempotent.

use std::collections::{HashMap, HashSet};

/// Identity of a photo card: (row, column) within the gallery
pub type CardId = (usize, usize);

/// The visual transform applied to a hovered card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltTransform {
    /// Rotation around the horizontal axis, degrees
    pub rotate_x: f32,
    /// Rotation around the vertical axis, degrees
    pub rotate_y: f32,
    /// Uniform scale factor while hovered
    pub scale: f32,
    /// Vertical lift in logical pixels (negative = up)
    pub translate_y: f32,
    /// Perspective distance in logical pixels
    pub perspective: f32,
}

/// Tracks which cards react to the pointer and their current transforms
#[derive(Debug)]
pub struct TiltController {
    max_angle: f32,
    perspective: f32,
    attached: HashSet<CardId>,
    transforms: HashMap<CardId, TiltTransform>,
}

impl TiltController {
    pub fn new(max_angle: f32, perspective: f32) -> Self {
        TiltController {
            max_angle,
            perspective,
            attached: HashSet::new(),
            transforms: HashMap::new(),
        }
    }

    /// Register cards for tilt handling.
    ///
    /// Re-attaching an already attached card changes nothing, so the call
    /// is safe to repeat when a gallery row is revealed again. Returns how
    /// many cards were newly attached.
    pub fn attach(&mut self, cards: impl IntoIterator<Item = CardId>) -> usize {
        let mut added = 0;
        for card in cards {
            if self.attached.insert(card) {
                added += 1;
            }
        }
        added
    }

    /// Number of cards currently reacting to the pointer
    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }

    /// Handle pointer movement at (x, y) within a card of size (width, height).
    ///
    /// Coordinates are relative to the card's top-left corner. Unattached
    /// cards and degenerate sizes are ignored. Returns the transform now
    /// applied to the card.
    pub fn pointer_moved(
        &mut self,
        card: CardId,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Option<TiltTransform> {
        if !self.attached.contains(&card) || width <= 0.0 || height <= 0.0 {
            return None;
        }

        let offset_x = x - width / 2.0;
        let offset_y = y - height / 2.0;

        let rotate_x = (offset_y / (height / 2.0) * self.max_angle)
            .clamp(-self.max_angle, self.max_angle);
        let rotate_y = (offset_x / (width / 2.0) * -self.max_angle)
            .clamp(-self.max_angle, self.max_angle);

        let transform = TiltTransform {
            rotate_x,
            rotate_y,
            scale: 1.05,
            translate_y: -5.0,
            perspective: self.perspective,
        };

        self.transforms.insert(card, transform);
        Some(transform)
    }

    /// Handle the pointer leaving a card: transform and shadow reset
    pub fn pointer_left(&mut self, card: CardId) {
        self.transforms.remove(&card);
    }

    /// The transform currently applied to a card, if it is hovered
    pub fn transform(&self, card: CardId) -> Option<&TiltTransform> {
        self.transforms.get(&card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: CardId = (0, 0);
    const W: f32 = 200.0;
    const H: f32 = 120.0;

    fn controller() -> TiltController {
        let mut tilt = TiltController::new(10.0, 1000.0);
        tilt.attach([CARD]);
        tilt
    }

    #[test]
    fn centre_of_card_has_no_rotation() {
        let mut tilt = controller();
        let t = tilt.pointer_moved(CARD, W / 2.0, H / 2.0, W, H).unwrap();

        assert_eq!(t.rotate_x, 0.0);
        assert_eq!(t.rotate_y, 0.0);
        assert_eq!(t.scale, 1.05);
        assert_eq!(t.perspective, 1000.0);
    }

    #[test]
    fn edges_reach_max_angle_with_opposite_signs() {
        let mut tilt = controller();

        // Bottom edge centre: full positive X rotation, no Y rotation
        let bottom = tilt.pointer_moved(CARD, W / 2.0, H, W, H).unwrap();
        assert_eq!(bottom.rotate_x, 10.0);
        assert_eq!(bottom.rotate_y, 0.0);

        // Right edge centre: no X rotation, full negative Y rotation
        let right = tilt.pointer_moved(CARD, W, H / 2.0, W, H).unwrap();
        assert_eq!(right.rotate_x, 0.0);
        assert_eq!(right.rotate_y, -10.0);
    }

    #[test]
    fn angles_never_exceed_max_even_outside_bounds() {
        let mut tilt = controller();

        let t = tilt.pointer_moved(CARD, W * 3.0, -H, W, H).unwrap();
        assert!(t.rotate_x.abs() <= 10.0);
        assert!(t.rotate_y.abs() <= 10.0);
    }

    #[test]
    fn leave_resets_transform() {
        let mut tilt = controller();
        tilt.pointer_moved(CARD, W, H, W, H);
        assert!(tilt.transform(CARD).is_some());

        tilt.pointer_left(CARD);
        assert!(tilt.transform(CARD).is_none());
    }

    #[test]
    fn attach_is_idempotent() {
        let mut tilt = TiltController::new(10.0, 1000.0);

        assert_eq!(tilt.attach([(0, 0), (0, 1)]), 2);
        assert_eq!(tilt.attach([(0, 0), (0, 1)]), 0);
        assert_eq!(tilt.attached_count(), 2);
    }

    #[test]
    fn unattached_cards_are_ignored() {
        let mut tilt = controller();

        assert!(tilt.pointer_moved((7, 7), 10.0, 10.0, W, H).is_none());
        assert!(tilt.transform((7, 7)).is_none());
    }
}
