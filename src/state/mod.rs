/// State management module
///
/// This module owns all presentation state, independent of the widgets
/// that render it:
/// - Layered starfield generation and animation sampling (starfield.rs)
/// - 3D tilt hover transforms for photo cards (tilt.rs)
/// - Progressive gallery reveal counter and trigger mode (gallery.rs)
/// - The slideshow's per-cell transition state machine (slideshow.rs)
/// - Backdrop height synchronization (layout.rs)

pub mod gallery;
pub mod layout;
pub mod slideshow;
pub mod starfield;
pub mod tilt;
