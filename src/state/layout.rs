/// Backdrop height synchronization
///
/// The starfield backdrop must always cover the full scrollable page,
/// even as the content grows (gallery reveals) or the window changes
/// size. The synchronizer takes the maximum of the page metrics and
/// applies it as the backdrop's explicit height, on startup, on every
/// resize and after every reveal.

/// Measurements of the page at one point in time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMetrics {
    /// Height of the window's visible area
    pub viewport_height: f32,
    /// Estimated height of the laid-out content
    pub content_height: f32,
    /// Floor below which the backdrop never shrinks
    pub min_height: f32,
}

/// Owns the backdrop's explicit height
#[derive(Debug, Default)]
pub struct BackdropLayout {
    height: f32,
}

impl BackdropLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the backdrop height from fresh metrics
    pub fn sync(&mut self, metrics: PageMetrics) -> f32 {
        self.height = metrics
            .viewport_height
            .max(metrics.content_height)
            .max(metrics.min_height);
        self.height
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}
