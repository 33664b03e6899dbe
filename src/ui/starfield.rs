/// Starfield backdrop canvas
///
/// Draws the layered star field at the current elapsed time. Deeper
/// layers are dimmed for a cheap parallax impression. The canvas is
/// sized by the backdrop layout so the field always covers the whole
/// scrollable page.

use iced::mouse::Cursor;
use iced::widget::canvas::{self, Path, Program};
use iced::{Color, Point, Rectangle, Renderer, Theme};

use crate::state::starfield::StarField;
use crate::Message;

/// Deep space wash behind the stars
const NIGHT: Color = Color::from_rgb(0.02, 0.01, 0.05);

/// How much each successive layer is dimmed
const LAYER_DIM: f32 = 0.25;

pub struct Backdrop<'a> {
    /// The generated field, immutable after startup
    pub field: &'a StarField,
    /// Seconds since the application started
    pub elapsed: f32,
}

impl Program<Message> for Backdrop<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), NIGHT);

        for (depth, layer) in self.field.layers().enumerate() {
            let dim = (1.0 - depth as f32 * LAYER_DIM).max(0.2);

            for star in layer {
                let y = star.y_at(self.elapsed) / 100.0 * bounds.height;
                if y < -star.size() || y > bounds.height + star.size() {
                    continue;
                }

                let x = star.x() / 100.0 * bounds.width;
                let alpha = star.alpha_at(self.elapsed) * dim;
                if alpha <= 0.0 {
                    continue;
                }

                frame.fill(
                    &Path::circle(Point::new(x, y), star.size()),
                    Color::from_rgba(1.0, 1.0, 1.0, alpha),
                );
            }
        }

        vec![frame.into_geometry()]
    }
}
