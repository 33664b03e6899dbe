/// Slideshow view: a row of square cells cycling through the catalog
///
/// A cell shows its photo only while the state machine reports it as
/// loaded; during fade-out, swap and failed loads it renders as a black
/// tile, which is the visual the CSS transition produced on the page.

use iced::widget::{container, image, Row};
use iced::{Border, Color, ContentFit, Element, Length};

use crate::state::slideshow::Slideshow;
use crate::Message;

/// Edge length of one slideshow cell in logical pixels
pub const CELL_SIZE: f32 = 180.0;

const CELL_SPACING: f32 = 16.0;

pub fn view<'a>(show: &Slideshow, handles: &[Option<image::Handle>]) -> Element<'a, Message> {
    let cells: Vec<Element<'a, Message>> = (0..show.cell_count())
        .map(|index| {
            let handle = handles.get(index).and_then(Option::as_ref);
            cell(show.is_loaded(index), handle)
        })
        .collect();

    Row::with_children(cells).spacing(CELL_SPACING).into()
}

fn cell<'a>(loaded: bool, handle: Option<&image::Handle>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match (loaded, handle) {
        (true, Some(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        // Blacked out between fade-out and the next confirmed load
        _ => iced::widget::Space::new(Length::Fill, Length::Fill).into(),
    };

    container(content)
        .width(Length::Fixed(CELL_SIZE))
        .height(Length::Fixed(CELL_SIZE))
        .style(|_theme| container::Style {
            background: Some(Color::BLACK.into()),
            border: Border {
                radius: 8.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}
