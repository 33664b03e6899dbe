/// Gallery view: revealed rows of tilting photo cards plus the trigger
///
/// Each card is wrapped in a mouse area feeding pointer positions to the
/// tilt controller; the resulting transform is rendered as a drop shadow
/// that leans away from the cursor. Cards without a loaded photo show a
/// dark placeholder.

use std::collections::HashMap;

use iced::widget::{button, column, container, image, mouse_area, text};
use iced::{Alignment, Border, Color, ContentFit, Element, Length, Shadow, Vector};
use iced_aw::Wrap;

use crate::config::PortfolioConfig;
use crate::state::gallery::GalleryController;
use crate::state::tilt::{CardId, TiltController};
use crate::Message;

/// Card dimensions in logical pixels; pointer offsets are normalized
/// against these when computing tilt angles.
pub const CARD_WIDTH: f32 = 220.0;
pub const CARD_HEIGHT: f32 = 150.0;

/// Vertical space one revealed row occupies (card plus spacing)
pub const ROW_HEIGHT: f32 = CARD_HEIGHT + ROW_SPACING;

const ROW_SPACING: f32 = 20.0;

pub fn view<'a>(
    gallery: &GalleryController,
    tilt: &TiltController,
    handles: &HashMap<CardId, image::Handle>,
    config: &PortfolioConfig,
) -> Element<'a, Message> {
    let mut content = column![].spacing(ROW_SPACING).align_x(Alignment::Center);

    for row in 0..gallery.visible_rows() {
        let cards: Vec<Element<'a, Message>> = (0..config.cards_per_row)
            .map(|col| card((row, col), tilt, handles.get(&(row, col))))
            .collect();

        content = content.push(Wrap::with_elements(cards).spacing(ROW_SPACING));
    }

    if gallery.show_more_visible() {
        content = content.push(
            button(text(gallery.trigger_label()))
                .on_press(Message::ShowMorePressed)
                .padding(10),
        );
    }

    content.into()
}

fn card<'a>(
    id: CardId,
    tilt: &TiltController,
    handle: Option<&image::Handle>,
) -> Element<'a, Message> {
    // The tilt transform shows up as a shadow leaning away from the
    // cursor; an untouched card casts none.
    let shadow = tilt
        .transform(id)
        .map(|t| Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
            offset: Vector::new(-t.rotate_y * 0.8, 12.0 + t.rotate_x * 0.8),
            blur_radius: 20.0,
        })
        .unwrap_or_default();

    let content: Element<'a, Message> = match handle {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        None => text("").into(),
    };

    let tile = container(content)
        .width(Length::Fixed(CARD_WIDTH))
        .height(Length::Fixed(CARD_HEIGHT))
        .style(move |_theme| container::Style {
            background: Some(Color::from_rgb(0.08, 0.08, 0.12).into()),
            border: Border {
                radius: 10.0.into(),
                ..Border::default()
            },
            shadow,
            ..container::Style::default()
        });

    mouse_area(tile)
        .on_move(move |point| Message::CardMoved {
            card: id,
            x: point.x,
            y: point.y,
        })
        .on_exit(Message::CardLeft { card: id })
        .into()
}
