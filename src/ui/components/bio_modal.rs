//! Bio modal overlay
//!
//! Dimmed backdrop with a centered card. Pressing the backdrop, the
//! close button, or Escape all emit the same `CloseBio`.

use iced::mouse::Interaction;
use iced::widget::{Space, button, column, container, mouse_area, opaque, row, scrollable, svg,
    text};
use iced::{Alignment, Element, Fill};

use crate::app::{Message, ModalContent};
use crate::i18n::Locale;
use crate::ui::{icons, theme};

/// Build the modal overlay
pub fn view(content: ModalContent, locale: Locale) -> Element<'static, Message> {
    let close = button(
        svg(svg::Handle::from_memory(icons::CLOSE.as_bytes()))
            .width(18)
            .height(18)
            .style(|theme: &iced::Theme, _status| svg::Style {
                color: Some(theme::text_secondary(theme)),
            }),
    )
    .padding(6)
    .style(theme::text_button)
    .on_press(Message::CloseBio);

    let header = row![
        text(locale.get(content.title).to_string()).size(20).font(iced::Font {
            weight: iced::font::Weight::Semibold,
            ..Default::default()
        }),
        Space::new().width(Fill),
        close,
    ]
    .align_y(Alignment::Center);

    let body = scrollable(
        text(locale.get(content.body).to_string())
            .size(15)
            .style(|theme: &iced::Theme| iced::widget::text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
    )
    .height(Fill);

    let card = container(
        column![header, Space::new().height(16), body]
            .width(Fill)
            .height(Fill),
    )
    .width(560)
    .max_height(520)
    .padding(28)
    .style(theme::modal_card);

    // Presses on the card stay on the card
    let card = mouse_area(card).on_press(Message::Noop);

    let backdrop = container(card)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(|theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(theme::overlay_backdrop(
                theme, 0.5,
            ))),
            ..Default::default()
        });

    // opaque blocks events from the page below; the backdrop press is the
    // click-outside dismissal gesture
    opaque(
        mouse_area(backdrop)
            .interaction(Interaction::Idle)
            .on_press(Message::CloseBio),
    )
    .into()
}
