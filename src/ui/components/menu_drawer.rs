//! Slide-in navigation drawer (compact layout)
//!
//! Rendered as a full-screen overlay: a dimmed backdrop that closes the
//! drawer on press, with the link panel anchored to the right edge. The
//! opaque backdrop is also what locks the page scroll underneath.

use iced::mouse::Interaction;
use iced::widget::{Space, button, column, container, mouse_area, opaque, row, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::features::content::SectionId;
use crate::i18n::Locale;
use crate::ui::theme;

const DRAWER_WIDTH: f32 = 260.0;

/// Build the drawer overlay
pub fn view(active_section: SectionId, locale: Locale) -> Element<'static, Message> {
    let links: Vec<Element<'static, Message>> = SectionId::all()
        .iter()
        .map(|section| {
            let is_active = *section == active_section;
            button(
                text(locale.get(section.nav_key()).to_string())
                    .size(17)
                    .width(Fill),
            )
            .width(Fill)
            .padding([14, 20])
            .style(move |theme, status| theme::nav_link(theme, status, is_active))
            .on_press(Message::Navigate(*section))
            .into()
        })
        .collect();

    let panel = container(column(links).spacing(4).padding(16).width(Fill))
        .width(DRAWER_WIDTH)
        .height(Fill)
        .style(theme::drawer_panel);

    // Swallow presses on the panel itself so they don't reach the backdrop
    let panel = mouse_area(panel).on_press(Message::Noop);

    let layout = row![Space::new().width(Fill), panel]
        .width(Fill)
        .height(Fill)
        .align_y(Alignment::Start);

    let backdrop = container(layout)
        .width(Fill)
        .height(Fill)
        .style(|theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(theme::overlay_backdrop(
                theme, 0.45,
            ))),
            ..Default::default()
        });

    // opaque blocks events from the page below; pressing the dimmed area
    // closes the drawer without navigating
    opaque(
        mouse_area(backdrop)
            .interaction(Interaction::Idle)
            .on_press(Message::CloseMenu),
    )
    .into()
}
