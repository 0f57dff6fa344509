//! Fixed top navigation bar
//!
//! Full-width link row on wide windows; practice name plus a hamburger
//! button in the compact layout.

use iced::widget::{Space, button, container, row, svg, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::features::content::SectionId;
use crate::i18n::{Key, Locale};
use crate::ui::{icons, theme};

use super::NAV_BAR_HEIGHT;

/// Build the navigation bar
pub fn view(
    active_section: SectionId,
    compact: bool,
    menu_open: bool,
    locale: Locale,
) -> Element<'static, Message> {
    let brand = text(locale.get(Key::AppName).to_string())
        .size(22)
        .font(iced::Font {
            weight: iced::font::Weight::Semibold,
            ..Default::default()
        });

    let right: Element<'static, Message> = if compact {
        // Hamburger flips to a close glyph while the drawer is open
        let icon = if menu_open { icons::CLOSE } else { icons::MENU };
        button(
            svg(svg::Handle::from_memory(icon.as_bytes()))
                .width(24)
                .height(24)
                .style(|theme: &iced::Theme, _status| svg::Style {
                    color: Some(theme::text_primary(theme)),
                }),
        )
        .padding(8)
        .style(theme::text_button)
        .on_press(Message::ToggleMenu)
        .into()
    } else {
        let links: Vec<Element<'static, Message>> = SectionId::all()
            .iter()
            .map(|section| nav_link(*section, active_section, locale))
            .collect();
        row(links).spacing(4).align_y(Alignment::Center).into()
    };

    container(
        row![brand, Space::new().width(Fill), right]
            .align_y(Alignment::Center)
            .width(Fill),
    )
    .width(Fill)
    .height(NAV_BAR_HEIGHT)
    .padding([0, 24])
    .align_y(Alignment::Center)
    .style(theme::nav_bar)
    .into()
}

fn nav_link(
    section: SectionId,
    active_section: SectionId,
    locale: Locale,
) -> Element<'static, Message> {
    let is_active = section == active_section;
    button(text(locale.get(section.nav_key()).to_string()).size(15))
        .padding([8, 14])
        .style(move |theme, status| theme::nav_link(theme, status, is_active))
        .on_press(Message::Navigate(section))
        .into()
}
