//! The single scrolling page
//!
//! All sections stacked in one vertical scrollable under the fixed nav
//! bar. The scrollable reports its offset so the nav highlight follows
//! the reader; the nav links scroll back to the section anchors.

use iced::widget::{Space, button, column, container, pick_list, row, scrollable, text, toggler};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::{Message, UiState};
use crate::features::settings::SiteSettings;
use crate::i18n::{Key, Language, Locale};
use crate::ui::components::{carousel, contact_form, faq_accordion, feedback_form};
use crate::ui::theme;

/// Build the page content below the nav bar
pub fn view(
    ui: &UiState,
    site: &SiteSettings,
    dark_mode: bool,
    locale: Locale,
) -> Element<'static, Message> {
    let sections = column![
        about_section(ui, locale),
        section(Key::ApproachTitle, approach_body(locale), locale),
        section(Key::FaqTitle, faq_accordion::view(&ui.faq, locale), locale),
        section(
            Key::TestimonialsTitle,
            carousel::view(&ui.carousel, locale),
            locale
        ),
        section(Key::FeesTitle, fees_body(site, locale), locale),
        contact_section(ui, site, locale),
        footer(dark_mode, locale),
    ]
    .spacing(80)
    .width(Fill)
    .max_width(920);

    let content = scrollable(
        container(sections)
            .width(Fill)
            .center_x(Fill)
            .padding(Padding::new(40.0).right(60.0).bottom(80.0).left(60.0)),
    )
    .width(Fill)
    .height(Fill)
    .style(theme::content_scrollable)
    .id(iced::widget::Id::new("content_scroll"));

    // No scroll reporting while the drawer backdrop has the page locked
    if ui.scroll_locked() {
        content.into()
    } else {
        content
            .on_scroll(|viewport| {
                let offset = viewport.absolute_offset();
                Message::ContentScrolled(offset.y)
            })
            .into()
    }
}

fn section_title(key: Key, locale: Locale) -> Element<'static, Message> {
    text(locale.get(key).to_string())
        .size(26)
        .font(iced::Font {
            weight: iced::font::Weight::Semibold,
            ..Default::default()
        })
        .into()
}

fn section(
    title: Key,
    body: Element<'static, Message>,
    locale: Locale,
) -> Element<'static, Message> {
    column![section_title(title, locale), Space::new().height(20), body]
        .width(Fill)
        .into()
}

fn body_text(content: &str) -> Element<'static, Message> {
    text(content.to_string())
        .size(15)
        .style(|theme: &iced::Theme| iced::widget::text::Style {
            color: Some(theme::text_secondary(theme)),
        })
        .into()
}

fn about_section(ui: &UiState, locale: Locale) -> Element<'static, Message> {
    let read_bio = button(text(locale.get(Key::AboutReadBio).to_string()).size(15))
        .padding([10, 20])
        .style(theme::primary_button)
        .on_press(Message::OpenBio);

    let mut body = column![
        body_text(locale.get(Key::AboutBody)),
        Space::new().height(16),
        read_bio,
    ]
    .width(Fill);

    // Inline deployments expand the bio here instead of a modal
    if ui.bio_expanded {
        body = body.push(Space::new().height(16)).push(
            container(body_text(locale.get(Key::BioBody)))
                .width(Fill)
                .padding(20)
                .style(theme::card),
        );
    }

    section(Key::AboutTitle, body.into(), locale)
}

fn approach_body(locale: Locale) -> Element<'static, Message> {
    body_text(locale.get(Key::ApproachBody))
}

fn fees_body(site: &SiteSettings, locale: Locale) -> Element<'static, Message> {
    let detail = |label: Key, value: &str| -> Element<'static, Message> {
        row![
            text(format!("{}:", locale.get(label))).size(15).font(iced::Font {
                weight: iced::font::Weight::Semibold,
                ..Default::default()
            }),
            body_text(value),
        ]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
    };

    column![
        body_text(locale.get(Key::FeesBody)),
        Space::new().height(12),
        detail(Key::LocationsLabel, &site.locations),
        detail(Key::EmailLabel, &site.contact_email),
        detail(Key::PhoneLabel, &site.contact_phone),
    ]
    .spacing(6)
    .width(Fill)
    .into()
}

fn contact_section(
    ui: &UiState,
    site: &SiteSettings,
    locale: Locale,
) -> Element<'static, Message> {
    let mut body = column![
        body_text(locale.get(Key::ContactIntro)),
        Space::new().height(16),
        contact_form::view(&ui.contact, locale),
    ]
    .width(Fill);

    if site.feedback_enabled {
        body = body
            .push(Space::new().height(40))
            .push(section_title(Key::FeedbackTitle, locale))
            .push(Space::new().height(16))
            .push(feedback_form::view(&ui.feedback, locale));
    }

    section(Key::ContactTitle, body.into(), locale)
}

fn footer(dark_mode: bool, locale: Locale) -> Element<'static, Message> {
    let language = pick_list(
        Language::all(),
        Some(locale.language),
        Message::UpdateLanguage,
    )
    .text_size(14)
    .padding([8, 12]);

    let dark_toggle = toggler(dark_mode)
        .label(locale.get(Key::DarkModeLabel).to_string())
        .text_size(14)
        .spacing(8)
        .on_toggle(Message::UpdateDarkMode);

    row![
        text(format!("{}:", locale.get(Key::LanguageLabel))).size(14),
        language,
        Space::new().width(Fill),
        dark_toggle,
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .width(Fill)
    .into()
}
