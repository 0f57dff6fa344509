//! Testimonial carousel component
//!
//! A horizontal strip of cards with prev/next controls and indicator
//! dots. The controls fade in on pointer contact and hide again after a
//! quiet period; free scrolling of the strip feeds the index back
//! through `CarouselScrolled`.

use iced::mouse::Interaction;
use iced::widget::{Space, button, column, container, mouse_area, row, scrollable, stack, svg, text};
use iced::{Alignment, Element, Fill};

use crate::app::{CarouselState, Message};
use crate::features::content::TESTIMONIALS;
use crate::i18n::Locale;
use crate::ui::{icons, theme};

/// Card width in the strip
pub const CARD_WIDTH: f32 = 360.0;

/// Gap between cards
pub const CARD_SPACING: f32 = 16.0;

/// Horizontal space the page chrome takes away from the strip
const CONTENT_INSET: f32 = 120.0;

const CARD_HEIGHT: f32 = 200.0;
const INDICATOR_SIZE: f32 = 10.0;

/// Scroll offset of the item at `index`
pub fn item_offset(index: usize) -> f32 {
    index as f32 * (CARD_WIDTH + CARD_SPACING)
}

/// Scroll offsets of every item in a strip of `count` cards
pub fn item_offsets(count: usize) -> Vec<f32> {
    (0..count).map(item_offset).collect()
}

/// Visible width of the strip for a given window width
pub fn viewport_width(window_width: f32) -> f32 {
    (window_width - CONTENT_INSET).max(CARD_WIDTH)
}

/// Build the carousel
pub fn view(carousel: &CarouselState, locale: Locale) -> Element<'static, Message> {
    let cards: Vec<Element<'static, Message>> = TESTIMONIALS
        .iter()
        .map(|key| {
            container(
                text(format!("\u{201c}{}\u{201d}", locale.get(*key)))
                    .size(15)
                    .style(|theme: &iced::Theme| iced::widget::text::Style {
                        color: Some(theme::text_secondary(theme)),
                    }),
            )
            .width(CARD_WIDTH)
            .height(CARD_HEIGHT)
            .padding(24)
            .style(theme::card)
            .into()
        })
        .collect();

    let strip = scrollable(row(cards).spacing(CARD_SPACING))
        .direction(iced::widget::scrollable::Direction::Horizontal(
            iced::widget::scrollable::Scrollbar::new()
                .width(0)
                .scroller_width(0),
        ))
        .width(Fill)
        .id(iced::widget::Id::new("testimonial_scroll"))
        .on_scroll(|viewport| {
            let offset = viewport.absolute_offset();
            Message::CarouselScrolled(offset.x)
        });

    let controls: Element<'static, Message> = if carousel.controls_visible {
        row![
            nav_button(icons::CHEVRON_LEFT, Message::CarouselPrev, carousel.at_start()),
            Space::new().width(Fill),
            nav_button(icons::CHEVRON_RIGHT, Message::CarouselNext, carousel.at_end()),
        ]
        .width(Fill)
        .align_y(Alignment::Center)
        .into()
    } else {
        Space::new().width(0).height(0).into()
    };

    let body = stack![
        strip,
        container(controls)
            .width(Fill)
            .height(CARD_HEIGHT)
            .align_y(Alignment::Center),
    ]
    .width(Fill);

    let content = column![body, Space::new().height(16), dots(carousel)]
        .width(Fill)
        .align_x(Alignment::Center);

    // Any pointer contact shows the controls and restarts the hide timer
    mouse_area(content)
        .interaction(Interaction::Idle)
        .on_enter(Message::CarouselInteracted)
        .on_move(|_| Message::CarouselInteracted)
        .into()
}

fn nav_button(icon: &str, message: Message, disabled: bool) -> Element<'static, Message> {
    let btn = button(
        svg(svg::Handle::from_memory(icon.as_bytes().to_vec()))
            .width(20)
            .height(20)
            .style(|theme: &iced::Theme, _status| svg::Style {
                color: Some(theme::text_primary(theme)),
            }),
    )
    .padding(10)
    .style(theme::carousel_nav_button);

    // Edge buttons render but take no action; the state clamp backs this up
    if disabled {
        btn.into()
    } else {
        btn.on_press(message).into()
    }
}

fn dots(carousel: &CarouselState) -> Element<'static, Message> {
    let dots: Vec<Element<'static, Message>> = (0..carousel.item_count)
        .map(|i| {
            let is_active = i == carousel.index;
            button(
                container(Space::new().width(INDICATOR_SIZE).height(INDICATOR_SIZE)).style(
                    move |theme: &iced::Theme| iced::widget::container::Style {
                        background: Some(iced::Background::Color(if is_active {
                            theme::ACCENT
                        } else {
                            theme::indicator_inactive(theme)
                        })),
                        border: iced::Border {
                            radius: (INDICATOR_SIZE / 2.0).into(),
                            ..Default::default()
                        },
                        ..Default::default()
                    },
                ),
            )
            .padding(4)
            .style(theme::text_button)
            .on_press(Message::CarouselGoTo(i))
            .into()
        })
        .collect();

    row(dots).spacing(4).align_y(Alignment::Center).into()
}
