//! FAQ accordion component
//!
//! One question open at a time; the open state lives in `FaqState`, the
//! rows here only emit `ToggleFaq`.

use iced::widget::{button, column, container, row, svg, text};
use iced::{Alignment, Element, Fill};

use crate::app::{FaqState, Message};
use crate::features::content::FaqId;
use crate::i18n::Locale;
use crate::ui::{icons, theme};

/// Build the accordion
pub fn view(faq: &FaqState, locale: Locale) -> Element<'static, Message> {
    let items: Vec<Element<'static, Message>> = FaqId::all()
        .iter()
        .map(|id| item(*id, faq.is_open(*id), locale))
        .collect();

    column(items).spacing(8).width(Fill).into()
}

fn item(id: FaqId, is_open: bool, locale: Locale) -> Element<'static, Message> {
    let chevron = if is_open {
        icons::CHEVRON_UP
    } else {
        icons::CHEVRON_DOWN
    };

    let question = button(
        row![
            text(locale.get(id.question_key()).to_string())
                .size(16)
                .width(Fill),
            svg(svg::Handle::from_memory(chevron.as_bytes()))
                .width(18)
                .height(18)
                .style(|theme: &iced::Theme, _status| svg::Style {
                    color: Some(theme::text_secondary(theme)),
                }),
        ]
        .align_y(Alignment::Center)
        .spacing(12),
    )
    .width(Fill)
    .padding([14, 16])
    .style(theme::faq_question)
    .on_press(Message::ToggleFaq(id));

    if is_open {
        let answer = container(
            text(locale.get(id.answer_key()).to_string())
                .size(15)
                .style(|theme: &iced::Theme| iced::widget::text::Style {
                    color: Some(theme::text_secondary(theme)),
                }),
        )
        .width(Fill)
        .padding([12, 16]);

        container(column![question, answer].width(Fill))
            .width(Fill)
            .style(theme::card)
            .into()
    } else {
        container(question).width(Fill).style(theme::card).into()
    }
}
