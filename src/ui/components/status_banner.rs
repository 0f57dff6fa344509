//! Submission status line shared by both forms
//!
//! Mirrors the submit machine: a counting "sending" line while pending,
//! green confirmation on success, red advice on failure. Idle renders
//! nothing.

use iced::widget::{Space, text};
use iced::Element;

use crate::app::{Message, SubmitPhase, SubmitState};
use crate::i18n::{Key, Locale};
use crate::ui::theme;

/// Texts a form supplies for its status line
#[derive(Debug, Clone, Copy)]
pub struct StatusKeys {
    pub sending: Key,
    pub sent: Key,
    pub failed: Key,
}

/// Build the status line
pub fn view(submit: &SubmitState, keys: StatusKeys, locale: Locale) -> Element<'static, Message> {
    match &submit.phase {
        SubmitPhase::Idle => Space::new().width(0).height(0).into(),
        SubmitPhase::Submitting { countdown } => {
            text(format!("{} {}", locale.get(keys.sending), countdown))
                .size(14)
                .color(theme::ACCENT)
                .into()
        }
        SubmitPhase::Success => text(locale.get(keys.sent).to_string())
            .size(14)
            .color(theme::SUCCESS)
            .into(),
        SubmitPhase::Failure => text(locale.get(keys.failed).to_string())
            .size(14)
            .color(theme::DANGER)
            .into(),
    }
}
