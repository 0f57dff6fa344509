//! Feedback form component
//!
//! A short name + message form sharing the submission machine with the
//! contact form, but with its own status texts.

use iced::widget::{Space, button, column, text, text_input};
use iced::{Element, Fill};

use crate::app::{FeedbackFormState, Message};
use crate::i18n::{Key, Locale};
use crate::ui::components::status_banner;
use crate::ui::theme;

/// Build the feedback form
pub fn view(form: &FeedbackFormState, locale: Locale) -> Element<'static, Message> {
    let name = text_input(locale.get(Key::FormName), &form.draft.from_name)
        .on_input(Message::FeedbackNameChanged)
        .padding(12)
        .style(theme::form_input);

    let message = text_input(locale.get(Key::FeedbackPlaceholder), &form.draft.message)
        .on_input(Message::FeedbackMessageChanged)
        .padding(12)
        .style(theme::form_input);

    let sendable = form.draft.is_complete() && !form.submit.is_submitting();
    let submit = button(text(locale.get(Key::FeedbackSubmit).to_string()).size(15))
        .padding([12, 28])
        .style(theme::primary_button)
        .on_press_maybe(sendable.then_some(Message::FeedbackSubmit));

    let status = status_banner::view(
        &form.submit,
        status_banner::StatusKeys {
            sending: Key::FeedbackSubmitting,
            sent: Key::FeedbackThanks,
            failed: Key::FeedbackFailed,
        },
        locale,
    );

    column![name, message, Space::new().height(4), submit, status]
        .spacing(12)
        .width(Fill)
        .into()
}
