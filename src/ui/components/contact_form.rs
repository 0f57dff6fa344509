//! Contact form component
//!
//! The send button disables itself while a submission is pending or the
//! required fields are incomplete; the failure status leaves the draft in
//! place so the visitor can retry.

use iced::widget::{Space, button, column, text, text_input};
use iced::{Element, Fill};

use crate::app::{ContactFormState, Message};
use crate::i18n::{Key, Locale};
use crate::ui::components::status_banner;
use crate::ui::theme;

/// Build the contact form
pub fn view(form: &ContactFormState, locale: Locale) -> Element<'static, Message> {
    let name = text_input(locale.get(Key::FormName), &form.draft.from_name)
        .on_input(Message::ContactNameChanged)
        .padding(12)
        .style(theme::form_input);

    let email = text_input(locale.get(Key::FormEmail), &form.draft.reply_to)
        .on_input(Message::ContactEmailChanged)
        .padding(12)
        .style(theme::form_input);

    let phone = text_input(locale.get(Key::FormPhone), &form.draft.phone)
        .on_input(Message::ContactPhoneChanged)
        .padding(12)
        .style(theme::form_input);

    let subject = text_input(locale.get(Key::FormSubject), &form.draft.subject)
        .on_input(Message::ContactSubjectChanged)
        .padding(12)
        .style(theme::form_input);

    let message = text_input(locale.get(Key::FormMessage), &form.draft.message)
        .on_input(Message::ContactMessageChanged)
        .padding(12)
        .style(theme::form_input);

    let sendable = form.draft.is_complete() && !form.submit.is_submitting();
    let send = button(text(locale.get(Key::FormSend).to_string()).size(15))
        .padding([12, 28])
        .style(theme::primary_button)
        .on_press_maybe(sendable.then_some(Message::ContactSubmit));

    let status = status_banner::view(
        &form.submit,
        status_banner::StatusKeys {
            sending: Key::FormSending,
            sent: Key::FormSent,
            failed: Key::FormFailed,
        },
        locale,
    );

    column![
        name,
        email,
        phone,
        subject,
        message,
        Space::new().height(4),
        send,
        status,
    ]
    .spacing(12)
    .width(Fill)
    .into()
}
