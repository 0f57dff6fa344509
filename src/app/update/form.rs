// src/app/update/form.rs
//! Contact & feedback form message handlers
//!
//! Both forms share the same submission machine: Idle -> Submitting ->
//! Success (auto-reverts after a display period) or Failure (re-enabled
//! immediately, leaves only through a new submit).

use std::time::Duration;

use iced::Task;

use crate::api::{InquiryPayload, SubmitOutcome};
use crate::app::message::{FormKind, Message};
use crate::app::state::App;

/// How long the success status stays up before reverting to the idle form
const SUCCESS_DISPLAY_SECS: u64 = 3;

impl App {
    /// Dispatch a payload to the relay for the given form
    fn submit_to_relay(&self, kind: FormKind, payload: InquiryPayload) -> Task<Message> {
        match &self.core.relay {
            Some(relay) => {
                let relay = relay.clone();
                Task::perform(
                    async move { relay.submit_outcome(payload).await },
                    move |outcome| Message::SubmitFinished(kind, outcome),
                )
            }
            None => Task::done(Message::SubmitFinished(
                kind,
                SubmitOutcome::Failed("mail relay unavailable".to_string()),
            )),
        }
    }

    /// Handle form messages
    pub fn handle_form(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            // ---- Contact field edits ----
            Message::ContactNameChanged(value) => {
                self.ui.contact.draft.from_name = value.clone();
                Some(Task::none())
            }
            Message::ContactEmailChanged(value) => {
                self.ui.contact.draft.reply_to = value.clone();
                Some(Task::none())
            }
            Message::ContactPhoneChanged(value) => {
                self.ui.contact.draft.phone = value.clone();
                Some(Task::none())
            }
            Message::ContactSubjectChanged(value) => {
                self.ui.contact.draft.subject = value.clone();
                Some(Task::none())
            }
            Message::ContactMessageChanged(value) => {
                self.ui.contact.draft.message = value.clone();
                Some(Task::none())
            }

            // ---- Feedback field edits ----
            Message::FeedbackNameChanged(value) => {
                self.ui.feedback.draft.from_name = value.clone();
                Some(Task::none())
            }
            Message::FeedbackMessageChanged(value) => {
                self.ui.feedback.draft.message = value.clone();
                Some(Task::none())
            }

            // ---- Submission ----
            Message::ContactSubmit => {
                if !self.ui.contact.draft.is_complete() || !self.ui.contact.submit.begin() {
                    return Some(Task::none());
                }
                let draft = self.ui.contact.draft.clone();
                let payload = InquiryPayload::inquiry(
                    draft.from_name,
                    draft.reply_to,
                    draft.phone,
                    draft.subject,
                    draft.message,
                    self.core.locale.language,
                );
                Some(self.submit_to_relay(FormKind::Contact, payload))
            }

            Message::FeedbackSubmit => {
                if !self.ui.feedback.draft.is_complete() || !self.ui.feedback.submit.begin() {
                    return Some(Task::none());
                }
                let draft = self.ui.feedback.draft.clone();
                let payload = InquiryPayload::feedback(
                    draft.from_name,
                    draft.message,
                    self.core.locale.language,
                );
                Some(self.submit_to_relay(FormKind::Feedback, payload))
            }

            Message::SubmitFinished(kind, outcome) => {
                let kind = *kind;
                let form = match kind {
                    FormKind::Contact => &mut self.ui.contact.submit,
                    FormKind::Feedback => &mut self.ui.feedback.submit,
                };
                match outcome {
                    SubmitOutcome::Delivered => {
                        let epoch = form.succeed();
                        // The draft clears exactly once, here; the revert
                        // timer below only changes the status back
                        match kind {
                            FormKind::Contact => self.ui.contact.draft.clear(),
                            FormKind::Feedback => self.ui.feedback.draft.clear(),
                        }
                        Some(Task::perform(
                            tokio::time::sleep(Duration::from_secs(SUCCESS_DISPLAY_SECS)),
                            move |_| Message::StatusRevertElapsed(kind, epoch),
                        ))
                    }
                    SubmitOutcome::Failed(reason) => {
                        tracing::warn!("Form submission failed: {}", reason);
                        form.fail(reason.clone());
                        Some(Task::none())
                    }
                }
            }

            Message::CountdownTick => {
                self.ui.contact.submit.tick();
                self.ui.feedback.submit.tick();
                Some(Task::none())
            }

            Message::StatusRevertElapsed(kind, epoch) => {
                match kind {
                    FormKind::Contact => self.ui.contact.submit.revert(*epoch),
                    FormKind::Feedback => self.ui.feedback.submit.revert(*epoch),
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{CoreState, SubmitPhase, UiState};
    use crate::features::Settings;
    use crate::i18n::Locale;

    fn test_app() -> App {
        let mut app = App {
            core: CoreState::new(Settings::default(), Locale::default()),
            ui: UiState::new(),
        };
        app.ui.contact.draft.from_name = "A. Client".into();
        app.ui.contact.draft.reply_to = "client@example.com".into();
        app.ui.contact.draft.subject = "First appointment".into();
        app.ui.contact.draft.message = "Hello".into();
        app
    }

    #[tokio::test]
    async fn successful_send_runs_the_full_status_sequence() {
        let mut app = test_app();

        app.update(Message::ContactSubmit);
        assert!(app.ui.contact.submit.is_submitting());

        app.update(Message::SubmitFinished(
            FormKind::Contact,
            SubmitOutcome::Delivered,
        ));
        assert_eq!(app.ui.contact.submit.phase, SubmitPhase::Success);
        assert!(
            app.ui.contact.draft.from_name.is_empty(),
            "success must clear the draft"
        );

        let epoch = app.ui.contact.submit.epoch;
        app.update(Message::StatusRevertElapsed(FormKind::Contact, epoch));
        assert_eq!(app.ui.contact.submit.phase, SubmitPhase::Idle);
    }

    #[test]
    fn failed_send_keeps_the_draft_and_does_not_auto_revert() {
        let mut app = test_app();

        app.update(Message::ContactSubmit);
        app.update(Message::SubmitFinished(
            FormKind::Contact,
            SubmitOutcome::Failed("timeout".to_string()),
        ));

        assert_eq!(app.ui.contact.submit.phase, SubmitPhase::Failure);
        assert_eq!(app.ui.contact.submit.last_error.as_deref(), Some("timeout"));
        assert_eq!(
            app.ui.contact.draft.from_name, "A. Client",
            "failure must preserve the draft for retry"
        );

        let epoch = app.ui.contact.submit.epoch;
        app.update(Message::StatusRevertElapsed(FormKind::Contact, epoch));
        assert_eq!(
            app.ui.contact.submit.phase,
            SubmitPhase::Failure,
            "only a new submit leaves Failure"
        );
    }

    #[test]
    fn incomplete_draft_never_starts_a_submission() {
        let mut app = test_app();
        app.ui.contact.draft.reply_to.clear();
        app.update(Message::ContactSubmit);
        assert_eq!(app.ui.contact.submit.phase, SubmitPhase::Idle);
    }

    #[test]
    fn second_submit_while_pending_changes_nothing() {
        let mut app = test_app();
        app.update(Message::ContactSubmit);
        let epoch = app.ui.contact.submit.epoch;
        app.update(Message::ContactSubmit);
        assert_eq!(app.ui.contact.submit.epoch, epoch);
        assert!(app.ui.contact.submit.is_submitting());
    }

    #[test]
    fn the_two_forms_do_not_share_status() {
        let mut app = test_app();
        app.ui.feedback.draft.from_name = "B".into();
        app.ui.feedback.draft.message = "Lovely site".into();

        app.update(Message::FeedbackSubmit);
        app.update(Message::SubmitFinished(
            FormKind::Feedback,
            SubmitOutcome::Failed("dns error".to_string()),
        ));

        assert_eq!(app.ui.feedback.submit.phase, SubmitPhase::Failure);
        assert_eq!(app.ui.contact.submit.phase, SubmitPhase::Idle);
    }

    #[test]
    fn countdown_ticks_only_while_submitting() {
        let mut app = test_app();
        app.update(Message::CountdownTick);
        assert_eq!(app.ui.contact.submit.phase, SubmitPhase::Idle);

        app.update(Message::ContactSubmit);
        app.update(Message::CountdownTick);
        assert_eq!(
            app.ui.contact.submit.phase,
            SubmitPhase::Submitting { countdown: 2 }
        );
    }
}
