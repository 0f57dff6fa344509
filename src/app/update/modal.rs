// src/app/update/modal.rs
//! Bio modal message handlers
//!
//! Every dismissal gesture (close button, backdrop click, Escape) funnels
//! into the single `CloseBio` message, so they cannot drift apart.

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle bio modal messages
    pub fn handle_modal(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::OpenBio => {
                self.ui.show_bio(self.core.settings.site.bio_presentation);
                Some(Task::none())
            }

            Message::CloseBio => {
                self.ui.modal = None;
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{CoreState, ModalContent, UiState};
    use crate::features::{BioPresentation, Settings};
    use crate::i18n::Locale;

    fn test_app() -> App {
        App {
            core: CoreState::new(Settings::default(), Locale::default()),
            ui: UiState::new(),
        }
    }

    #[test]
    fn open_bio_shows_the_modal_on_modal_deployments() {
        let mut app = test_app();
        app.update(Message::OpenBio);
        assert_eq!(app.ui.modal, Some(ModalContent::bio()));
        assert!(!app.ui.bio_expanded);
    }

    #[test]
    fn open_bio_expands_inline_on_inline_deployments() {
        let mut app = test_app();
        app.core.settings.site.bio_presentation = BioPresentation::Inline;
        app.update(Message::OpenBio);
        assert!(app.ui.modal.is_none());
        assert!(app.ui.bio_expanded);
        // A second press collapses again
        app.update(Message::OpenBio);
        assert!(!app.ui.bio_expanded);
    }

    #[test]
    fn every_dismissal_gesture_lands_in_the_same_state() {
        // Close button, backdrop click, and Escape all emit CloseBio; a
        // state reached through any of them must be identical.
        let mut via_button = test_app();
        via_button.update(Message::OpenBio);
        via_button.update(Message::CloseBio);

        let mut via_escape = test_app();
        via_escape.update(Message::OpenBio);
        via_escape.update(Message::KeyPressed(
            iced::keyboard::Key::Named(iced::keyboard::key::Named::Escape),
            iced::keyboard::Modifiers::default(),
        ));

        assert_eq!(via_button.ui.modal, via_escape.ui.modal);
        assert!(via_button.ui.modal.is_none());
    }

    #[test]
    fn close_with_no_modal_open_is_a_no_op() {
        let mut app = test_app();
        app.update(Message::CloseBio);
        assert!(app.ui.modal.is_none());
    }
}
