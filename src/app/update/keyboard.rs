// src/app/update/keyboard.rs
//! Keyboard message handlers

use iced::Task;
use iced::keyboard::Key;
use iced::keyboard::key::Named;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle global keyboard messages
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(key, _modifiers) => {
                if let Key::Named(Named::Escape) = key {
                    // Escape closes the topmost layer only. Only the layering
                    // decision lives here; the close itself goes back through
                    // the canonical messages so the gestures cannot drift apart
                    if self.ui.modal.is_some() {
                        return Some(self.update(Message::CloseBio));
                    }
                    if self.ui.menu_open {
                        return Some(self.update(Message::CloseMenu));
                    }
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
    use crate::app::state::{CoreState, UiState};
    use crate::features::Settings;
    use crate::i18n::Locale;

    fn test_app() -> App {
        App {
            core: CoreState::new(Settings::default(), Locale::default()),
            ui: UiState::new(),
        }
    }

    fn press_escape(app: &mut App) {
        app.update(Message::KeyPressed(
            Key::Named(Named::Escape),
            iced::keyboard::Modifiers::default(),
        ));
    }

    #[test]
    fn escape_closes_the_modal_before_the_drawer() {
        let mut app = test_app();
        app.update(Message::ToggleMenu);
        app.update(Message::OpenBio);

        press_escape(&mut app);
        assert!(app.ui.modal.is_none());
        assert!(app.ui.menu_open, "drawer stays open until its own Escape");

        press_escape(&mut app);
        assert!(!app.ui.menu_open);
    }

    #[test]
    fn escape_is_the_same_transition_as_the_close_messages() {
        // Whatever the close handlers do, Escape must do exactly that
        let mut via_escape = test_app();
        via_escape.update(Message::ToggleMenu);
        via_escape.update(Message::OpenBio);
        press_escape(&mut via_escape);
        press_escape(&mut via_escape);

        let mut via_messages = test_app();
        via_messages.update(Message::ToggleMenu);
        via_messages.update(Message::OpenBio);
        via_messages.update(Message::CloseBio);
        via_messages.update(Message::CloseMenu);

        assert_eq!(via_escape.ui.modal, via_messages.ui.modal);
        assert_eq!(via_escape.ui.menu_open, via_messages.ui.menu_open);
        assert_eq!(via_escape.ui.bio_expanded, via_messages.ui.bio_expanded);
    }

    #[test]
    fn escape_with_nothing_open_is_a_no_op() {
        let mut app = test_app();
        press_escape(&mut app);
        assert!(app.ui.modal.is_none());
        assert!(!app.ui.menu_open);
    }
}
