// src/app/update/window.rs
//! Window message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle window messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::WindowResized(size) => {
                self.core.window_width = size.width;
                // The drawer only exists in the compact layout; growing
                // past the breakpoint must not leave a phantom scroll lock
                if !self.core.is_compact() {
                    self.ui.menu_open = false;
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
    use crate::app::state::{COMPACT_BREAKPOINT, CoreState, UiState};
    use crate::features::Settings;
    use crate::i18n::Locale;

    fn test_app() -> App {
        App {
            core: CoreState::new(Settings::default(), Locale::default()),
            ui: UiState::new(),
        }
    }

    #[test]
    fn growing_past_the_breakpoint_closes_the_drawer() {
        let mut app = test_app();
        app.update(Message::WindowResized(iced::Size::new(400.0, 800.0)));
        assert!(app.core.is_compact());
        app.update(Message::ToggleMenu);
        assert!(app.ui.scroll_locked());

        app.update(Message::WindowResized(iced::Size::new(
            COMPACT_BREAKPOINT + 200.0,
            800.0,
        )));
        assert!(!app.core.is_compact());
        assert!(!app.ui.menu_open, "wide layout must drop the drawer");
        assert!(!app.ui.scroll_locked());
    }
}
