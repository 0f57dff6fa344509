//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::i18n::{Key, Language, Locale};
pub use message::{FormKind, Message};
pub use state::{
    App, CarouselState, ContactFormState, CoreState, FaqState, FeedbackFormState, ModalContent,
    SubmitPhase, SubmitState, UiState,
};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // Load settings first to initialize locale correctly
        let settings = crate::features::Settings::load();
        let locale = Locale::new(Language::from_tag(&settings.display.language));

        let core = CoreState::new(settings, locale);
        let ui = UiState::new();

        (Self { core, ui }, Task::none())
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title
    pub fn title(&self) -> String {
        self.core.locale.get(Key::AppName).to_string()
    }

    /// Subscriptions for keyboard events, window resize, and the
    /// submission countdown
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;
        use iced::time::Duration;

        // 1. Keyboard events (Escape dismisses modal/drawer)
        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        // 2. Window resize (drives the compact/full layout split)
        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        // 3. Submission countdown (1s), only while a send is pending.
        // The ticker exists only in the Submitting phase, so leaving the
        // phase cancels it rather than racing it.
        let countdown_sub = if subscription_logic::needs_countdown_subscription(
            self.ui.contact.submit.is_submitting(),
            self.ui.feedback.submit.is_submitting(),
        ) {
            iced::time::every(Duration::from_secs(1)).map(|_| Message::CountdownTick)
        } else {
            iced::Subscription::none()
        };

        // Batch all subscriptions
        iced::Subscription::batch([keyboard_sub, resize_sub, countdown_sub])
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_countdown_subscription(
        contact_submitting: bool,
        feedback_submitting: bool,
    ) -> bool {
        contact_submitting || feedback_submitting
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn no_pending_send_means_no_ticker() {
            assert!(!needs_countdown_subscription(false, false));
        }

        #[test]
        fn either_form_pending_keeps_the_ticker() {
            assert!(needs_countdown_subscription(true, false));
            assert!(needs_countdown_subscription(false, true));
            assert!(needs_countdown_subscription(true, true));
        }
    }
}
