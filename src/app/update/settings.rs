// src/app/update/settings.rs
//! Settings update handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::i18n::Locale;

impl App {
    /// Handle settings messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::UpdateLanguage(language) => {
                self.core.settings.display.language = language.tag().to_string();
                self.core.locale = Locale::new(*language);
                Some(Task::done(Message::SaveSettings))
            }

            Message::UpdateDarkMode(enabled) => {
                self.core.settings.display.dark_mode = *enabled;
                Some(Task::done(Message::SaveSettings))
            }

            Message::SaveSettings => {
                if let Err(e) = self.core.settings.save() {
                    tracing::error!("Failed to save settings: {}", e);
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
    use crate::i18n::{Key, Language};

    fn test_app() -> App {
        App {
            core: CoreState::new(Settings::default(), Locale::default()),
            ui: UiState::new(),
        }
    }

    #[test]
    fn language_change_updates_locale_and_stored_tag() {
        let mut app = test_app();
        app.update(Message::UpdateLanguage(Language::TraditionalChinese));

        assert_eq!(app.core.settings.display.language, "zh-Hant");
        assert_eq!(app.core.locale.language, Language::TraditionalChinese);
        assert_ne!(app.core.locale.get(Key::NavContact), "???");
    }

    #[test]
    fn language_change_leaves_view_state_alone() {
        let mut app = test_app();
        app.update(Message::CarouselNext);
        app.update(Message::ToggleFaq(crate::features::FaqId::Online));

        app.update(Message::UpdateLanguage(Language::SimplifiedChinese));

        assert_eq!(app.ui.carousel.index, 1, "carousel survives relabeling");
        assert!(app.ui.faq.is_open(crate::features::FaqId::Online));
    }
}
