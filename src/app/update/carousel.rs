// src/app/update/carousel.rs
//! Testimonial carousel message handlers
//!
//! Two input paths feed the same index: the prev/next/dot controls (which
//! drive a scroll of the strip) and free scrolling of the strip (which
//! drives the index back). Both meet in `CarouselState`.

use std::time::Duration;

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::ui::components::carousel;

/// Quiet period before the hover controls fade out
const CONTROLS_HIDE_SECS: u64 = 3;

impl App {
    /// Scroll the testimonial strip to the current index
    fn scroll_carousel_to_index(&self) -> Task<Message> {
        let target_x = carousel::item_offset(self.ui.carousel.index);
        iced::widget::operation::scroll_to(
            iced::widget::Id::new("testimonial_scroll"),
            iced::widget::scrollable::AbsoluteOffset {
                x: Some(target_x),
                y: Some(0.0),
            },
        )
    }

    /// Handle carousel messages
    pub fn handle_carousel(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::CarouselPrev => {
                if self.ui.carousel.prev() {
                    Some(self.scroll_carousel_to_index())
                } else {
                    Some(Task::none())
                }
            }

            Message::CarouselNext => {
                if self.ui.carousel.next() {
                    Some(self.scroll_carousel_to_index())
                } else {
                    Some(Task::none())
                }
            }

            Message::CarouselGoTo(index) => {
                if self.ui.carousel.go_to(*index as i64) {
                    Some(self.scroll_carousel_to_index())
                } else {
                    Some(Task::none())
                }
            }

            Message::CarouselScrolled(x_offset) => {
                let offsets = carousel::item_offsets(self.ui.carousel.item_count);
                let width = carousel::viewport_width(self.core.window_width);
                self.ui.carousel.sync_from_scroll(*x_offset, width, &offsets);
                Some(Task::none())
            }

            Message::CarouselInteracted => {
                let epoch = self.ui.carousel.show_controls();
                Some(Task::perform(
                    tokio::time::sleep(Duration::from_secs(CONTROLS_HIDE_SECS)),
                    move |_| Message::CarouselControlsHideElapsed(epoch),
                ))
            }

            Message::CarouselControlsHideElapsed(epoch) => {
                self.ui.carousel.hide_controls(*epoch);
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

    #[test]
    fn next_then_prev_returns_to_the_start() {
        let mut app = test_app();
        app.update(Message::CarouselNext);
        app.update(Message::CarouselPrev);
        assert_eq!(app.ui.carousel.index, 0);
        assert!(app.ui.carousel.at_start());
    }

    #[test]
    fn dot_clicks_clamp_to_the_valid_range() {
        let mut app = test_app();
        app.update(Message::CarouselGoTo(999));
        assert_eq!(app.ui.carousel.index, app.ui.carousel.item_count - 1);
        assert!(app.ui.carousel.at_end());
    }

    #[test]
    fn free_scroll_updates_the_index() {
        let mut app = test_app();
        // Scroll the strip to just past the second card
        let x = carousel::item_offset(1) + 10.0;
        app.update(Message::CarouselScrolled(x));
        assert_eq!(app.ui.carousel.index, 1);
    }

    #[tokio::test]
    async fn stale_hide_timer_leaves_renewed_controls_visible() {
        let mut app = test_app();
        app.update(Message::CarouselInteracted);
        let stale = app.ui.carousel.controls_epoch;
        app.update(Message::CarouselInteracted);
        app.update(Message::CarouselControlsHideElapsed(stale));
        assert!(app.ui.carousel.controls_visible);
    }
}
