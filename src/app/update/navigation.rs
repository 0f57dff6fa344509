// src/app/update/navigation.rs
//! Navigation message handlers: nav links, drawer menu, scroll tracking

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::content::SectionId;

/// Scroll positions of each section in the content column
const SECTION_POSITIONS: [(SectionId, f32); 6] = [
    (SectionId::About, 0.0),
    (SectionId::Approach, 760.0),
    (SectionId::Faq, 1380.0),
    (SectionId::Testimonials, 2240.0),
    (SectionId::Fees, 2780.0),
    (SectionId::Contact, 3320.0),
];

/// Fixed nav bar height, deducted so a section counts as active as soon
/// as it passes under the bar rather than the top of the window
const HEADER_HEIGHT: f32 = 80.0;

/// Get target scroll position for a section
fn section_scroll_position(section: SectionId) -> f32 {
    SECTION_POSITIONS
        .iter()
        .find(|(s, _)| *s == section)
        .map(|(_, pos)| *pos)
        .unwrap_or(0.0)
}

/// Get the section a scroll offset falls in: the last section whose start
/// the (header-adjusted) offset has reached. Offsets above the first
/// section and below the last stay pinned to the edge sections.
fn section_from_scroll_position(
    y_offset: f32,
    positions: &[(SectionId, f32)],
    header_height: f32,
) -> SectionId {
    let search_offset = y_offset + header_height;

    let mut current_section = positions.first().map(|(s, _)| *s).unwrap_or_default();
    for (section, pos) in positions.iter() {
        if search_offset >= *pos {
            current_section = *section;
        } else {
            break;
        }
    }
    current_section
}

impl App {
    /// Handle navigation-related messages
    pub fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Noop => Some(Task::none()),

            Message::Navigate(section) => {
                self.ui.active_section = *section;
                // A drawer navigation closes the drawer as part of the
                // same transition, never as a separate step
                self.ui.menu_open = false;
                let target_y = section_scroll_position(*section);
                Some(iced::widget::operation::scroll_to(
                    iced::widget::Id::new("content_scroll"),
                    iced::widget::scrollable::AbsoluteOffset {
                        x: Some(0.0),
                        y: Some(target_y),
                    },
                ))
            }

            Message::ContentScrolled(y_offset) => {
                // Residual scroll events (momentum) can still arrive while
                // the drawer backdrop has the page locked; they must not
                // move the nav highlight under the open drawer
                if !self.ui.scroll_locked() {
                    self.ui.active_section =
                        section_from_scroll_position(*y_offset, &SECTION_POSITIONS, HEADER_HEIGHT);
                }
                Some(Task::none())
            }

            Message::ToggleMenu => {
                self.ui.menu_open = !self.ui.menu_open;
                Some(Task::none())
            }

            Message::CloseMenu => {
                self.ui.menu_open = false;
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDARIES: [(SectionId, f32); 3] = [
        (SectionId::About, 0.0),
        (SectionId::Approach, 500.0),
        (SectionId::Faq, 1200.0),
    ];

    #[test]
    fn offset_inside_a_section_selects_it() {
        // 600 + 80 header lands past the 500 boundary but short of 1200
        assert_eq!(
            section_from_scroll_position(600.0, &BOUNDARIES, 80.0),
            SectionId::Approach
        );
    }

    #[test]
    fn offset_near_the_top_selects_the_first_section() {
        assert_eq!(
            section_from_scroll_position(50.0, &BOUNDARIES, 80.0),
            SectionId::About
        );
    }

    #[test]
    fn offset_past_the_last_boundary_pins_to_the_last_section() {
        assert_eq!(
            section_from_scroll_position(99999.0, &BOUNDARIES, 80.0),
            SectionId::Faq
        );
    }

    #[test]
    fn negative_overscroll_pins_to_the_first_section() {
        assert_eq!(
            section_from_scroll_position(-200.0, &BOUNDARIES, 80.0),
            SectionId::About
        );
    }

    #[test]
    fn every_section_has_a_scroll_position() {
        let mut last = -1.0;
        for section in SectionId::all() {
            let pos = section_scroll_position(*section);
            assert!(pos > last, "positions must be strictly increasing");
            last = pos;
        }
    }

    mod property_drawer {
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
        fn toggle_flips_and_navigation_closes() {
            let mut app = test_app();
            app.update(Message::ToggleMenu);
            assert!(app.ui.menu_open);
            assert!(app.ui.scroll_locked());

            app.update(Message::Navigate(SectionId::Fees));
            assert!(!app.ui.menu_open, "navigating must close the drawer");
            assert_eq!(app.ui.active_section, SectionId::Fees);
            assert!(!app.ui.scroll_locked());
        }

        #[test]
        fn toggle_is_its_own_inverse() {
            let mut app = test_app();
            app.update(Message::ToggleMenu);
            app.update(Message::ToggleMenu);
            assert!(!app.ui.menu_open);
        }

        #[test]
        fn scroll_events_are_ignored_while_the_drawer_is_open() {
            let mut app = test_app();
            app.update(Message::ToggleMenu);
            app.update(Message::ContentScrolled(3400.0));
            assert_eq!(
                app.ui.active_section,
                SectionId::About,
                "locked page must not move the nav highlight"
            );

            app.update(Message::CloseMenu);
            app.update(Message::ContentScrolled(3400.0));
            assert_eq!(app.ui.active_section, SectionId::Contact);
        }
    }
}
