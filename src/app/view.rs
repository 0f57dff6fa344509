// src/app/view.rs
//! Application view rendering

use iced::widget::{Space, column, container, stack};
use iced::{Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::{components, pages, theme};

impl App {
    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        let nav_bar = components::nav_bar::view(
            self.ui.active_section,
            self.core.is_compact(),
            self.ui.menu_open,
            self.core.locale,
        );

        let page = pages::home::view(
            &self.ui,
            &self.core.settings.site,
            self.core.settings.display.dark_mode,
            self.core.locale,
        );

        let main_layout = container(column![nav_bar, page].width(Fill).height(Fill))
            .width(Fill)
            .height(Fill)
            .style(theme::main_content);

        // Drawer overlay (empty space if closed) - the opaque backdrop is
        // what locks the page scroll while it is up
        let drawer_overlay: Element<'_, Message> = if self.ui.menu_open {
            components::menu_drawer::view(self.ui.active_section, self.core.locale)
        } else {
            Space::new().width(0).height(0).into()
        };

        // Bio modal overlay (empty space if closed)
        let modal_overlay: Element<'_, Message> = if let Some(content) = self.ui.modal {
            components::bio_modal::view(content, self.core.locale)
        } else {
            Space::new().width(0).height(0).into()
        };

        // Always use consistent stack structure to preserve scroll position
        stack![main_layout, drawer_overlay, modal_overlay]
            .width(Fill)
            .height(Fill)
            .into()
    }
}
