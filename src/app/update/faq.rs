// src/app/update/faq.rs
//! FAQ accordion message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle FAQ accordion messages
    pub fn handle_faq(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ToggleFaq(id) => {
                self.ui.faq.toggle(*id);
                Some(Task::none())
            }
            _ => None,
        }
    }
}
