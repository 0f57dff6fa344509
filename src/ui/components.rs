//! UI Components module - business-specific composite components
//!
//! Components handle Message mapping and state access; they are the only
//! layer that imports from `crate::app`.

pub mod bio_modal;
pub mod carousel;
pub mod contact_form;
pub mod faq_accordion;
pub mod feedback_form;
pub mod menu_drawer;
pub mod nav_bar;
pub mod status_banner;

/// Fixed nav bar height; the scroll tracking deducts it so a section
/// counts as active once it passes under the bar
pub const NAV_BAR_HEIGHT: f32 = 80.0;
