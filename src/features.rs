//! Feature modules - business logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod content;
pub mod settings;

pub use content::{FaqId, SectionId};
pub use settings::{BioPresentation, Settings};
