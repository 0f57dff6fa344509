//! Pages module - the single scrolling page

pub mod home;
