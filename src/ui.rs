//! UI module for the practice site
//! Warm single-page layout with a fixed nav bar and overlay layers
//!
//! # Architecture
//!
//! - **components**: Site-specific UI with Message handling
//! - **pages**: The single scrolling page assembling the sections
//! - **theme**: Palette and shared widget styles
//! - **icons**: Inline SVG assets

pub mod components;
pub mod icons;
pub mod pages;
pub mod theme;
