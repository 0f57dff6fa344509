//! Application messages

use iced::keyboard::{Key, Modifiers};

use crate::api::SubmitOutcome;
use crate::features::content::{FaqId, SectionId};
use crate::i18n::Language;

/// Which form a shared submission message belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Feedback,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// No-op message for event interception (modal backdrop hover etc.)
    Noop,

    // ============ Navigation ============
    /// Nav link or drawer entry selected
    Navigate(SectionId),
    /// Main content scrolled (y offset in pixels)
    ContentScrolled(f32),
    /// Hamburger toggled
    ToggleMenu,
    /// Close the drawer without navigating (backdrop click)
    CloseMenu,

    // ============ FAQ ============
    /// FAQ question header clicked
    ToggleFaq(FaqId),

    // ============ Testimonial carousel ============
    /// Step back one testimonial
    CarouselPrev,
    /// Advance one testimonial
    CarouselNext,
    /// Indicator dot clicked
    CarouselGoTo(usize),
    /// Carousel strip scrolled freely (x offset in pixels)
    CarouselScrolled(f32),
    /// Pointer entered the carousel; show the controls
    CarouselInteracted,
    /// Controls quiet-period timer fired
    CarouselControlsHideElapsed(u64),

    // ============ Bio ============
    /// "Read full bio" pressed; opens the modal or expands inline
    OpenBio,
    /// Modal dismissed (close button, backdrop click, or Escape)
    CloseBio,

    // ============ Contact form ============
    ContactNameChanged(String),
    ContactEmailChanged(String),
    ContactPhoneChanged(String),
    ContactSubjectChanged(String),
    ContactMessageChanged(String),
    /// Send button pressed
    ContactSubmit,

    // ============ Feedback form ============
    FeedbackNameChanged(String),
    FeedbackMessageChanged(String),
    /// Feedback submit pressed
    FeedbackSubmit,

    // ============ Shared submission plumbing ============
    /// Relay round-trip finished
    SubmitFinished(FormKind, SubmitOutcome),
    /// One-second countdown tick while a submission is pending
    CountdownTick,
    /// Success status display period elapsed
    StatusRevertElapsed(FormKind, u64),

    // ============ Settings ============
    UpdateLanguage(Language),
    UpdateDarkMode(bool),
    /// Persist settings to disk
    SaveSettings,

    // ============ Window & keyboard ============
    /// Window resized (drives the compact/full layout split)
    WindowResized(iced::Size),
    /// Global key press
    KeyPressed(Key, Modifiers),
}
