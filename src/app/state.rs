// src/app/state.rs
//! Application state definitions
//!
//! All UI state transitions live here as methods on small state types, so
//! the update handlers stay thin and the invariants are testable without a
//! running window.

use crate::api::RelayClient;
use crate::features::content::{FaqId, SectionId, TESTIMONIALS};
use crate::features::{BioPresentation, Settings};
use crate::i18n::{Key, Locale};

/// Width at or below which the nav collapses into the hamburger drawer
pub const COMPACT_BREAKPOINT: f32 = 768.0;

/// Seconds shown on the submission countdown when a send starts
pub const COUNTDOWN_START: u8 = 3;

/// Main application state
pub struct App {
    /// Core infrastructure (settings, locale, relay client, window metrics)
    pub core: CoreState,
    /// UI state (navigation, accordion, carousel, modal, forms)
    pub ui: UiState,
}

/// Core infrastructure & services
pub struct CoreState {
    pub settings: Settings,
    pub locale: Locale,
    /// Mail relay client; None if the HTTP client could not be built
    pub relay: Option<RelayClient>,
    /// Current window width, drives the compact/full layout split
    pub window_width: f32,
}

impl CoreState {
    /// Initialize core services with loaded settings
    pub fn new(settings: Settings, locale: Locale) -> Self {
        let relay = match RelayClient::new(settings.site.relay_endpoint.clone()) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::error!("Failed to create relay client: {}", e);
                None
            }
        };

        Self {
            settings,
            locale,
            relay,
            window_width: 1200.0,
        }
    }

    /// Whether the window is narrow enough for the drawer layout
    pub fn is_compact(&self) -> bool {
        self.window_width <= COMPACT_BREAKPOINT
    }
}

/// Content shown in the bio modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalContent {
    pub title: Key,
    pub body: Key,
}

impl ModalContent {
    pub fn bio() -> Self {
        Self {
            title: Key::BioTitle,
            body: Key::BioBody,
        }
    }
}

/// UI view state
pub struct UiState {
    /// Section the nav currently highlights; follows scroll position
    pub active_section: SectionId,
    /// Drawer menu open (compact layout only); locks content scrolling
    pub menu_open: bool,
    pub faq: FaqState,
    pub carousel: CarouselState,
    /// Open modal content; None means no modal
    pub modal: Option<ModalContent>,
    /// Inline bio expansion (used instead of the modal on some deployments)
    pub bio_expanded: bool,
    pub contact: ContactFormState,
    pub feedback: FeedbackFormState,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            active_section: SectionId::About,
            menu_open: false,
            faq: FaqState::default(),
            carousel: CarouselState::new(TESTIMONIALS.len()),
            modal: None,
            bio_expanded: false,
            contact: ContactFormState::default(),
            feedback: FeedbackFormState::default(),
        }
    }

    /// Background scrolling is locked while the drawer menu is open
    pub fn scroll_locked(&self) -> bool {
        self.menu_open
    }

    /// Route the About bio action per the deployment's configuration
    pub fn show_bio(&mut self, presentation: BioPresentation) {
        match presentation {
            BioPresentation::Modal => self.modal = Some(ModalContent::bio()),
            BioPresentation::Inline => self.bio_expanded = !self.bio_expanded,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// FAQ accordion state: at most one item open, structurally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FaqState {
    pub open: Option<FaqId>,
}

impl FaqState {
    /// Collapse the item if it is open, otherwise open it (closing any other)
    pub fn toggle(&mut self, id: FaqId) {
        self.open = if self.open == Some(id) { None } else { Some(id) };
    }

    pub fn is_open(&self, id: FaqId) -> bool {
        self.open == Some(id)
    }
}

/// Testimonial carousel state
///
/// `index` stays inside `[0, item_count - 1]` for every input; edge
/// positions are derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    pub index: usize,
    pub item_count: usize,
    /// Prev/next controls shown; auto-hidden after a quiet period
    pub controls_visible: bool,
    /// Bumped on every visibility change so stale hide timers miss
    pub controls_epoch: u64,
}

impl CarouselState {
    pub fn new(item_count: usize) -> Self {
        Self {
            index: 0,
            item_count,
            controls_visible: false,
            controls_epoch: 0,
        }
    }

    pub fn at_start(&self) -> bool {
        self.index == 0
    }

    pub fn at_end(&self) -> bool {
        self.item_count == 0 || self.index == self.item_count - 1
    }

    /// Move to `index`, clamped into range. Returns true if the index
    /// changed. Out-of-range requests are expected from disabled-edge
    /// clicks and free scrolling, so they clamp rather than error.
    pub fn go_to(&mut self, index: i64) -> bool {
        if self.item_count == 0 {
            return false;
        }
        let clamped = index.clamp(0, self.item_count as i64 - 1) as usize;
        let changed = clamped != self.index;
        self.index = clamped;
        changed
    }

    /// Advance by one; no-op at the last item
    pub fn next(&mut self) -> bool {
        self.go_to(self.index as i64 + 1)
    }

    /// Step back by one; no-op at the first item
    pub fn prev(&mut self) -> bool {
        self.go_to(self.index as i64 - 1)
    }

    /// Re-derive the index from a free-scroll position: the item whose
    /// offset lies within half a container width of `scroll_left`. Keeps
    /// the indicator dots honest when the user drags instead of clicking.
    pub fn sync_from_scroll(
        &mut self,
        scroll_left: f32,
        container_width: f32,
        item_offsets: &[f32],
    ) {
        let mut nearest: Option<(usize, f32)> = None;
        for (i, offset) in item_offsets.iter().enumerate() {
            let distance = (offset - scroll_left).abs();
            if nearest.map(|(_, d)| distance < d).unwrap_or(true) {
                nearest = Some((i, distance));
            }
        }
        if let Some((i, distance)) = nearest {
            if distance <= container_width / 2.0 {
                self.go_to(i as i64);
            }
        }
    }

    /// Show the controls and invalidate any pending hide timer. Returns
    /// the epoch a freshly scheduled hide must present to take effect.
    pub fn show_controls(&mut self) -> u64 {
        self.controls_visible = true;
        self.controls_epoch += 1;
        self.controls_epoch
    }

    /// Hide the controls, but only if no newer interaction superseded the
    /// timer that fired.
    pub fn hide_controls(&mut self, epoch: u64) {
        if epoch == self.controls_epoch {
            self.controls_visible = false;
        }
    }
}

/// Submission status: `Idle → Submitting → (Success | Failure)`.
/// Success reverts to Idle on a timer; Failure only leaves via a new submit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting {
        /// Seconds left on the visible countdown
        countdown: u8,
    },
    Success,
    Failure,
}

/// Submission state machine shared by both forms
#[derive(Debug, Default)]
pub struct SubmitState {
    pub phase: SubmitPhase,
    /// Transport error from the last failed attempt, for the view/logs
    pub last_error: Option<String>,
    /// Bumped on every phase change; timers carry the epoch they were
    /// scheduled under and are ignored if it no longer matches
    pub epoch: u64,
}

impl SubmitState {
    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmitPhase::Submitting { .. })
    }

    /// Enter Submitting. Returns false (and changes nothing) if a
    /// submission is already pending; the disabled button should make
    /// that unreachable, this is the backstop.
    pub fn begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.phase = SubmitPhase::Submitting {
            countdown: COUNTDOWN_START,
        };
        self.last_error = None;
        self.epoch += 1;
        true
    }

    /// Advance the countdown one second, saturating at zero
    pub fn tick(&mut self) {
        if let SubmitPhase::Submitting { countdown } = &mut self.phase {
            *countdown = countdown.saturating_sub(1);
        }
    }

    /// Enter Success; returns the epoch the auto-revert timer must carry
    pub fn succeed(&mut self) -> u64 {
        self.phase = SubmitPhase::Success;
        self.last_error = None;
        self.epoch += 1;
        self.epoch
    }

    /// Enter Failure and record the reason; re-enables immediately, no timer
    pub fn fail(&mut self, reason: String) {
        self.phase = SubmitPhase::Failure;
        self.last_error = Some(reason);
        self.epoch += 1;
    }

    /// Timer transition Success → Idle; stale epochs are a no-op
    pub fn revert(&mut self, epoch: u64) {
        if epoch == self.epoch && self.phase == SubmitPhase::Success {
            self.phase = SubmitPhase::Idle;
            self.epoch += 1;
        }
    }
}

/// Contact form fields
#[derive(Debug, Clone, Default)]
pub struct ContactDraft {
    pub from_name: String,
    pub reply_to: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    /// Required fields filled; phone stays optional
    pub fn is_complete(&self) -> bool {
        !self.from_name.trim().is_empty()
            && !self.reply_to.trim().is_empty()
            && !self.subject.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Default)]
pub struct ContactFormState {
    pub draft: ContactDraft,
    pub submit: SubmitState,
}

/// Feedback form fields
#[derive(Debug, Clone, Default)]
pub struct FeedbackDraft {
    pub from_name: String,
    pub message: String,
}

impl FeedbackDraft {
    pub fn is_complete(&self) -> bool {
        !self.from_name.trim().is_empty() && !self.message.trim().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Default)]
pub struct FeedbackFormState {
    pub draft: FeedbackDraft,
    pub submit: SubmitState,
}

#[cfg(test)]
mod tests {
    use super::*;

    mod property_faq_single_open {
        use super::*;

        #[test]
        fn toggle_is_its_own_inverse() {
            let mut faq = FaqState::default();
            faq.toggle(FaqId::Duration);
            faq.toggle(FaqId::Duration);
            assert_eq!(faq, FaqState::default(), "double toggle must restore state");
        }

        #[test]
        fn at_most_one_item_open_after_any_sequence() {
            let mut faq = FaqState::default();
            let sequence = [
                FaqId::FirstSession,
                FaqId::Online,
                FaqId::Online,
                FaqId::Languages,
                FaqId::Confidentiality,
                FaqId::Duration,
            ];
            for id in sequence {
                faq.toggle(id);
                // Option<FaqId> makes >1 open unrepresentable; check the
                // semantics instead: the last toggled id is the open one
                // unless it closed itself.
                if let Some(open) = faq.open {
                    assert_eq!(open, id, "open item must be the last toggled");
                }
            }
        }

        #[test]
        fn opening_a_second_item_closes_the_first() {
            let mut faq = FaqState::default();
            faq.toggle(FaqId::FirstSession);
            faq.toggle(FaqId::Languages);
            assert!(faq.is_open(FaqId::Languages));
            assert!(!faq.is_open(FaqId::FirstSession));
        }
    }

    mod property_carousel_bounds {
        use super::*;

        #[test]
        fn go_to_never_leaves_the_valid_range() {
            let mut carousel = CarouselState::new(4);
            for input in [-100i64, -1, 0, 1, 3, 4, 5, i64::MAX, i64::MIN] {
                carousel.go_to(input);
                assert!(
                    carousel.index < 4,
                    "index {} out of range after go_to({})",
                    carousel.index,
                    input
                );
            }
        }

        #[test]
        fn next_at_last_item_is_a_no_op() {
            let mut carousel = CarouselState::new(4);
            carousel.go_to(3);
            let before = carousel.clone();
            assert!(!carousel.next(), "next at end must report no change");
            assert_eq!(carousel, before);
        }

        #[test]
        fn prev_at_first_item_is_a_no_op() {
            let mut carousel = CarouselState::new(4);
            let before = carousel.clone();
            assert!(!carousel.prev(), "prev at start must report no change");
            assert_eq!(carousel, before);
        }

        #[test]
        fn edges_are_derived_not_stored() {
            let mut carousel = CarouselState::new(3);
            assert!(carousel.at_start() && !carousel.at_end());
            carousel.next();
            assert!(!carousel.at_start() && !carousel.at_end());
            carousel.next();
            assert!(!carousel.at_start() && carousel.at_end());
        }

        #[test]
        fn empty_carousel_ignores_everything() {
            let mut carousel = CarouselState::new(0);
            assert!(!carousel.go_to(0));
            assert!(!carousel.next());
            assert_eq!(carousel.index, 0);
        }
    }

    mod property_carousel_scroll_sync {
        use super::*;

        const OFFSETS: [f32; 4] = [0.0, 376.0, 752.0, 1128.0];

        #[test]
        fn scroll_near_an_item_selects_it() {
            let mut carousel = CarouselState::new(4);
            carousel.sync_from_scroll(760.0, 400.0, &OFFSETS);
            assert_eq!(carousel.index, 2);
        }

        #[test]
        fn scroll_far_from_every_item_keeps_the_index() {
            let mut carousel = CarouselState::new(4);
            carousel.go_to(1);
            // Closest offset is more than half the (tiny) container away
            carousel.sync_from_scroll(560.0, 100.0, &OFFSETS);
            assert_eq!(carousel.index, 1, "out-of-window scroll must not move index");
        }

        #[test]
        fn sync_result_stays_in_range() {
            let mut carousel = CarouselState::new(4);
            carousel.sync_from_scroll(99999.0, 99999.0, &OFFSETS);
            assert!(carousel.index < 4);
        }
    }

    mod property_controls_visibility {
        use super::*;

        #[test]
        fn renewed_interaction_invalidates_the_pending_hide() {
            let mut carousel = CarouselState::new(4);
            let first = carousel.show_controls();
            let second = carousel.show_controls();
            carousel.hide_controls(first);
            assert!(
                carousel.controls_visible,
                "stale hide timer must not close the controls"
            );
            carousel.hide_controls(second);
            assert!(!carousel.controls_visible);
        }
    }

    mod property_submit_machine {
        use super::*;

        #[test]
        fn success_path_reverts_to_idle_on_the_timer() {
            let mut submit = SubmitState::default();
            assert!(submit.begin());
            assert!(submit.is_submitting());
            let epoch = submit.succeed();
            assert_eq!(submit.phase, SubmitPhase::Success);
            submit.revert(epoch);
            assert_eq!(submit.phase, SubmitPhase::Idle);
        }

        #[test]
        fn failure_does_not_auto_revert() {
            let mut submit = SubmitState::default();
            submit.begin();
            submit.fail("connection refused".to_string());
            assert_eq!(submit.phase, SubmitPhase::Failure);
            assert_eq!(submit.last_error.as_deref(), Some("connection refused"));
            // A revert timer from an earlier success cycle must not fire
            submit.revert(submit.epoch);
            assert_eq!(
                submit.phase,
                SubmitPhase::Failure,
                "only a new submit leaves Failure"
            );
        }

        #[test]
        fn second_begin_while_pending_is_rejected() {
            let mut submit = SubmitState::default();
            assert!(submit.begin());
            assert!(!submit.begin(), "overlapping submission must be rejected");
        }

        #[test]
        fn retry_after_failure_is_allowed() {
            let mut submit = SubmitState::default();
            submit.begin();
            submit.fail("timeout".to_string());
            assert!(submit.begin(), "user retry must leave Failure");
            assert!(submit.last_error.is_none(), "retry clears the old error");
        }

        #[test]
        fn stale_revert_timer_misses_a_newer_cycle() {
            let mut submit = SubmitState::default();
            submit.begin();
            let old_epoch = submit.succeed();
            // A new cycle starts before the old revert timer fires
            submit.begin();
            let new_epoch = submit.succeed();
            submit.revert(old_epoch);
            assert_eq!(
                submit.phase,
                SubmitPhase::Success,
                "old timer must not revert the new success"
            );
            submit.revert(new_epoch);
            assert_eq!(submit.phase, SubmitPhase::Idle);
        }

        #[test]
        fn countdown_ticks_down_and_saturates() {
            let mut submit = SubmitState::default();
            submit.begin();
            for _ in 0..10 {
                submit.tick();
            }
            assert_eq!(submit.phase, SubmitPhase::Submitting { countdown: 0 });
        }
    }

    mod property_drafts {
        use super::*;

        #[test]
        fn contact_phone_is_optional() {
            let draft = ContactDraft {
                from_name: "A".into(),
                reply_to: "a@x.com".into(),
                phone: String::new(),
                subject: "S".into(),
                message: "M".into(),
            };
            assert!(draft.is_complete());
        }

        #[test]
        fn whitespace_only_fields_do_not_count() {
            let draft = ContactDraft {
                from_name: "  ".into(),
                reply_to: "a@x.com".into(),
                phone: String::new(),
                subject: "S".into(),
                message: "M".into(),
            };
            assert!(!draft.is_complete());
        }
    }
}
