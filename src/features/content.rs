//! Fixed page content: the section list, FAQ items, and testimonials
//!
//! Everything here is ordered and fixed at load. The carousel addresses
//! testimonials purely by index; the FAQ accordion and the navigation bar
//! address their items by these ids.

use crate::i18n::Key;

/// Page sections, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionId {
    #[default]
    About,
    Approach,
    Faq,
    Testimonials,
    Fees,
    Contact,
}

impl SectionId {
    /// All sections, in display order
    pub fn all() -> &'static [SectionId] {
        &[
            SectionId::About,
            SectionId::Approach,
            SectionId::Faq,
            SectionId::Testimonials,
            SectionId::Fees,
            SectionId::Contact,
        ]
    }

    /// Navigation label key for this section
    pub fn nav_key(&self) -> Key {
        match self {
            SectionId::About => Key::NavAbout,
            SectionId::Approach => Key::NavApproach,
            SectionId::Faq => Key::NavFaq,
            SectionId::Testimonials => Key::NavTestimonials,
            SectionId::Fees => Key::NavFees,
            SectionId::Contact => Key::NavContact,
        }
    }
}

/// FAQ accordion items, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaqId {
    FirstSession,
    Duration,
    Online,
    Languages,
    Confidentiality,
}

impl FaqId {
    /// All FAQ items, in display order
    pub fn all() -> &'static [FaqId] {
        &[
            FaqId::FirstSession,
            FaqId::Duration,
            FaqId::Online,
            FaqId::Languages,
            FaqId::Confidentiality,
        ]
    }

    pub fn question_key(&self) -> Key {
        match self {
            FaqId::FirstSession => Key::FaqFirstSessionQuestion,
            FaqId::Duration => Key::FaqDurationQuestion,
            FaqId::Online => Key::FaqOnlineQuestion,
            FaqId::Languages => Key::FaqLanguagesQuestion,
            FaqId::Confidentiality => Key::FaqConfidentialityQuestion,
        }
    }

    pub fn answer_key(&self) -> Key {
        match self {
            FaqId::FirstSession => Key::FaqFirstSessionAnswer,
            FaqId::Duration => Key::FaqDurationAnswer,
            FaqId::Online => Key::FaqOnlineAnswer,
            FaqId::Languages => Key::FaqLanguagesAnswer,
            FaqId::Confidentiality => Key::FaqConfidentialityAnswer,
        }
    }
}

/// Testimonial carousel items, in display order. Index is the only identity.
pub const TESTIMONIALS: [Key; 4] = [
    Key::TestimonialFinding,
    Key::TestimonialListened,
    Key::TestimonialBilingual,
    Key::TestimonialOnline,
];
