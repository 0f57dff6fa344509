//! Internationalization (i18n) support
//!
//! The practice publishes its content in English, Simplified Chinese, and
//! Traditional Chinese; the language tag also travels with every mail-relay
//! submission so auto-replies go out in the right language.
//!
//! Structure:
//! - mod.rs: Core types (Language, Key, Locale) and translation lookup
//! - en.rs: English translations
//! - zh_hans.rs: Simplified Chinese translations
//! - zh_hant.rs: Traditional Chinese translations

mod en;
mod zh_hans;
mod zh_hant;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    SimplifiedChinese,
    TraditionalChinese,
}

impl Language {
    /// Get language display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::SimplifiedChinese => "简体中文",
            Language::TraditionalChinese => "繁體中文",
        }
    }

    /// BCP 47 tag, as carried in the mail-relay payload
    pub fn tag(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::SimplifiedChinese => "zh-Hans",
            Language::TraditionalChinese => "zh-Hant",
        }
    }

    /// Parse a stored tag, defaulting to English for anything unknown
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "zh-Hans" => Language::SimplifiedChinese,
            "zh-Hant" => Language::TraditionalChinese,
            _ => Language::English,
        }
    }

    /// All available languages
    pub fn all() -> &'static [Language] {
        &[
            Language::English,
            Language::SimplifiedChinese,
            Language::TraditionalChinese,
        ]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // App
    AppName,

    // Navigation
    NavAbout,
    NavApproach,
    NavFaq,
    NavTestimonials,
    NavFees,
    NavContact,

    // About section
    AboutTitle,
    AboutBody,
    AboutReadBio,
    BioTitle,
    BioBody,

    // Approach section
    ApproachTitle,
    ApproachBody,

    // FAQ section
    FaqTitle,
    FaqFirstSessionQuestion,
    FaqFirstSessionAnswer,
    FaqDurationQuestion,
    FaqDurationAnswer,
    FaqOnlineQuestion,
    FaqOnlineAnswer,
    FaqLanguagesQuestion,
    FaqLanguagesAnswer,
    FaqConfidentialityQuestion,
    FaqConfidentialityAnswer,

    // Testimonials section
    TestimonialsTitle,
    TestimonialFinding,
    TestimonialListened,
    TestimonialBilingual,
    TestimonialOnline,

    // Fees & locations section
    FeesTitle,
    FeesBody,
    LocationsLabel,
    EmailLabel,
    PhoneLabel,

    // Contact form
    ContactTitle,
    ContactIntro,
    FormName,
    FormEmail,
    FormPhone,
    FormSubject,
    FormMessage,
    FormSend,
    FormSending,
    FormSent,
    FormFailed,

    // Feedback form
    FeedbackTitle,
    FeedbackSubject,
    FeedbackPlaceholder,
    FeedbackSubmit,
    FeedbackSubmitting,
    FeedbackThanks,
    FeedbackFailed,

    // Common UI
    Close,
    LanguageLabel,
    DarkModeLabel,
}

impl Key {
    /// Every translation key, in declaration order. New variants must be
    /// added here too or the exhaustiveness test fails.
    pub fn all() -> &'static [Key] {
        &[
            Key::AppName,
            Key::NavAbout,
            Key::NavApproach,
            Key::NavFaq,
            Key::NavTestimonials,
            Key::NavFees,
            Key::NavContact,
            Key::AboutTitle,
            Key::AboutBody,
            Key::AboutReadBio,
            Key::BioTitle,
            Key::BioBody,
            Key::ApproachTitle,
            Key::ApproachBody,
            Key::FaqTitle,
            Key::FaqFirstSessionQuestion,
            Key::FaqFirstSessionAnswer,
            Key::FaqDurationQuestion,
            Key::FaqDurationAnswer,
            Key::FaqOnlineQuestion,
            Key::FaqOnlineAnswer,
            Key::FaqLanguagesQuestion,
            Key::FaqLanguagesAnswer,
            Key::FaqConfidentialityQuestion,
            Key::FaqConfidentialityAnswer,
            Key::TestimonialsTitle,
            Key::TestimonialFinding,
            Key::TestimonialListened,
            Key::TestimonialBilingual,
            Key::TestimonialOnline,
            Key::FeesTitle,
            Key::FeesBody,
            Key::LocationsLabel,
            Key::EmailLabel,
            Key::PhoneLabel,
            Key::ContactTitle,
            Key::ContactIntro,
            Key::FormName,
            Key::FormEmail,
            Key::FormPhone,
            Key::FormSubject,
            Key::FormMessage,
            Key::FormSend,
            Key::FormSending,
            Key::FormSent,
            Key::FormFailed,
            Key::FeedbackTitle,
            Key::FeedbackSubject,
            Key::FeedbackPlaceholder,
            Key::FeedbackSubmit,
            Key::FeedbackSubmitting,
            Key::FeedbackThanks,
            Key::FeedbackFailed,
            Key::Close,
            Key::LanguageLabel,
            Key::DarkModeLabel,
        ]
    }
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::English => en::translations(),
        Language::SimplifiedChinese => zh_hans::translations(),
        Language::TraditionalChinese => zh_hant::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_round_trips_for_all_languages() {
        for lang in Language::all() {
            assert_eq!(
                Language::from_tag(lang.tag()),
                *lang,
                "tag {} must parse back to {:?}",
                lang.tag(),
                lang
            );
        }
    }

    #[test]
    fn unknown_tag_defaults_to_english() {
        assert_eq!(Language::from_tag("fr"), Language::English);
        assert_eq!(Language::from_tag(""), Language::English);
    }

    #[test]
    fn every_key_is_translated_in_every_language() {
        for lang in Language::all() {
            for key in Key::all() {
                assert_ne!(t(*lang, *key), "???", "{:?} missing in {:?}", key, lang);
            }
        }
    }

    #[test]
    fn no_language_carries_stray_translations() {
        for lang in Language::all() {
            let table = match lang {
                Language::English => en::translations(),
                Language::SimplifiedChinese => zh_hans::translations(),
                Language::TraditionalChinese => zh_hant::translations(),
            };
            assert_eq!(
                table.len(),
                Key::all().len(),
                "{:?} table size must match the key list",
                lang
            );
        }
    }
}
