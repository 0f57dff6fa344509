//! Mail relay payload types
//!
//! Field names match what the deployed relay script reads from the JSON
//! body, so they stay snake_case on the wire.

use serde::Serialize;

use crate::i18n::{Key, Language, t};

/// A form submission bound for the mail relay
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InquiryPayload {
    pub from_name: String,
    pub reply_to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    /// Language tag controlling the relay's auto-reply language
    pub language: String,
}

impl InquiryPayload {
    /// Build a contact inquiry. An empty phone field is omitted from the
    /// wire payload entirely.
    pub fn inquiry(
        from_name: String,
        reply_to: String,
        phone: String,
        subject: String,
        message: String,
        language: Language,
    ) -> Self {
        let phone = phone.trim().to_string();
        Self {
            from_name,
            reply_to,
            phone: if phone.is_empty() { None } else { Some(phone) },
            subject,
            message,
            language: language.tag().to_string(),
        }
    }

    /// Build a feedback submission. Feedback has no reply address or phone;
    /// the relay files it under a fixed, localized subject.
    pub fn feedback(from_name: String, message: String, language: Language) -> Self {
        Self {
            from_name,
            reply_to: String::new(),
            phone: None,
            subject: t(language, Key::FeedbackSubject).to_string(),
            message,
            language: language.tag().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_phone_is_omitted_from_the_wire() {
        let payload = InquiryPayload::inquiry(
            "A".into(),
            "a@x.com".into(),
            "  ".into(),
            "S".into(),
            "M".into(),
            Language::English,
        );
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("phone"), "blank phone must not serialize");
        assert!(json.contains("\"language\":\"en\""));
    }

    #[test]
    fn phone_is_kept_when_provided() {
        let payload = InquiryPayload::inquiry(
            "A".into(),
            "a@x.com".into(),
            "07700 900123".into(),
            "S".into(),
            "M".into(),
            Language::TraditionalChinese,
        );
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"phone\":\"07700 900123\""));
        assert!(json.contains("\"language\":\"zh-Hant\""));
    }

    #[test]
    fn feedback_subject_follows_the_language() {
        for lang in Language::all() {
            let payload = InquiryPayload::feedback("A".into(), "M".into(), *lang);
            assert_eq!(
                payload.subject,
                t(*lang, Key::FeedbackSubject),
                "subject must be localized for {:?}",
                lang
            );
            assert_eq!(payload.language, lang.tag());
            assert!(payload.phone.is_none());
        }
        let en = InquiryPayload::feedback("A".into(), "M".into(), Language::English);
        assert_eq!(en.subject, "Website feedback");
    }
}
