//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Stillpoint Psychotherapy");

    // Navigation
    m.insert(Key::NavAbout, "About");
    m.insert(Key::NavApproach, "How I Work");
    m.insert(Key::NavFaq, "FAQ");
    m.insert(Key::NavTestimonials, "Testimonials");
    m.insert(Key::NavFees, "Fees & Locations");
    m.insert(Key::NavContact, "Contact");

    // About
    m.insert(Key::AboutTitle, "Psychotherapy & Counselling");
    m.insert(
        Key::AboutBody,
        "I am a UKCP and BACP registered psychotherapist offering one-to-one \
         therapy for adults, in person and online. I work with anxiety, \
         depression, relationship difficulties, life transitions, and \
         cross-cultural experiences, in English and Chinese.",
    );
    m.insert(Key::AboutReadBio, "Read more about me");
    m.insert(Key::BioTitle, "About Me");
    m.insert(
        Key::BioBody,
        "I trained as an integrative psychotherapist and have worked in NHS, \
         charity, and private settings. My practice draws on psychodynamic \
         and humanistic traditions; above all I believe the relationship \
         between us is what makes therapy work. I offer a free 15-minute \
         introductory call so you can get a sense of how I work before \
         committing to anything.",
    );

    // Approach
    m.insert(Key::ApproachTitle, "How I Work");
    m.insert(
        Key::ApproachBody,
        "Sessions last 50 minutes and take place weekly at the same time. \
         The first few sessions are for us to understand what brings you to \
         therapy and whether we are a good fit. There is no fixed agenda: we \
         go at your pace, and we review how the work feels as we go.",
    );

    // FAQ
    m.insert(Key::FaqTitle, "Frequently Asked Questions");
    m.insert(
        Key::FaqFirstSessionQuestion,
        "What happens in the first session?",
    );
    m.insert(
        Key::FaqFirstSessionAnswer,
        "The first session is a chance for you to talk about what brings \
         you to therapy and to ask me anything you like. There is no \
         preparation needed, and no commitment beyond that session.",
    );
    m.insert(Key::FaqDurationQuestion, "How long does therapy last?");
    m.insert(
        Key::FaqDurationAnswer,
        "Some people come for a few months around a specific difficulty; \
         others stay in open-ended work for longer. We review together \
         regularly, and you can end at any time.",
    );
    m.insert(Key::FaqOnlineQuestion, "Do you offer online sessions?");
    m.insert(
        Key::FaqOnlineAnswer,
        "Yes. I see clients in person in London and online via video call. \
         Online work is just as confidential and many clients move between \
         the two.",
    );
    m.insert(Key::FaqLanguagesQuestion, "Which languages do you work in?");
    m.insert(
        Key::FaqLanguagesAnswer,
        "I offer therapy in English, Mandarin, and Cantonese. You are \
         welcome to move between languages within a session; many bilingual \
         clients find this helpful.",
    );
    m.insert(
        Key::FaqConfidentialityQuestion,
        "Is everything I say confidential?",
    );
    m.insert(
        Key::FaqConfidentialityAnswer,
        "Yes, within the standard professional limits: I would only breach \
         confidentiality if I believed you or someone else was at serious \
         risk, and wherever possible I would discuss this with you first.",
    );

    // Testimonials
    m.insert(Key::TestimonialsTitle, "What Clients Say");
    m.insert(
        Key::TestimonialFinding,
        "\"I came to therapy not knowing what I needed. A year on, I \
         understand myself in ways I didn't think possible.\"",
    );
    m.insert(
        Key::TestimonialListened,
        "\"For the first time I felt properly listened to, without judgement \
         and without being rushed.\"",
    );
    m.insert(
        Key::TestimonialBilingual,
        "\"Being able to switch into Chinese when English didn't reach far \
         enough made all the difference.\"",
    );
    m.insert(
        Key::TestimonialOnline,
        "\"I was sceptical about online sessions, but they became the \
         steadiest hour of my week.\"",
    );

    // Fees & locations
    m.insert(Key::FeesTitle, "Fees & Locations");
    m.insert(
        Key::FeesBody,
        "Sessions are £70 for individuals, with a limited number of reduced \
         fee places for students and trainees. I ask for 48 hours notice for \
         cancellations.",
    );
    m.insert(Key::LocationsLabel, "Locations");
    m.insert(Key::EmailLabel, "Email");
    m.insert(Key::PhoneLabel, "Text");

    // Contact form
    m.insert(Key::ContactTitle, "Get in Touch");
    m.insert(
        Key::ContactIntro,
        "Send me a message and I will respond within 24 hours, Monday to \
         Friday.",
    );
    m.insert(Key::FormName, "Your name");
    m.insert(Key::FormEmail, "Email address");
    m.insert(Key::FormPhone, "Phone (optional)");
    m.insert(Key::FormSubject, "Subject");
    m.insert(Key::FormMessage, "Your message");
    m.insert(Key::FormSend, "Send Message");
    m.insert(Key::FormSending, "Sending your message...");
    m.insert(Key::FormSent, "Sent! I will get back to you soon.");
    m.insert(
        Key::FormFailed,
        "Failed to send message. Please try emailing directly.",
    );

    // Feedback form
    m.insert(Key::FeedbackTitle, "Feedback");
    m.insert(Key::FeedbackSubject, "Website feedback");
    m.insert(
        Key::FeedbackPlaceholder,
        "Anything you'd like to share about this site or the practice",
    );
    m.insert(Key::FeedbackSubmit, "Submit Feedback");
    m.insert(Key::FeedbackSubmitting, "Submitting...");
    m.insert(Key::FeedbackThanks, "Thank you for your feedback!");
    m.insert(
        Key::FeedbackFailed,
        "Submission failed. Please try again later.",
    );

    // Common UI
    m.insert(Key::Close, "Close");
    m.insert(Key::LanguageLabel, "Language");
    m.insert(Key::DarkModeLabel, "Dark mode");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
