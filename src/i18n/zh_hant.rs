//! Traditional Chinese translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "靜心心理治療");

    // Navigation
    m.insert(Key::NavAbout, "關於");
    m.insert(Key::NavApproach, "工作方式");
    m.insert(Key::NavFaq, "常見問題");
    m.insert(Key::NavTestimonials, "來訪者回饋");
    m.insert(Key::NavFees, "費用與地點");
    m.insert(Key::NavContact, "聯絡我");

    // About
    m.insert(Key::AboutTitle, "心理治療與諮詢");
    m.insert(
        Key::AboutBody,
        "我是UKCP和BACP認證心理治療師，為成年人提供一對一心理治療，可面談或線上進行。\
         我的工作領域包括焦慮、抑鬱、人際關係困擾、人生轉變與跨文化經歷，\
         可以用英文或中文進行。",
    );
    m.insert(Key::AboutReadBio, "了解更多關於我");
    m.insert(Key::BioTitle, "關於我");
    m.insert(
        Key::BioBody,
        "我接受整合式心理治療訓練，曾在NHS、公益機構和私人執業環境中工作。\
         我的實踐融合精神動力學與人本主義傳統；我始終相信，治療起作用的核心\
         是我們之間的關係。我提供15分鐘免費初次通話，讓您在做出任何承諾之前\
         先了解我的工作方式。",
    );

    // Approach
    m.insert(Key::ApproachTitle, "工作方式");
    m.insert(
        Key::ApproachBody,
        "每次會談50分鐘，每週固定時間進行。最初幾次會談用於了解您來做治療的\
         原因，以及我們是否合適。治療沒有固定議程：我們按您的節奏進行，\
         並隨時回顧工作的感受。",
    );

    // FAQ
    m.insert(Key::FaqTitle, "常見問題");
    m.insert(Key::FaqFirstSessionQuestion, "第一次會談會發生什麼？");
    m.insert(
        Key::FaqFirstSessionAnswer,
        "第一次會談是您談論來訪原因、向我提出任何問題的機會。無需任何準備，\
         也沒有超出這次會談的承諾。",
    );
    m.insert(Key::FaqDurationQuestion, "治療會持續多久？");
    m.insert(
        Key::FaqDurationAnswer,
        "有些人圍繞某個具體困擾來訪幾個月；有些人則進行更長期的開放式工作。\
         我們會定期一起回顧，您可以隨時結束。",
    );
    m.insert(Key::FaqOnlineQuestion, "提供線上會談嗎？");
    m.insert(
        Key::FaqOnlineAnswer,
        "提供。我在倫敦提供面談，也透過視訊提供線上會談。線上工作同樣保密，\
         許多來訪者會在兩種方式之間切換。",
    );
    m.insert(Key::FaqLanguagesQuestion, "可以用哪些語言進行治療？");
    m.insert(
        Key::FaqLanguagesAnswer,
        "我提供英語、普通話和粵語治療。您可以在會談中自由切換語言；\
         許多雙語來訪者覺得這很有幫助。",
    );
    m.insert(Key::FaqConfidentialityQuestion, "我說的一切都保密嗎？");
    m.insert(
        Key::FaqConfidentialityAnswer,
        "是的，在標準的職業限度之內：只有當我認為您或他人面臨嚴重風險時\
         才會突破保密原則，並且只要可能，我會先與您討論。",
    );

    // Testimonials
    m.insert(Key::TestimonialsTitle, "來訪者回饋");
    m.insert(
        Key::TestimonialFinding,
        "「我來做治療時並不知道自己需要什麼。一年之後，我以從未想過的方式\
         理解了自己。」",
    );
    m.insert(
        Key::TestimonialListened,
        "「我第一次感到被真正傾聽，沒有評判，也沒有被催促。」",
    );
    m.insert(
        Key::TestimonialBilingual,
        "「當英語不足以表達時能切換到中文，這改變了一切。」",
    );
    m.insert(
        Key::TestimonialOnline,
        "「我原本對線上會談持懷疑態度，但它成了我一週中最安穩的一小時。」",
    );

    // Fees & locations
    m.insert(Key::FeesTitle, "費用與地點");
    m.insert(
        Key::FeesBody,
        "個人會談每次70英鎊，為學生和受訓者保留少量減費名額。\
         取消會談請提前48小時通知。",
    );
    m.insert(Key::LocationsLabel, "地點");
    m.insert(Key::EmailLabel, "電郵");
    m.insert(Key::PhoneLabel, "短信");

    // Contact form
    m.insert(Key::ContactTitle, "聯絡我");
    m.insert(
        Key::ContactIntro,
        "給我留言，我將在週一至週五24小時內回覆。",
    );
    m.insert(Key::FormName, "您的姓名");
    m.insert(Key::FormEmail, "電子郵箱");
    m.insert(Key::FormPhone, "電話（可選）");
    m.insert(Key::FormSubject, "主題");
    m.insert(Key::FormMessage, "您的留言");
    m.insert(Key::FormSend, "發送留言");
    m.insert(Key::FormSending, "正在發送您的留言...");
    m.insert(Key::FormSent, "已發送！我會盡快回覆您。");
    m.insert(Key::FormFailed, "發送失敗。請直接發送電子郵件。");

    // Feedback form
    m.insert(Key::FeedbackTitle, "意見回饋");
    m.insert(Key::FeedbackSubject, "網站意見回饋");
    m.insert(Key::FeedbackPlaceholder, "歡迎分享您對本站或診所的任何想法");
    m.insert(Key::FeedbackSubmit, "提交回饋");
    m.insert(Key::FeedbackSubmitting, "正在提交...");
    m.insert(Key::FeedbackThanks, "感謝您的回饋！");
    m.insert(Key::FeedbackFailed, "提交失敗。請稍後再試。");

    // Common UI
    m.insert(Key::Close, "關閉");
    m.insert(Key::LanguageLabel, "語言");
    m.insert(Key::DarkModeLabel, "深色模式");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
