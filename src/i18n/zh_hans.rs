//! Simplified Chinese translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "静心心理治疗");

    // Navigation
    m.insert(Key::NavAbout, "关于");
    m.insert(Key::NavApproach, "工作方式");
    m.insert(Key::NavFaq, "常见问题");
    m.insert(Key::NavTestimonials, "来访者反馈");
    m.insert(Key::NavFees, "费用与地点");
    m.insert(Key::NavContact, "联系我");

    // About
    m.insert(Key::AboutTitle, "心理治疗与咨询");
    m.insert(
        Key::AboutBody,
        "我是UKCP和BACP认证心理治疗师，为成年人提供一对一心理治疗，可面谈或在线进行。\
         我的工作领域包括焦虑、抑郁、人际关系困扰、人生转变与跨文化经历，\
         可以用英文或中文进行。",
    );
    m.insert(Key::AboutReadBio, "了解更多关于我");
    m.insert(Key::BioTitle, "关于我");
    m.insert(
        Key::BioBody,
        "我接受整合式心理治疗训练，曾在NHS、公益机构和私人执业环境中工作。\
         我的实践融合精神动力学与人本主义传统；我始终相信，治疗起作用的核心\
         是我们之间的关系。我提供15分钟免费初次通话，让您在做出任何承诺之前\
         先了解我的工作方式。",
    );

    // Approach
    m.insert(Key::ApproachTitle, "工作方式");
    m.insert(
        Key::ApproachBody,
        "每次会谈50分钟，每周固定时间进行。最初几次会谈用于了解您来做治疗的\
         原因，以及我们是否合适。治疗没有固定议程：我们按您的节奏进行，\
         并随时回顾工作的感受。",
    );

    // FAQ
    m.insert(Key::FaqTitle, "常见问题");
    m.insert(Key::FaqFirstSessionQuestion, "第一次会谈会发生什么？");
    m.insert(
        Key::FaqFirstSessionAnswer,
        "第一次会谈是您谈论来访原因、向我提出任何问题的机会。无需任何准备，\
         也没有超出这次会谈的承诺。",
    );
    m.insert(Key::FaqDurationQuestion, "治疗会持续多久？");
    m.insert(
        Key::FaqDurationAnswer,
        "有些人围绕某个具体困扰来访几个月；有些人则进行更长期的开放式工作。\
         我们会定期一起回顾，您可以随时结束。",
    );
    m.insert(Key::FaqOnlineQuestion, "提供在线会谈吗？");
    m.insert(
        Key::FaqOnlineAnswer,
        "提供。我在伦敦提供面谈，也通过视频提供在线会谈。在线工作同样保密，\
         许多来访者会在两种方式之间切换。",
    );
    m.insert(Key::FaqLanguagesQuestion, "可以用哪些语言进行治疗？");
    m.insert(
        Key::FaqLanguagesAnswer,
        "我提供英语、普通话和粤语治疗。您可以在会谈中自由切换语言；\
         许多双语来访者觉得这很有帮助。",
    );
    m.insert(Key::FaqConfidentialityQuestion, "我说的一切都保密吗？");
    m.insert(
        Key::FaqConfidentialityAnswer,
        "是的，在标准的职业限度之内：只有当我认为您或他人面临严重风险时\
         才会突破保密原则，并且只要可能，我会先与您讨论。",
    );

    // Testimonials
    m.insert(Key::TestimonialsTitle, "来访者反馈");
    m.insert(
        Key::TestimonialFinding,
        "“我来做治疗时并不知道自己需要什么。一年之后，我以从未想过的方式\
         理解了自己。”",
    );
    m.insert(
        Key::TestimonialListened,
        "“我第一次感到被真正倾听，没有评判，也没有被催促。”",
    );
    m.insert(
        Key::TestimonialBilingual,
        "“当英语不足以表达时能切换到中文，这改变了一切。”",
    );
    m.insert(
        Key::TestimonialOnline,
        "“我原本对在线会谈持怀疑态度，但它成了我一周中最安稳的一小时。”",
    );

    // Fees & locations
    m.insert(Key::FeesTitle, "费用与地点");
    m.insert(
        Key::FeesBody,
        "个人会谈每次70英镑，为学生和受训者保留少量减费名额。\
         取消会谈请提前48小时通知。",
    );
    m.insert(Key::LocationsLabel, "地点");
    m.insert(Key::EmailLabel, "电邮");
    m.insert(Key::PhoneLabel, "短信");

    // Contact form
    m.insert(Key::ContactTitle, "联系我");
    m.insert(
        Key::ContactIntro,
        "给我留言，我将在周一至周五24小时内回复。",
    );
    m.insert(Key::FormName, "您的姓名");
    m.insert(Key::FormEmail, "电子邮箱");
    m.insert(Key::FormPhone, "电话（可选）");
    m.insert(Key::FormSubject, "主题");
    m.insert(Key::FormMessage, "您的留言");
    m.insert(Key::FormSend, "发送留言");
    m.insert(Key::FormSending, "正在发送您的留言...");
    m.insert(Key::FormSent, "已发送！我会尽快回复您。");
    m.insert(Key::FormFailed, "发送失败。请直接发送电子邮件。");

    // Feedback form
    m.insert(Key::FeedbackTitle, "意见反馈");
    m.insert(Key::FeedbackSubject, "网站意见反馈");
    m.insert(Key::FeedbackPlaceholder, "欢迎分享您对本站或诊所的任何想法");
    m.insert(Key::FeedbackSubmit, "提交反馈");
    m.insert(Key::FeedbackSubmitting, "正在提交...");
    m.insert(Key::FeedbackThanks, "感谢您的反馈！");
    m.insert(Key::FeedbackFailed, "提交失败。请稍后再试。");

    // Common UI
    m.insert(Key::Close, "关闭");
    m.insert(Key::LanguageLabel, "语言");
    m.insert(Key::DarkModeLabel, "深色模式");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
