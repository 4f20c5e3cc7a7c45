mod back_to_top;
mod contact_form;
mod faq;
mod footer;
mod nav;
mod service_card;
mod stat_counter;
mod typing_text;

pub use back_to_top::BackToTop;
pub use contact_form::{
    validate, CaptchaState, ContactForm, ContactSubmission, FormErrors, CAPTCHA_MSG, EMAIL_MSG,
    REQUIRED_MSG,
};
pub use faq::{matches_query, ExclusiveOpen, FaqCategory, FaqEntry, FaqItem};
pub use footer::Footer;
pub use nav::NavBar;
pub use service_card::ServiceCard;
pub use stat_counter::StatCounter;
pub use typing_text::TypingText;
