use gloo_timers::callback::Timeout;
use serde::{Deserialize, Serialize};
use web_sys::{HtmlInputElement, HtmlTextAreaElement, ScrollLogicalPosition};
use yew::prelude::*;

use crate::config;
use crate::utils::format::format_phone_number;
use crate::utils::validate::{is_valid_email, required_value};
use crate::utils::{dom, recaptcha, storage};

pub const REQUIRED_MSG: &str = "This field is required";
pub const EMAIL_MSG: &str = "Please enter a valid email address";
pub const CAPTCHA_MSG: &str = "Please complete the reCAPTCHA";

const DRAFT_KEY: &str = "vantora_contact_draft";

/// The payload a production deploy would post to
/// `config::contact_endpoint()`. Also the shape drafts are stored in.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Inline validation errors, one slot per checked field plus the
/// challenge widget.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
    pub captcha: Option<&'static str>,
}

impl FormErrors {
    pub fn is_clean(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.message.is_none()
            && self.captcha.is_none()
    }
}

/// What the challenge widget reports at submit time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptchaState {
    /// No widget on the page; the check is skipped entirely.
    Absent,
    Unsolved,
    Solved,
}

/// Field checks for a submission: name, email and message are required,
/// the email must look like an address, and a present challenge widget
/// must hold a token. Whitespace-only input counts as empty.
pub fn validate(form: &ContactSubmission, captcha: CaptchaState) -> FormErrors {
    let mut errors = FormErrors::default();
    if required_value(&form.name).is_none() {
        errors.name = Some(REQUIRED_MSG);
    }
    match required_value(&form.email) {
        None => errors.email = Some(REQUIRED_MSG),
        Some(email) if !is_valid_email(email) => errors.email = Some(EMAIL_MSG),
        Some(_) => {}
    }
    if required_value(&form.message).is_none() {
        errors.message = Some(REQUIRED_MSG);
    }
    if captcha == CaptchaState::Unsolved {
        errors.captcha = Some(CAPTCHA_MSG);
    }
    errors
}

fn live_captcha_state() -> CaptchaState {
    if !recaptcha::is_present() {
        return CaptchaState::Absent;
    }
    match recaptcha::response() {
        Some(token) if !token.is_empty() => CaptchaState::Solved,
        _ => CaptchaState::Unsolved,
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Email,
    Phone,
    Message,
}

const FOCUS_GLOW: &str = "box-shadow: 0 0 0 3px rgba(37, 99, 235, 0.1);";

/// Contact form with inline validation. Nothing leaves the browser yet:
/// a valid submission is logged, the fields reset, and a confirmation
/// scrolls into view. Unsubmitted input is kept as a draft in
/// `localStorage` across visits.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let message = use_state(String::new);
    let errors = use_state(FormErrors::default);
    let submitted = use_state_eq(|| false);
    let focused = use_state_eq(|| None::<Field>);

    // Restore whatever the visitor typed last time.
    {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let message = message.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(draft) = storage::local_get::<ContactSubmission>(DRAFT_KEY) {
                    name.set(draft.name);
                    email.set(draft.email);
                    phone.set(draft.phone);
                    message.set(draft.message);
                }
                || ()
            },
            (),
        );
    }

    // Persist the draft after every edit. An all-empty form writes
    // nothing, so a fresh visit does not create storage entries.
    {
        let deps = (
            (*name).clone(),
            (*email).clone(),
            (*phone).clone(),
            (*message).clone(),
        );
        use_effect_with_deps(
            move |(name, email, phone, message): &(String, String, String, String)| {
                if !(name.is_empty() && email.is_empty() && phone.is_empty() && message.is_empty())
                {
                    storage::local_set(
                        DRAFT_KEY,
                        &ContactSubmission {
                            name: name.clone(),
                            email: email.clone(),
                            phone: phone.clone(),
                            message: message.clone(),
                        },
                    );
                }
                || ()
            },
            deps,
        );
    }

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_phone_input = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            phone.set(input.value());
        })
    };
    // Commit formatting when the field loses focus, not per keystroke.
    let on_phone_change = {
        let phone = phone.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            phone.set(format_phone_number(&input.value()));
        })
    };
    let on_message_input = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(area.value());
        })
    };

    let focus_on = |field: Field| {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(Some(field)))
    };
    let blur = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(None))
    };
    let group_style = |field: Field| {
        if *focused == Some(field) {
            FOCUS_GLOW
        } else {
            ""
        }
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let message = message.clone();
        let errors = errors.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = ContactSubmission {
                name: (*name).clone(),
                email: (*email).clone(),
                phone: (*phone).clone(),
                message: (*message).clone(),
            };
            let result = validate(&form, live_captcha_state());
            if result.is_clean() {
                log::info!("contact form valid, would post to {}", config::contact_endpoint());
                if let Ok(payload) = serde_json::to_string(&form) {
                    gloo_console::log!("contact submission:", payload);
                }
                name.set(String::new());
                email.set(String::new());
                phone.set(String::new());
                message.set(String::new());
                storage::local_remove(DRAFT_KEY);
                recaptcha::reset();
                errors.set(FormErrors::default());
                submitted.set(true);
                // Let the confirmation render before scrolling to it.
                Timeout::new(50, || {
                    if let Some(el) =
                        dom::document().and_then(|d| d.get_element_by_id("contact-success"))
                    {
                        dom::smooth_scroll_into_view(&el, ScrollLogicalPosition::Center);
                    }
                })
                .forget();
            } else {
                submitted.set(false);
                errors.set(result);
            }
        })
    };

    html! {
        <>
            <form class="contact-form" onsubmit={onsubmit}>
                if *submitted {
                    <div id="contact-success" class="form-success">
                        <i class="fas fa-circle-check"></i>
                        <span>{"Thanks for reaching out. We'll get back to you within one business day."}</span>
                    </div>
                }
                <div class="form-group" style={group_style(Field::Name)}>
                    <label for="contact-name">{"Name"}</label>
                    <input
                        id="contact-name"
                        type="text"
                        placeholder="Ada Lovelace"
                        value={(*name).clone()}
                        oninput={on_name_input}
                        onfocus={focus_on(Field::Name)}
                        onblur={blur.clone()}
                    />
                    if let Some(msg) = (*errors).name {
                        <span class="error-message">{msg}</span>
                    }
                </div>
                <div class="form-group" style={group_style(Field::Email)}>
                    <label for="contact-email">{"Email"}</label>
                    <input
                        id="contact-email"
                        type="email"
                        placeholder="ada@example.com"
                        value={(*email).clone()}
                        oninput={on_email_input}
                        onfocus={focus_on(Field::Email)}
                        onblur={blur.clone()}
                    />
                    if let Some(msg) = (*errors).email {
                        <span class="error-message">{msg}</span>
                    }
                </div>
                <div class="form-group" style={group_style(Field::Phone)}>
                    <label for="contact-phone">{"Phone (optional)"}</label>
                    <input
                        id="contact-phone"
                        type="tel"
                        placeholder="(415) 555-0144"
                        value={(*phone).clone()}
                        oninput={on_phone_input}
                        onchange={on_phone_change}
                        onfocus={focus_on(Field::Phone)}
                        onblur={blur.clone()}
                    />
                </div>
                <div class="form-group" style={group_style(Field::Message)}>
                    <label for="contact-message">{"Message"}</label>
                    <textarea
                        id="contact-message"
                        rows="6"
                        placeholder="Tell us about the project."
                        value={(*message).clone()}
                        oninput={on_message_input}
                        onfocus={focus_on(Field::Message)}
                        onblur={blur}
                    />
                    if let Some(msg) = (*errors).message {
                        <span class="error-message">{msg}</span>
                    }
                </div>
                if let Some(site_key) = config::RECAPTCHA_SITE_KEY {
                    <div class="form-group">
                        <div class="g-recaptcha" data-sitekey={site_key}></div>
                        if let Some(msg) = (*errors).captcha {
                            <span class="error-message">{msg}</span>
                        }
                    </div>
                }
                <button type="submit" class="btn btn-primary form-submit">
                    {"Send message"}
                </button>
            </form>
            <style>
                {r#"
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                }
                .form-group {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                    border-radius: 8px;
                    transition: box-shadow 0.2s ease;
                }
                .form-group label {
                    font-weight: 600;
                    color: #c7cdd4;
                }
                .form-group input,
                .form-group textarea {
                    padding: 0.8rem 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.12);
                    border-radius: 8px;
                    background: #151922;
                    color: #e7e9ec;
                    font-size: 1rem;
                    font-family: inherit;
                    outline: none;
                }
                .form-group input:focus,
                .form-group textarea:focus {
                    border-color: #2dd4bf;
                }
                .error-message {
                    color: #f87171;
                    font-size: 0.875rem;
                }
                .form-success {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1rem 1.25rem;
                    border: 1px solid rgba(45, 212, 191, 0.4);
                    border-radius: 8px;
                    background: rgba(45, 212, 191, 0.08);
                    color: #5eead4;
                }
                .form-submit {
                    align-self: flex-start;
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactSubmission {
        ContactSubmission {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            phone: String::new(),
            message: "We need a new marketing site.".into(),
        }
    }

    #[test]
    fn complete_submission_is_clean() {
        let errors = validate(&filled(), CaptchaState::Absent);
        assert!(errors.is_clean());
    }

    #[test]
    fn empty_required_fields_are_flagged() {
        let errors = validate(&ContactSubmission::default(), CaptchaState::Absent);
        assert_eq!(errors.name, Some(REQUIRED_MSG));
        assert_eq!(errors.email, Some(REQUIRED_MSG));
        assert_eq!(errors.message, Some(REQUIRED_MSG));
        assert!(errors.captcha.is_none());
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let form = ContactSubmission {
            name: "   ".into(),
            ..filled()
        };
        assert_eq!(validate(&form, CaptchaState::Absent).name, Some(REQUIRED_MSG));
    }

    #[test]
    fn malformed_email_gets_the_format_message() {
        let form = ContactSubmission {
            email: "foo@bar".into(),
            ..filled()
        };
        assert_eq!(validate(&form, CaptchaState::Absent).email, Some(EMAIL_MSG));
    }

    #[test]
    fn empty_email_gets_required_not_format() {
        let form = ContactSubmission {
            email: String::new(),
            ..filled()
        };
        assert_eq!(validate(&form, CaptchaState::Absent).email, Some(REQUIRED_MSG));
    }

    #[test]
    fn phone_is_never_required() {
        let form = ContactSubmission {
            phone: String::new(),
            ..filled()
        };
        assert!(validate(&form, CaptchaState::Absent).is_clean());
    }

    #[test]
    fn unsolved_captcha_blocks_an_otherwise_valid_form() {
        let errors = validate(&filled(), CaptchaState::Unsolved);
        assert_eq!(errors.captcha, Some(CAPTCHA_MSG));
        assert!(!errors.is_clean());
    }

    #[test]
    fn solved_and_absent_captcha_both_pass() {
        assert!(validate(&filled(), CaptchaState::Solved).is_clean());
        assert!(validate(&filled(), CaptchaState::Absent).is_clean());
    }

    #[test]
    fn draft_round_trips_through_json() {
        let draft = filled();
        let raw = serde_json::to_string(&draft).unwrap();
        let back: ContactSubmission = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, draft);
    }
}
