mod about;
mod contact;
mod faq;
mod home;

pub use about::About;
pub use contact::Contact;
pub use faq::Faq;
pub use home::Home;

use crate::animations;
use crate::utils::dom;

/// Shared mount work for every page: jump to the top, then hook the
/// scroll effects to whatever the page just rendered. The returned
/// closure is the effect teardown.
pub(crate) fn page_setup() -> impl FnOnce() {
    dom::scroll_to_top_instant();
    let effects = animations::init();
    if !effects.is_active() {
        log::debug!("page rendered without any scroll-effect targets");
    }
    move || drop(effects)
}
