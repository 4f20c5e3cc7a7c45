//! Site-wide constants and deploy-specific endpoints.

pub const SITE_NAME: &str = "Vantora Digital";

pub const CONTACT_EMAIL: &str = "hello@vantora.studio";

/// Raw digits; rendered through `utils::format::format_phone_number`.
pub const CONTACT_PHONE: &str = "4155550144";

pub const OFFICE_ADDRESS: &str = "548 Market Street, San Francisco, CA";

/// Site key for the contact-form challenge widget. `None` leaves the widget
/// out of the page entirely, and validation skips the token check.
pub const RECAPTCHA_SITE_KEY: Option<&str> = None;

/// Where a production deploy posts contact submissions. The form handler
/// currently logs the payload instead of calling this.
pub fn contact_endpoint() -> String {
    "https://api.vantora.studio/v1/contact".to_string()
}
