//! Field validation primitives for the contact form.

/// Email shape check: exactly one `@` with a non-empty local part, a domain
/// containing a dot with characters on both sides, and no whitespace
/// anywhere. Deliberately loose beyond that; the mail server is the real
/// authority.
pub fn is_valid_email(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .rsplit_once('.')
        .map_or(false, |(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// Trimmed value of a required field, or `None` when effectively empty.
pub fn required_value(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("first.last+tag@mail.co"));
        assert!(is_valid_email("a@b.c"));
    }

    #[test]
    fn rejects_missing_tld() {
        assert!(!is_valid_email("foo@bar"));
    }

    #[test]
    fn rejects_empty_parts() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@"));
        assert!(!is_valid_email("ada@.com"));
        assert!(!is_valid_email("ada@example."));
    }

    #[test]
    fn rejects_whitespace_and_double_at() {
        assert!(!is_valid_email("ada @example.com"));
        assert!(!is_valid_email("ada@exam ple.com"));
        assert!(!is_valid_email("ada@@example.com"));
        assert!(!is_valid_email("ada@ex@ample.com"));
    }

    #[test]
    fn required_value_trims() {
        assert_eq!(required_value("  hi  "), Some("hi"));
        assert_eq!(required_value("   "), None);
        assert_eq!(required_value(""), None);
    }
}
