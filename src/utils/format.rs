//! Display formatting helpers.

/// Formats a ten-digit US number as `(XXX) XXX-XXXX`. Inputs with any
/// other digit count come back unchanged, so partial entries are left
/// alone while the user is still typing.
pub fn format_phone_number(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_digits_are_formatted() {
        assert_eq!(format_phone_number("4155550144"), "(415) 555-0144");
    }

    #[test]
    fn existing_punctuation_is_stripped_first() {
        assert_eq!(format_phone_number("415-555-0144"), "(415) 555-0144");
        assert_eq!(format_phone_number("(415) 555 0144"), "(415) 555-0144");
    }

    #[test]
    fn other_lengths_pass_through() {
        assert_eq!(format_phone_number("555-0144"), "555-0144");
        assert_eq!(format_phone_number("+1 415 555 0144"), "+1 415 555 0144");
        assert_eq!(format_phone_number(""), "");
    }
}
