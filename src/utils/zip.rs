use std::fmt;

/// First five digits of a US ZIP code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct ZipCode(String);

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize a raw ZIP field.
///
/// The whole field must be ASCII digits and at least five long; ZIP+4 and
/// longer codes are cut down to their first five digits.
pub(crate) fn validate_zip(raw: &str) -> Option<ZipCode> {
    if raw.len() < 5 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(ZipCode(raw[..5].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zip(raw: &str) -> Option<String> {
        validate_zip(raw).map(|z| z.to_string())
    }

    #[test]
    fn five_digits() {
        assert_eq!(zip("12345").as_deref(), Some("12345"));
    }

    #[test]
    fn truncates_long_codes() {
        assert_eq!(zip("123456789").as_deref(), Some("12345"));
        assert_eq!(zip("028956146").as_deref(), Some("02895"));
    }

    #[test]
    fn rejects_short_and_empty() {
        assert_eq!(zip("1234"), None);
        assert_eq!(zip(""), None);
    }

    #[test]
    fn rejects_any_non_digit() {
        assert_eq!(zip("12345-6789"), None);
        assert_eq!(zip("1234a"), None);
        assert_eq!(zip(" 12345"), None);
    }

    #[test]
    fn display_matches_digits() {
        let z = validate_zip("90017").unwrap();
        assert_eq!(z.to_string(), "90017");
    }
}
