// Form validation helpers used by the login view

use regex::Regex;
use std::sync::OnceLock;

/// Something before an "@", and a domain with at least one character after a "."
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// Loose email format check
pub fn valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// A user name is required, nothing more
pub fn valid_name(name: &str) -> bool {
    !name.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(valid_email("ann@example.com"));
        assert!(valid_email("a.b+c@mail.co.uk"));
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "ann",
            "ann.example.com",
            "ann@",
            "ann@example",
            "ann@example.",
            "@example.com",
            "ann @example.com",
        ] {
            assert!(!valid_email(email), "{:?} should be rejected", email);
        }
    }

    #[test]
    fn test_name_required() {
        assert!(!valid_name(""));
        assert!(valid_name("Ann"));
    }
}
