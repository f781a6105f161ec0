//! Email address format check.

use std::sync::OnceLock;

/// Loose `local@domain.tld` shape check used for client records and
/// acknowledgement terms.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    static EMAIL_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = EMAIL_REGEX.get_or_init(|| {
        regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
    });

    re.is_match(value)
}
