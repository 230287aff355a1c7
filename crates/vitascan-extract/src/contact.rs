//! Contact extraction: first email-shaped and phone-shaped tokens.

use once_cell::sync::Lazy;
use regex::Regex;

use vitascan_core::ContactInfo;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[a-z0-9.\-+_]+@[a-z0-9.\-+_]+\.[a-z]{2,6}").unwrap());

// Optional country code, then grouped digits
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+?\d{1,3}[\s-]?)?(\(?\d{3}\)?[\s.\-]?\d{3}[\s.\-]?\d{4,})").unwrap()
});

/// Extract the first email and phone match from the text.
///
/// The phone is reduced to its last 10 digits after stripping everything
/// non-numeric.
pub fn extract_contact(text: &str) -> ContactInfo {
    let email = EMAIL_RE.find(text).map(|m| m.as_str().to_string());
    let phone = PHONE_RE.find(text).map(|m| last_ten_digits(m.as_str()));

    ContactInfo { email, phone }
}

fn last_ten_digits(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let start = digits.len().saturating_sub(10);
    digits[start..].to_string()
}
