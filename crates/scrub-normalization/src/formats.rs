//! Phone number and URL shapes.

use std::sync::LazyLock;

use regex::Regex;

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(\d{3}\) \d{3}-\d{4}$").expect("Invalid phone regex"));

static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").expect("Invalid URL regex"));

/// True for `(XXX) XXX-XXXX`.
pub fn is_formatted_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value.trim())
}

/// Reformat a 10-digit number, or an 11-digit one with a leading `1`, as
/// `(XXX) XXX-XXXX`. Anything else is returned unchanged.
pub fn normalize_phone(value: &str) -> String {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    let local = match digits.len() {
        10 => digits.as_str(),
        11 if digits.starts_with('1') => &digits[1..],
        _ => return value.to_string(),
    };
    format!("({}) {}-{}", &local[..3], &local[3..6], &local[6..])
}

/// `http://` or `https://` followed by a plausible host.
pub fn is_valid_url(value: &str) -> bool {
    URL_REGEX.is_match(value.trim())
}
