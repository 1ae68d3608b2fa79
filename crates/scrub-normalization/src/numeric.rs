//! Currency and amount handling.

use std::sync::LazyLock;

use regex::Regex;

const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£', '¥'];

static TWO_DECIMAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+\.\d{2}$").expect("Invalid amount regex"));

fn strip_decorations(value: &str) -> String {
    value
        .chars()
        .filter(|ch| !CURRENCY_SYMBOLS.contains(ch) && *ch != ',' && !ch.is_whitespace())
        .collect()
}

/// True when the value carries a currency symbol.
pub fn has_currency_symbol(value: &str) -> bool {
    value.chars().any(|ch| CURRENCY_SYMBOLS.contains(&ch))
}

/// Parse an amount, ignoring currency symbols, thousands separators and
/// whitespace. Non-finite results are rejected.
pub fn parse_amount(value: &str) -> Option<f64> {
    let cleaned = strip_decorations(value);
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|amount| amount.is_finite())
}

/// Already a plain amount with exactly two decimals (`1000.00`, `-3.50`).
pub fn is_two_decimal_amount(value: &str) -> bool {
    TWO_DECIMAL_REGEX.is_match(&strip_decorations(value))
}

/// Keep digits, `.` and `-`, then format with two decimals. Input that does
/// not parse is returned unchanged.
pub fn normalize_currency(value: &str) -> String {
    let kept: String = value
        .chars()
        .filter(|ch| ch.is_ascii_digit() || matches!(ch, '.' | '-'))
        .collect();
    match kept.parse::<f64>() {
        Ok(amount) if amount.is_finite() => format!("{amount:.2}"),
        _ => value.to_string(),
    }
}
