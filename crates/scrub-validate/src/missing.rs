//! Missing-value detection.

/// Tokens that mean "no value", compared after trimming, removing
/// surrounding brackets, and lower-casing.
pub const MISSING_TOKENS: &[&str] = &["null", "n/a", "undefined", "missing", "tbd"];

/// True when a cell is empty or holds a null-like token such as `N/A` or
/// `[MISSING]`.
pub fn is_missing_value(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return true;
    }
    let unwrapped = trimmed
        .trim_start_matches('[')
        .trim_end_matches(']')
        .to_lowercase();
    MISSING_TOKENS.contains(&unwrapped.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_like_values() {
        for value in ["", "  ", "[MISSING]", "NULL", "n/a", "[tbd]", "Undefined"] {
            assert!(is_missing_value(value), "{value:?}");
        }
        for value in ["none", "0", "[x]", "Boston"] {
            assert!(!is_missing_value(value), "{value:?}");
        }
    }
}
