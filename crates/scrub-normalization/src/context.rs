//! Column context inference.

use std::sync::LazyLock;

use regex::Regex;
use scrub_model::{ColumnContext, Row, is_blank};

/// Values inspected when the column name is not conclusive.
pub const CONTEXT_SAMPLE_SIZE: usize = 50;

/// Share of two-letter upper-case values above which a column is a state column.
pub const STATE_CODE_RATIO: f64 = 0.7;

static TWO_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}$").expect("Invalid state code regex"));

/// Infer the context of a column from its name, falling back to its values.
///
/// The name decides first (`city`/`borough`/`town`, then `state`/`st`/`code`).
/// Otherwise the first [`CONTEXT_SAMPLE_SIZE`] non-empty values are checked
/// for two-letter upper-case codes.
pub fn classify_column<S: AsRef<str>>(column: &str, sample: &[S]) -> ColumnContext {
    let name = column.trim().to_lowercase();
    if ["city", "borough", "town"]
        .iter()
        .any(|keyword| name.contains(keyword))
    {
        return ColumnContext::City;
    }
    if name.contains("state") || name == "st" || name.contains("code") {
        return ColumnContext::State;
    }

    let values: Vec<&str> = sample
        .iter()
        .map(|value| value.as_ref().trim())
        .filter(|value| !is_blank(value))
        .take(CONTEXT_SAMPLE_SIZE)
        .collect();
    if values.is_empty() {
        return ColumnContext::General;
    }
    let matching = values
        .iter()
        .filter(|value| TWO_UPPER.is_match(value))
        .count();
    if matching as f64 / values.len() as f64 > STATE_CODE_RATIO {
        ColumnContext::State
    } else {
        ColumnContext::General
    }
}

/// Context of `column` computed from the values it holds in `rows`.
pub fn column_context(rows: &[Row], column: &str) -> ColumnContext {
    let sample: Vec<&str> = rows
        .iter()
        .map(|row| row.cell(column))
        .filter(|value| !is_blank(value))
        .take(CONTEXT_SAMPLE_SIZE)
        .collect();
    classify_column(column, &sample)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_wins_over_values() {
        assert_eq!(classify_column("Home Town", &["NY"]), ColumnContext::City);
        assert_eq!(classify_column("Borough", &[] as &[&str]), ColumnContext::City);
        assert_eq!(classify_column("ST", &["Boston"]), ColumnContext::State);
        assert_eq!(classify_column("zip_code", &["10001"]), ColumnContext::State);
    }

    #[test]
    fn values_decide_for_neutral_names() {
        let codes = ["NY", "MA", "CA", "TX", "WA"];
        assert_eq!(classify_column("region", &codes), ColumnContext::State);

        let mixed = ["NY", "MA", "Boston", "Quincy"];
        assert_eq!(classify_column("region", &mixed), ColumnContext::General);
    }

    #[test]
    fn empty_sample_is_general() {
        assert_eq!(
            classify_column("region", &["", "  ", "[MISSING]"]),
            ColumnContext::General
        );
    }

    #[test]
    fn ratio_must_exceed_threshold() {
        // 7 of 10 is exactly 0.7 and not enough.
        let values = ["NY", "MA", "CA", "TX", "WA", "OR", "NV", "x", "y", "z"];
        assert_eq!(classify_column("region", &values), ColumnContext::General);
    }
}
