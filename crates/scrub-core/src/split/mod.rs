//! Splitting composite columns (addresses, full names) into components.

mod address;
mod classify;
mod name;

pub use address::{MAX_ADDRESS_LEN, MIN_ADDRESS_LEN, parse_address};
pub use classify::{
    MIN_SPLIT_SAMPLES, MIN_UNIQUENESS, SPLIT_SAMPLE_SIZE, SPLIT_TYPE_RATIO, get_splittable_type,
    is_address_like, is_name_like,
};
pub use name::parse_full_name;

use scrub_model::{MISSING, Row, SplitComponents, SplitType, is_blank};
use tracing::{debug, debug_span};

/// Per-row results of splitting one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOutcome {
    pub split_type: SplitType,
    /// Rows whose result has no missing field.
    pub success_count: usize,
    /// All other rows, including those with a blank source value.
    pub fail_count: usize,
    /// One entry per input row, in row order.
    pub results: Vec<Option<SplitComponents>>,
}

/// Parse one value with the parser for `split_type`.
pub fn split_value(value: &str, split_type: SplitType) -> Option<SplitComponents> {
    if is_blank(value) {
        return None;
    }
    match split_type {
        SplitType::Address => Some(SplitComponents::Address(parse_address(value))),
        SplitType::Name => parse_full_name(value).map(SplitComponents::Name),
        SplitType::None => None,
    }
}

/// Apply the parser for `split_type` to `column` in every row.
pub fn smart_split_column(rows: &[Row], column: &str, split_type: SplitType) -> SplitOutcome {
    let span = debug_span!("smart_split_column", rows = rows.len(), column, split_type = %split_type);
    let _enter = span.enter();

    let results: Vec<Option<SplitComponents>> = rows
        .iter()
        .map(|row| split_value(row.cell(column), split_type))
        .collect();
    let success_count = results
        .iter()
        .filter(|result| result.as_ref().is_some_and(SplitComponents::is_complete))
        .count();
    let fail_count = results.len() - success_count;
    debug!(success_count, fail_count, "column split");
    SplitOutcome {
        split_type,
        success_count,
        fail_count,
        results,
    }
}

/// Names of the columns a split of `column` produces.
pub fn split_column_names(column: &str, split_type: SplitType) -> Vec<String> {
    split_type
        .field_suffixes()
        .iter()
        .map(|suffix| format!("{column}_{suffix}"))
        .collect()
}

/// Append the components of `outcome` to `rows` as new columns.
///
/// Rows without a result get [`MISSING`] in every new column. Returns the
/// updated rows and column list; column names already present are reused.
pub fn apply_split(
    rows: &[Row],
    columns: &[String],
    column: &str,
    outcome: &SplitOutcome,
) -> (Vec<Row>, Vec<String>) {
    let new_columns = split_column_names(column, outcome.split_type);
    let mut all_columns = columns.to_vec();
    for name in &new_columns {
        if !all_columns.contains(name) {
            all_columns.push(name.clone());
        }
    }

    let updated = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let mut row = row.clone();
            match outcome.results.get(idx).and_then(Option::as_ref) {
                Some(components) => {
                    for (suffix, value) in components.fields() {
                        row.set(format!("{column}_{suffix}"), value);
                    }
                }
                None => {
                    for name in &new_columns {
                        row.set(name.clone(), MISSING);
                    }
                }
            }
            row
        })
        .collect();
    (updated, all_columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_sources_have_no_result() {
        assert_eq!(split_value("[MISSING]", SplitType::Name), None);
        assert_eq!(split_value("   ", SplitType::Address), None);
        assert_eq!(split_value("Ann Lee", SplitType::None), None);
    }

    #[test]
    fn counts_complete_results_only() {
        let rows = vec![
            Row::from_pairs([("addr", "123 Main St, Manhattan, NY 10001")]),
            Row::from_pairs([("addr", "somewhere")]),
            Row::from_pairs([("addr", "[MISSING]")]),
        ];
        let outcome = smart_split_column(&rows, "addr", SplitType::Address);
        assert_eq!(outcome.success_count, 1);
        assert_eq!(outcome.fail_count, 2);
        assert!(outcome.results[2].is_none());
    }

    #[test]
    fn apply_split_appends_columns() {
        let rows = vec![
            Row::from_pairs([("who", "Ann Lee")]),
            Row::from_pairs([("who", "[MISSING]")]),
        ];
        let columns = vec!["who".to_string()];
        let outcome = smart_split_column(&rows, "who", SplitType::Name);
        let (rows, columns) = apply_split(&rows, &columns, "who", &outcome);
        assert_eq!(columns, vec!["who", "who_First", "who_Middle", "who_Last"]);
        assert_eq!(rows[0].cell("who_First"), "Ann");
        assert_eq!(rows[0].cell("who_Middle"), "");
        assert_eq!(rows[0].cell("who_Last"), "Lee");
        assert_eq!(rows[1].cell("who_First"), MISSING);
    }
}
