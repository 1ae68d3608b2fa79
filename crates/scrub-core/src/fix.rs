//! Deterministic auto-fixing of cell values.
//!
//! Each cell is handled by the first [`FixRule`] whose column predicate
//! matches. Cells that are blank, bracketed placeholders, or in columns no
//! rule claims are left as they are. Every rule is idempotent, so fixing
//! already-fixed data changes nothing.

use std::collections::BTreeSet;

use scrub_model::{ColumnContext, Issue, IssueType, Row, is_blank};
use scrub_normalization::{
    classify_column, collapse_whitespace, is_currency_column, is_date_column, is_email_column,
    is_phone_column, is_state_column, is_text_column, is_url_column, normalize_currency,
    normalize_date, normalize_phone, normalize_text, state_code_for_name,
};
use tracing::{debug, debug_span, trace};

/// Which cells a fix pass touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FixMode {
    /// Only cells with a FORMAT issue in the supplied issue list.
    #[default]
    Targeted,
    /// Every non-blank cell in a column some rule claims.
    All,
}

/// One column-name rule: the predicate that claims a column and the
/// transform applied to its whitespace-collapsed values.
pub struct FixRule {
    pub name: &'static str,
    pub applies: fn(&str) -> bool,
    pub transform: fn(&str, ColumnContext) -> String,
}

fn lower_case(value: &str, _context: ColumnContext) -> String {
    value.to_lowercase()
}

fn phone(value: &str, _context: ColumnContext) -> String {
    normalize_phone(value)
}

fn date(value: &str, _context: ColumnContext) -> String {
    normalize_date(value)
}

fn currency(value: &str, _context: ColumnContext) -> String {
    normalize_currency(value)
}

fn keep(value: &str, _context: ColumnContext) -> String {
    value.to_string()
}

fn state(value: &str, _context: ColumnContext) -> String {
    if value.len() == 2 && value.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return value.to_uppercase();
    }
    match state_code_for_name(value) {
        Some(code) => code.to_string(),
        None => value.to_string(),
    }
}

/// Fix rules in precedence order, aligned with the detector's rule order.
pub const FIX_RULES: &[FixRule] = &[
    FixRule {
        name: "phone",
        applies: is_phone_column,
        transform: phone,
    },
    FixRule {
        name: "date",
        applies: is_date_column,
        transform: date,
    },
    FixRule {
        name: "currency",
        applies: is_currency_column,
        transform: currency,
    },
    FixRule {
        name: "state",
        applies: is_state_column,
        transform: state,
    },
    FixRule {
        name: "url",
        applies: is_url_column,
        transform: keep,
    },
    FixRule {
        name: "email",
        applies: is_email_column,
        transform: lower_case,
    },
    FixRule {
        name: "text",
        applies: is_text_column,
        transform: normalize_text,
    },
];

/// The rule that owns `column`, if any.
pub fn fix_rule_for(column: &str) -> Option<&'static FixRule> {
    FIX_RULES.iter().find(|rule| (rule.applies)(column))
}

/// Fixed form of a single cell, or `None` when the cell is not fixable.
pub fn fix_value(column: &str, value: &str, context: ColumnContext) -> Option<String> {
    if is_blank(value) {
        return None;
    }
    let rule = fix_rule_for(column)?;
    let fixed = (rule.transform)(&collapse_whitespace(value), context);
    trace!(column, rule = rule.name, "fixed cell");
    Some(fixed)
}

/// Only the column name can make a context CITY, so a single-value sample
/// gives the same answer as the whole column for dictionary purposes.
fn cell_context(column: &str, value: &str) -> ColumnContext {
    classify_column(column, &[value])
}

fn fix_columns<'a>(row: &Row, columns: impl IntoIterator<Item = &'a String>) -> Row {
    let mut fixed = row.clone();
    for column in columns {
        let value = row.cell(column);
        if let Some(new_value) = fix_value(column, value, cell_context(column, value)) {
            fixed.set(column.clone(), new_value);
        }
    }
    fixed
}

/// Fix the cells of `row` that carry a FORMAT issue.
///
/// `issues` is the issue list for this row (see
/// [`scrub_model::issues_for_row`]). The input row is not modified.
pub fn fix_row(row: &Row, columns: &[String], issues: &[Issue]) -> Row {
    let flagged: BTreeSet<&str> = issues
        .iter()
        .filter(|issue| issue.issue_type == IssueType::Format)
        .map(|issue| issue.column.as_str())
        .collect();
    fix_columns(
        row,
        columns
            .iter()
            .filter(|column| flagged.contains(column.as_str())),
    )
}

/// Targeted fix over a table: each row gets only its own FORMAT issues.
pub fn fix_rows(rows: &[Row], columns: &[String], issues: &[Issue]) -> Vec<Row> {
    let span = debug_span!("fix_rows", rows = rows.len(), issues = issues.len());
    let _enter = span.enter();
    let fixed: Vec<Row> = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let row_issues: Vec<Issue> = issues
                .iter()
                .filter(|issue| issue.row_id == idx)
                .cloned()
                .collect();
            if row_issues.is_empty() {
                row.clone()
            } else {
                fix_row(row, columns, &row_issues)
            }
        })
        .collect();
    debug!(changed = count_changed(rows, &fixed), "targeted fix complete");
    fixed
}

/// Bulk fix: normalize every fixable cell regardless of detected issues.
pub fn fix_all(rows: &[Row], columns: &[String]) -> Vec<Row> {
    let span = debug_span!("fix_all", rows = rows.len(), columns = columns.len());
    let _enter = span.enter();
    let fixed: Vec<Row> = rows.iter().map(|row| fix_columns(row, columns)).collect();
    debug!(changed = count_changed(rows, &fixed), "bulk fix complete");
    fixed
}

/// Run a fix pass in the given mode. `issues` is ignored for [`FixMode::All`].
pub fn apply_fixes(rows: &[Row], columns: &[String], issues: &[Issue], mode: FixMode) -> Vec<Row> {
    match mode {
        FixMode::Targeted => fix_rows(rows, columns, issues),
        FixMode::All => fix_all(rows, columns),
    }
}

fn count_changed(before: &[Row], after: &[Row]) -> usize {
    before
        .iter()
        .zip(after)
        .filter(|(old, new)| old != new)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn rules_by_column_name() {
        let ctx = ColumnContext::General;
        assert_eq!(fix_value("Phone", "555.123.4567", ctx).as_deref(), Some("(555) 123-4567"));
        assert_eq!(fix_value("price", "1000", ctx).as_deref(), Some("1000.00"));
        assert_eq!(fix_value("start_date", "3/4/2024", ctx).as_deref(), Some("2024-03-04"));
        assert_eq!(fix_value("state", "ny", ctx).as_deref(), Some("NY"));
        assert_eq!(fix_value("state", "new  york", ctx).as_deref(), Some("NY"));
        assert_eq!(fix_value("state", "Narnia", ctx).as_deref(), Some("Narnia"));
        assert_eq!(fix_value("Email", " A@B.com ", ctx).as_deref(), Some("a@b.com"));
        assert_eq!(
            fix_value("job_title", "sr  eng mgr", ctx).as_deref(),
            Some("Sr Engineer Manager")
        );
        assert_eq!(fix_value("notes", "hello", ctx), None);
    }

    #[test]
    fn url_columns_are_not_title_cased() {
        let cols = columns(&["company_website", "job_link"]);
        let rows = vec![Row::from_pairs([
            ("company_website", "https://acme.com/st/main"),
            ("job_link", "http://jobs.io/sr-eng"),
        ])];
        assert_eq!(fix_all(&rows, &cols), rows);
        assert_eq!(
            fix_value("company_website", " https://acme.com ", ColumnContext::General).as_deref(),
            Some("https://acme.com")
        );
    }

    #[test]
    fn state_codes_are_ascii() {
        assert_eq!(fix_value("state", "ßa", ColumnContext::General).as_deref(), Some("ßa"));
    }

    #[test]
    fn placeholders_are_untouched() {
        assert_eq!(fix_value("price", "[MISSING]", ColumnContext::General), None);
        assert_eq!(fix_value("price", "   ", ColumnContext::General), None);
    }

    #[test]
    fn city_columns_expand_city_abbreviations() {
        let cols = columns(&["city"]);
        let rows = vec![Row::from_pairs([("city", "ft worth")])];
        assert_eq!(fix_all(&rows, &cols)[0].cell("city"), "Fort Worth");
    }

    #[test]
    fn targeted_fix_only_touches_flagged_cells() {
        let cols = columns(&["price", "name"]);
        let rows = vec![
            Row::from_pairs([("price", "5"), ("name", "ann lee")]),
            Row::from_pairs([("price", "7"), ("name", "bo li")]),
        ];
        let issues = vec![Issue::new(1, "price", IssueType::Format, "Standardize Currency")];
        let fixed = fix_rows(&rows, &cols, &issues);
        assert_eq!(fixed[0], rows[0]);
        assert_eq!(fixed[1].cell("price"), "7.00");
        assert_eq!(fixed[1].cell("name"), "bo li");
    }

    #[test]
    fn validity_issues_are_not_fixed() {
        let cols = columns(&["state"]);
        let row = Row::from_pairs([("state", "zz")]);
        let issues = vec![Issue::new(0, "state", IssueType::Validity, "Invalid State")];
        assert_eq!(fix_row(&row, &cols, &issues), row);
    }

    #[test]
    fn original_index_survives_fixing() {
        let cols = columns(&["name"]);
        let rows = vec![Row::from_pairs([("name", "ann")]).with_original_index(7)];
        assert_eq!(fix_all(&rows, &cols)[0].original_index, Some(7));
    }
}
