//! Issue detection.
//!
//! [`detect`] re-derives the full issue list from the current rows on every
//! call. It never patches a previous result.

pub mod missing;
pub mod rules;

use scrub_core::find_duplicate_groups;
use scrub_model::{ALL_COLUMNS, ColumnContext, DuplicateKind, Issue, IssueType, Row};
use scrub_normalization::column_context;
use tracing::{debug, debug_span, trace};

pub use missing::{MISSING_TOKENS, is_missing_value};
pub use rules::{CELL_RULES, Cell, CellRule, Finding, check_cell, rule_for};

pub const ORIGINAL: &str = "Original";
pub const DUPLICATE_ROW: &str = "Duplicate Row";
pub const FILL_MISSING: &str = "Fill Missing Value";

fn duplicate_issues(rows: &[Row], columns: &[String]) -> Vec<Issue> {
    let mut issues = Vec::new();
    for group in find_duplicate_groups(rows, columns) {
        let column = match &group.kind {
            DuplicateKind::Exact => ALL_COLUMNS.to_string(),
            DuplicateKind::Partial { column } => column.clone(),
        };
        for (pos, &row_id) in group.rows.iter().enumerate() {
            let suggestion = if pos == 0 { ORIGINAL } else { DUPLICATE_ROW };
            issues.push(Issue::new(row_id, column.clone(), IssueType::Duplicate, suggestion));
        }
    }
    issues
}

/// Detect MISSING, FORMAT, VALIDITY, and DUPLICATE issues.
///
/// Duplicate issues come first (exact groups use the column `*`), followed by
/// cell issues in row order and, within a row, in column order. A cell gets
/// at most one of MISSING or a single FORMAT/VALIDITY finding.
pub fn detect(rows: &[Row], columns: &[String]) -> Vec<Issue> {
    let span = debug_span!("detect", rows = rows.len(), columns = columns.len());
    let _enter = span.enter();

    let contexts: Vec<ColumnContext> = columns
        .iter()
        .map(|column| column_context(rows, column))
        .collect();

    let mut issues = duplicate_issues(rows, columns);
    let duplicates = issues.len();

    for (row_id, row) in rows.iter().enumerate() {
        for (column, context) in columns.iter().zip(&contexts) {
            let value = row.cell(column).trim();
            if is_missing_value(value) {
                issues.push(Issue::new(row_id, column.clone(), IssueType::Missing, FILL_MISSING));
                continue;
            }
            let cell = Cell {
                column,
                value,
                context: *context,
            };
            if let Some(finding) = check_cell(&cell) {
                trace!(row_id, column = %column, issue = %finding.issue_type, "cell issue");
                issues.push(Issue::new(
                    row_id,
                    column.clone(),
                    finding.issue_type,
                    finding.suggestion,
                ));
            }
        }
    }

    debug!(
        total = issues.len(),
        duplicates,
        cells = issues.len() - duplicates,
        "detection complete"
    );
    issues
}
