//! Data-quality issue types.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScrubError;

/// Column name recorded on duplicate issues that span the whole row.
pub const ALL_COLUMNS: &str = "*";

/// Kind of problem found in a cell or row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IssueType {
    /// Blank or null-like cell.
    Missing,
    /// Value present but not in the canonical shape for its column.
    Format,
    /// Row duplicates another row, exactly or on a key column.
    Duplicate,
    /// Value present and well formed but not a legal value.
    Validity,
}

impl IssueType {
    pub const fn all() -> &'static [Self] {
        &[Self::Missing, Self::Format, Self::Duplicate, Self::Validity]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Missing => "MISSING",
            Self::Format => "FORMAT",
            Self::Duplicate => "DUPLICATE",
            Self::Validity => "VALIDITY",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for IssueType {
    type Err = ScrubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "missing" => Ok(Self::Missing),
            "format" => Ok(Self::Format),
            "duplicate" => Ok(Self::Duplicate),
            "validity" => Ok(Self::Validity),
            _ => Err(ScrubError::UnknownIssueType(s.to_string())),
        }
    }
}

/// A single finding. `row_id` indexes the row sequence passed to detection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub row_id: usize,
    pub column: String,
    pub issue_type: IssueType,
    pub suggestion: String,
}

impl Issue {
    pub fn new(
        row_id: usize,
        column: impl Into<String>,
        issue_type: IssueType,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            row_id,
            column: column.into(),
            issue_type,
            suggestion: suggestion.into(),
        }
    }
}

/// Issues of a single row, in detection order.
pub fn issues_for_row(issues: &[Issue], row_id: usize) -> Vec<Issue> {
    issues
        .iter()
        .filter(|issue| issue.row_id == row_id)
        .cloned()
        .collect()
}

/// Aggregate counts over an issue sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSummary {
    pub total: usize,
    pub by_type: BTreeMap<IssueType, usize>,
    pub by_column: BTreeMap<String, usize>,
    pub rows_affected: usize,
}

impl IssueSummary {
    pub fn from_issues(issues: &[Issue]) -> Self {
        let mut summary = Self {
            total: issues.len(),
            ..Self::default()
        };
        let mut rows = std::collections::BTreeSet::new();
        for issue in issues {
            *summary.by_type.entry(issue.issue_type).or_default() += 1;
            *summary.by_column.entry(issue.column.clone()).or_default() += 1;
            rows.insert(issue.row_id);
        }
        summary.rows_affected = rows.len();
        summary
    }

    pub fn count(&self, issue_type: IssueType) -> usize {
        self.by_type.get(&issue_type).copied().unwrap_or(0)
    }
}
