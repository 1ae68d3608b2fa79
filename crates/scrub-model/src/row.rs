//! Row storage for tabular text data.
//!
//! Every cell is a string. Absent, blank, and null-like cells are replaced by
//! the [`MISSING`] sentinel before rows reach the engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sentinel for an absent cell. Distinct from the empty string.
pub const MISSING: &str = "[MISSING]";

/// Returns true when a trimmed value is wrapped in square brackets.
///
/// Bracketed values such as `[MISSING]` are placeholders, never data.
pub fn is_placeholder(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.len() >= 2 && trimmed.starts_with('[') && trimmed.ends_with(']')
}

/// Returns true for the empty string, whitespace, or a bracketed placeholder.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty() || is_placeholder(value)
}

/// One record: column name to cell value, plus the position the row had when
/// it was first loaded.
///
/// The original index is owned by the caller (assigned at ingestion) and is
/// what restores the default order after sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub values: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_index: Option<usize>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from `(column, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
            original_index: None,
        }
    }

    #[must_use]
    pub fn with_original_index(mut self, index: usize) -> Self {
        self.original_index = Some(index);
        self
    }

    /// Cell value for `column`, if the column exists in this row.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    /// Cell value for `column`, or the empty string when absent.
    pub fn cell(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.values.insert(column.into(), value.into());
    }

    /// Stable insertion index; rows that never had one sort as index 0.
    pub fn original_index(&self) -> usize {
        self.original_index.unwrap_or(0)
    }
}
