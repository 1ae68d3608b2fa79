//! Type-aware row ordering.

use std::cmp::Ordering;

use chrono::NaiveDateTime;
use scrub_model::{Row, SortConfig, SortDirection, is_blank};
use scrub_normalization::{parse_amount, parse_date_value};
use tracing::debug_span;

/// Values shorter than this are never compared as dates.
pub const MIN_DATE_SORT_LEN: usize = 6;

/// Sort key of one cell. Variants are ranked in declaration order so cells
/// of different kinds still compare consistently.
#[derive(Debug, Clone, PartialEq)]
enum CellKey<'a> {
    Number(f64),
    Date(NaiveDateTime),
    Text(&'a str),
    Empty,
}

impl CellKey<'_> {
    fn rank(&self) -> u8 {
        match self {
            Self::Number(_) => 0,
            Self::Date(_) => 1,
            Self::Text(_) => 2,
            Self::Empty => 3,
        }
    }
}

fn cell_key(value: &str) -> CellKey<'_> {
    let trimmed = value.trim();
    if is_blank(trimmed) {
        return CellKey::Empty;
    }
    if let Some(amount) = parse_amount(trimmed) {
        return CellKey::Number(amount);
    }
    if trimmed.chars().count() >= MIN_DATE_SORT_LEN
        && let Some(date) = parse_date_value(trimmed)
    {
        return CellKey::Date(date);
    }
    CellKey::Text(trimmed)
}

/// A run of digits (compared by numeric value) or of other characters
/// (compared case-insensitively). Digit runs sort before text runs.
#[derive(Debug, PartialEq, Eq)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(String),
}

impl Ord for Chunk<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Digits(a), Self::Digits(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Digits(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Digits(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Chunk<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn make_chunk(piece: &str, digits: bool) -> Chunk<'_> {
    if digits {
        let significant = piece.trim_start_matches('0');
        Chunk::Digits(if significant.is_empty() { "0" } else { significant })
    } else {
        Chunk::Text(piece.to_lowercase())
    }
}

fn chunks(value: &str) -> Vec<Chunk<'_>> {
    let mut result = Vec::new();
    let mut start = 0;
    let mut digit_run: Option<bool> = None;
    for (idx, ch) in value.char_indices() {
        let is_digit = ch.is_ascii_digit();
        if let Some(current) = digit_run
            && current != is_digit
        {
            result.push(make_chunk(&value[start..idx], current));
            start = idx;
        }
        digit_run = Some(is_digit);
    }
    if let Some(current) = digit_run {
        result.push(make_chunk(&value[start..], current));
    }
    result
}

/// Case-insensitive comparison that orders embedded numbers by value
/// (`item2` before `item10`).
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    chunks(a).cmp(&chunks(b))
}

/// Ascending comparison of two cells.
///
/// Numbers (currency symbols and separators ignored) come first, then dates,
/// then text in natural order, then empty or placeholder cells.
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    let (left, right) = (cell_key(a), cell_key(b));
    match (&left, &right) {
        (CellKey::Number(x), CellKey::Number(y)) => x.total_cmp(y),
        (CellKey::Date(x), CellKey::Date(y)) => x.cmp(y),
        (CellKey::Text(x), CellKey::Text(y)) => natural_cmp(x, y),
        _ => left.rank().cmp(&right.rank()),
    }
}

/// Comparison of two rows under `config`, direction applied.
pub fn compare_rows(a: &Row, b: &Row, config: &SortConfig) -> Ordering {
    let ordering = compare_cells(a.cell(&config.column_id), b.cell(&config.column_id));
    match config.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Return the rows in display order.
///
/// With no config, rows go back to their original insertion order. The sort
/// is stable, so rows comparing equal keep their relative order.
pub fn sort_rows(rows: &[Row], config: Option<&SortConfig>) -> Vec<Row> {
    let span = debug_span!(
        "sort_rows",
        rows = rows.len(),
        column = config.map(|config| config.column_id.as_str())
    );
    let _enter = span.enter();

    let mut sorted = rows.to_vec();
    match config {
        Some(config) => sorted.sort_by(|a, b| compare_rows(a, b, config)),
        None => sorted.sort_by_key(Row::original_index),
    }
    sorted
}
