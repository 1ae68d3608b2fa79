//! CSV to rows.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use scrub_model::{MISSING, Row};
use tracing::{debug, debug_span};

use crate::error::{IngestError, Result};
use crate::table::Table;

/// Cell values (lower-cased) replaced by [`MISSING`] on load.
pub const NULL_LIKE: &[&str] = &["", "null", "n/a", "undefined", "none", "nan"];

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}').trim();
    if NULL_LIKE.contains(&trimmed.to_lowercase().as_str()) {
        MISSING.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Blank headers become `Column N`; repeated headers get `_2`, `_3`, ...
fn unique_headers(raw: &[String]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    raw.iter()
        .enumerate()
        .map(|(idx, header)| {
            let base = if header.is_empty() {
                format!("Column {}", idx + 1)
            } else {
                header.clone()
            };
            let mut name = base.clone();
            let mut suffix = 2;
            while !seen.insert(name.clone()) {
                name = format!("{base}_{suffix}");
                suffix += 1;
            }
            name
        })
        .collect()
}

/// Read CSV from any reader. `origin` names the input in errors and logs.
pub fn read_csv_reader<R: Read>(input: R, origin: &str) -> Result<Table> {
    let span = debug_span!("read_csv", origin);
    let _enter = span.enter();

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut records = reader.records().filter(|record| {
        record.as_ref().map_or(true, |record| {
            !record
                .iter()
                .all(|value| value.trim().trim_matches('\u{feff}').is_empty())
        })
    });
    let csv_error = |source| IngestError::Csv {
        origin: origin.to_string(),
        source,
    };

    let header = records
        .next()
        .transpose()
        .map_err(csv_error)?
        .ok_or_else(|| IngestError::EmptyInput {
            origin: origin.to_string(),
        })?;
    let raw: Vec<String> = header.iter().map(normalize_header).collect();
    let columns = unique_headers(&raw);

    let mut rows = Vec::new();
    for record in records {
        let record = record.map_err(csv_error)?;
        let row = Row::from_pairs(columns.iter().enumerate().map(|(idx, column)| {
            (column.clone(), normalize_cell(record.get(idx).unwrap_or("")))
        }))
        .with_original_index(rows.len());
        rows.push(row);
    }

    debug!(columns = columns.len(), rows = rows.len(), "csv loaded");
    Ok(Table::new(columns, rows))
}

/// Read a CSV file into rows, stamping each with its original index.
pub fn read_csv_rows(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv_reader(file, &path.display().to_string())
}

/// Read CSV text held in memory.
pub fn read_csv_str(text: &str) -> Result<Table> {
    read_csv_reader(text.as_bytes(), "<string>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_names_are_made_unique() {
        let raw = vec!["a".to_string(), String::new(), "a".to_string(), "a".to_string()];
        assert_eq!(unique_headers(&raw), vec!["a", "Column 2", "a_2", "a_3"]);
    }

    #[test]
    fn null_like_cells_become_missing() {
        for raw in ["", "  ", "NULL", "n/a", "None", "NaN", "undefined"] {
            assert_eq!(normalize_cell(raw), MISSING, "{raw:?}");
        }
        assert_eq!(normalize_cell("  Boston "), "Boston");
        assert_eq!(normalize_cell("[MISSING]"), MISSING);
    }

    #[test]
    fn headers_drop_bom_and_extra_spaces() {
        assert_eq!(normalize_header("\u{feff}Full   Name "), "Full Name");
    }
}
