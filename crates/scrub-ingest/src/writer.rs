//! Rows to CSV.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::table::Table;

/// Write `table` as CSV to any writer, columns in table order.
pub fn write_csv_writer<W: Write>(output: W, table: &Table, origin: &str) -> Result<()> {
    let csv_error = |source| IngestError::Csv {
        origin: origin.to_string(),
        source,
    };
    let mut writer = WriterBuilder::new().from_writer(output);
    writer.write_record(&table.columns).map_err(csv_error)?;
    for row in &table.rows {
        writer
            .write_record(table.columns.iter().map(|column| row.cell(column)))
            .map_err(csv_error)?;
    }
    writer.flush().map_err(|source| IngestError::Csv {
        origin: origin.to_string(),
        source: source.into(),
    })?;
    debug!(rows = table.rows.len(), origin, "csv written");
    Ok(())
}

/// Write `table` to a CSV file, replacing it if present.
pub fn write_csv_rows(path: &Path, table: &Table) -> Result<()> {
    let file = File::create(path).map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv_writer(file, table, &path.display().to_string())
}

/// Render `table` as CSV text.
pub fn to_csv_string(table: &Table) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv_writer(&mut buffer, table, "<string>")?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
