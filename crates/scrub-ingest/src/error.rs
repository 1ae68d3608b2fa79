//! Error types for CSV ingestion and export.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or writing tables.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to open or read the input file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create or write the output file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV record or a write failure inside the CSV layer.
    #[error("CSV error in {origin}: {source}")]
    Csv {
        origin: String,
        #[source]
        source: csv::Error,
    },

    /// The input had no header row.
    #[error("no header row in {origin}")]
    EmptyInput { origin: String },

    /// A column requested by name does not exist.
    #[error("unknown column '{column}' (available: {available})")]
    UnknownColumn { column: String, available: String },
}

pub type Result<T> = std::result::Result<T, IngestError>;
