//! CSV ingestion and export.
//!
//! Loading trims every cell, replaces blank and null-like cells with the
//! `[MISSING]` sentinel, and records each row's position so the engine can
//! restore the original order later.

pub mod error;
pub mod reader;
pub mod table;
pub mod writer;

pub use error::{IngestError, Result};
pub use reader::{NULL_LIKE, read_csv_reader, read_csv_rows, read_csv_str};
pub use table::Table;
pub use writer::{to_csv_string, write_csv_rows, write_csv_writer};
