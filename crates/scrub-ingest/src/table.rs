use scrub_model::Row;

use crate::error::{IngestError, Result};

/// Rows plus the column order they were read in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Resolve a column name, exact match first, then case-insensitive.
    pub fn column(&self, name: &str) -> Result<&str> {
        let wanted = name.trim();
        self.columns
            .iter()
            .find(|column| column.as_str() == wanted)
            .or_else(|| {
                self.columns
                    .iter()
                    .find(|column| column.eq_ignore_ascii_case(wanted))
            })
            .map(String::as_str)
            .ok_or_else(|| IngestError::UnknownColumn {
                column: name.to_string(),
                available: self.columns.join(", "),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_lookup() {
        let table = Table::new(vec!["Email".to_string(), "email".to_string()], Vec::new());
        assert_eq!(table.column("email").expect("exact"), "email");
        assert_eq!(table.column("EMAIL").expect("case-insensitive"), "Email");
        let err = table.column("phone").expect_err("unknown");
        assert!(err.to_string().contains("available: Email, email"));
    }
}
