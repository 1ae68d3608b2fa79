use std::fmt;

use serde::{Deserialize, Serialize};

/// Inferred semantic category of a column, used to bias normalization.
///
/// Derived from the column name and a sample of its values; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColumnContext {
    City,
    State,
    #[default]
    General,
}

impl ColumnContext {
    pub fn label(&self) -> &'static str {
        match self {
            Self::City => "CITY",
            Self::State => "STATE",
            Self::General => "GENERAL",
        }
    }
}

impl fmt::Display for ColumnContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
