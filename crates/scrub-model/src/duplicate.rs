use serde::{Deserialize, Serialize};

/// How the members of a group were matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DuplicateKind {
    /// Every column matched after trimming and lower-casing.
    Exact,
    /// Only the named key column matched.
    Partial { column: String },
}

/// Row indices that duplicate each other, in original row order.
///
/// The first member is the original; the rest are copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateGroup {
    pub kind: DuplicateKind,
    pub rows: Vec<usize>,
}

impl DuplicateGroup {
    pub fn exact(rows: Vec<usize>) -> Self {
        Self {
            kind: DuplicateKind::Exact,
            rows,
        }
    }

    pub fn partial(column: impl Into<String>, rows: Vec<usize>) -> Self {
        Self {
            kind: DuplicateKind::Partial {
                column: column.into(),
            },
            rows,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self.kind, DuplicateKind::Exact)
    }

    pub fn original(&self) -> Option<usize> {
        self.rows.first().copied()
    }

    pub fn copies(&self) -> &[usize] {
        self.rows.get(1..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
