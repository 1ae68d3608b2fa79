//! Structured components produced by splitting composite text columns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScrubError;
use crate::row::MISSING;

/// Parsed postal address. Unresolved fields hold [`MISSING`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressComponents {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl AddressComponents {
    /// Unparsed address: the raw text kept as street, everything else missing.
    pub fn unresolved(raw: &str) -> Self {
        Self {
            street: raw.to_string(),
            city: MISSING.to_string(),
            state: MISSING.to_string(),
            zip: MISSING.to_string(),
        }
    }

    pub fn is_complete(&self) -> bool {
        [&self.street, &self.city, &self.state, &self.zip]
            .iter()
            .all(|field| field.as_str() != MISSING)
    }
}

/// Parsed personal name. `middle` may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameComponents {
    pub first: String,
    pub middle: String,
    pub last: String,
}

impl NameComponents {
    pub fn is_complete(&self) -> bool {
        [&self.first, &self.middle, &self.last]
            .iter()
            .all(|field| field.as_str() != MISSING)
    }
}

/// Result of parsing one value with the parser chosen for its column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SplitComponents {
    Address(AddressComponents),
    Name(NameComponents),
}

impl SplitComponents {
    pub fn is_complete(&self) -> bool {
        match self {
            Self::Address(address) => address.is_complete(),
            Self::Name(name) => name.is_complete(),
        }
    }

    /// `(suffix, value)` pairs in column order.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::Address(address) => vec![
                ("Street", address.street.as_str()),
                ("City", address.city.as_str()),
                ("State", address.state.as_str()),
                ("Zip", address.zip.as_str()),
            ],
            Self::Name(name) => vec![
                ("First", name.first.as_str()),
                ("Middle", name.middle.as_str()),
                ("Last", name.last.as_str()),
            ],
        }
    }
}

/// Whether a column can be split, and with which parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SplitType {
    Address,
    Name,
    #[default]
    None,
}

impl SplitType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Address => "ADDRESS",
            Self::Name => "NAME",
            Self::None => "NONE",
        }
    }

    /// Column suffixes produced when a column of this type is split.
    pub fn field_suffixes(&self) -> &'static [&'static str] {
        match self {
            Self::Address => &["Street", "City", "State", "Zip"],
            Self::Name => &["First", "Middle", "Last"],
            Self::None => &[],
        }
    }
}

impl fmt::Display for SplitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SplitType {
    type Err = ScrubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "address" => Ok(Self::Address),
            "name" => Ok(Self::Name),
            "none" => Ok(Self::None),
            _ => Err(ScrubError::UnknownSplitType(s.to_string())),
        }
    }
}
