//! Static reference data: read-only, built once, shared process-wide.

mod abbreviations;
mod states;
mod zip;

pub use abbreviations::{
    CITY_ABBREVIATIONS, GENERAL_ABBREVIATIONS, expand_city_abbreviation,
    expand_general_abbreviation,
};
pub use states::{US_STATES, is_valid_state_code, state_code_for_name};
pub use zip::{ZipLocation, lookup_zip};

/// Street-suffix words (lower-case) recognised by the address heuristics.
pub const STREET_SUFFIXES: &[&str] = &[
    "street", "st", "avenue", "ave", "av", "road", "rd", "boulevard", "blvd", "drive", "dr",
    "lane", "ln", "court", "ct", "way", "place", "pl", "parkway", "pkwy", "highway", "hwy",
    "terrace", "ter", "circle", "cir", "square", "sq", "plaza", "trail", "trl", "broadway",
];

/// Words that mark a value as an organisation rather than a person.
pub const BUSINESS_KEYWORDS: &[&str] = &[
    "corp",
    "corporation",
    "inc",
    "llc",
    "ltd",
    "co",
    "company",
    "group",
    "partners",
    "holdings",
    "associates",
    "bank",
    "foundation",
    "university",
    "services",
    "solutions",
    "systems",
    "technologies",
];
