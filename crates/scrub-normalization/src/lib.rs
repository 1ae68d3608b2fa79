//! Pure normalization helpers for tabular cleaning.
//!
//! Everything here is a total function over strings: values that cannot be
//! normalized come back unchanged. The static reference tables (states, ZIP
//! codes, abbreviations) are built lazily on first use and never mutated.

pub mod context;
pub mod datetime;
pub mod formats;
pub mod numeric;
pub mod patterns;
pub mod reference;
pub mod text;

pub use context::{CONTEXT_SAMPLE_SIZE, STATE_CODE_RATIO, classify_column, column_context};
pub use datetime::{is_iso_date, normalize_date, parse_date_value};
pub use formats::{is_formatted_phone, is_valid_url, normalize_phone};
pub use numeric::{has_currency_symbol, is_two_decimal_amount, normalize_currency, parse_amount};
pub use patterns::{
    is_currency_column, is_date_column, is_email_column, is_phone_column, is_state_column,
    is_text_column, is_url_column,
};
pub use reference::{
    BUSINESS_KEYWORDS, STREET_SUFFIXES, ZipLocation, is_valid_state_code, lookup_zip,
    state_code_for_name,
};
pub use text::{apply_dictionary, collapse_whitespace, has_letter, normalize_text, to_title_case};
