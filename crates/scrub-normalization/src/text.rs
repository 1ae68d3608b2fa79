//! Casing, whitespace, and abbreviation normalization.

use scrub_model::ColumnContext;

use crate::reference::{expand_city_abbreviation, expand_general_abbreviation};

/// The single-character case mapping of `ch`, or `ch` itself when the
/// mapping expands (`ß` upper-cases to `SS`).
fn map_single<I>(ch: char, mapped: I) -> char
where
    I: Iterator<Item = char>,
{
    let mut mapped = mapped;
    match (mapped.next(), mapped.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

/// Capitalize the first letter of each whitespace-delimited token and
/// lower-case the rest. Whitespace is kept as is, and every character maps
/// to exactly one character.
pub fn to_title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut at_token_start = true;
    for ch in value.chars() {
        if ch.is_whitespace() {
            at_token_start = true;
            result.push(ch);
        } else if at_token_start {
            at_token_start = false;
            result.push(map_single(ch, ch.to_uppercase()));
        } else {
            result.push(map_single(ch, ch.to_lowercase()));
        }
    }
    result
}

/// Trim and collapse every internal whitespace run to a single space.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_delimiter(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, ',' | '.' | '/')
}

/// Split into alternating word and delimiter runs. Concatenating the pieces
/// gives back the input.
fn tokenize(value: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut in_delimiter: Option<bool> = None;
    for (idx, ch) in value.char_indices() {
        let delimiter = is_delimiter(ch);
        match in_delimiter {
            Some(current) if current != delimiter => {
                pieces.push(&value[start..idx]);
                start = idx;
            }
            _ => {}
        }
        in_delimiter = Some(delimiter);
    }
    if start < value.len() {
        pieces.push(&value[start..]);
    }
    pieces
}

/// Expand known abbreviations token by token.
///
/// In city columns the city table is consulted first; every column then
/// falls back to the general street/job-title table. Delimiters (whitespace,
/// commas, periods, slashes) are copied through untouched.
pub fn apply_dictionary(value: &str, context: ColumnContext) -> String {
    let mut result = String::with_capacity(value.len());
    for piece in tokenize(value) {
        if piece.chars().all(is_delimiter) {
            result.push_str(piece);
            continue;
        }
        let city = if context == ColumnContext::City {
            expand_city_abbreviation(piece)
        } else {
            None
        };
        match city.or_else(|| expand_general_abbreviation(piece)) {
            Some(expansion) => result.push_str(expansion),
            None => result.push_str(piece),
        }
    }
    result
}

/// Dictionary expansion followed by title casing.
pub fn normalize_text(value: &str, context: ColumnContext) -> String {
    to_title_case(&apply_dictionary(value, context))
}

/// True when the value contains at least one alphabetic character.
pub fn has_letter(value: &str) -> bool {
    value.chars().any(char::is_alphabetic)
}
