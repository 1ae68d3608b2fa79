//! Postal address parsing as an ordered chain of strategies.
//!
//! Every strategy gets the trimmed input and either produces components or
//! passes. The first strategy that produces components wins; if none does,
//! the raw text is kept as the street and every other field is missing.
//! Input length is bounded before any pattern runs.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use scrub_model::{AddressComponents, MISSING};
use scrub_normalization::reference::STREET_SUFFIXES;
use scrub_normalization::{ZipLocation, collapse_whitespace, is_valid_state_code, lookup_zip, to_title_case};
use tracing::trace;

/// Shortest address the parser attempts.
pub const MIN_ADDRESS_LEN: usize = 5;
/// Longest address the parser attempts.
pub const MAX_ADDRESS_LEN: usize = 200;

/// A trailing 5-digit ZIP or ZIP+4.
pub(crate) static TRAILING_ZIP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{5}(?:-?\d{4})?)\s*$").expect("Invalid trailing ZIP regex")
});

static ANY_ZIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{5}(?:-\d{4})?)\b").expect("Invalid ZIP regex"));

/// `<street ending in a suffix> [city] <ST> <zip>`.
static SUFFIX_ANCHORED: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"^(.+\b(?:{})\b\.?)(?:[\s,]+(.*?))?[\s,]+([a-z]{{2}})[\s,]+(\d{{5}}(?:-?\d{{4}})?)\s*$",
        STREET_SUFFIXES.join("|")
    );
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .expect("Invalid suffix-anchored address regex")
});

/// `<street> <one-word city> <ST> <zip>` with a lazy street.
static SINGLE_TOKEN_CITY: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"^(.+?)[\s,]+([a-z]+)[\s,]+([a-z]{2})[\s,]+(\d{5}(?:-?\d{4})?)\s*$")
        .case_insensitive(true)
        .build()
        .expect("Invalid single-token city regex")
});

type Strategy = fn(&str) -> Option<AddressComponents>;

const STRATEGIES: &[(&str, Strategy)] = &[("zip-anchor", zip_anchor), ("comma", comma_delimited)];

fn or_missing(value: &str) -> String {
    if value.trim().is_empty() {
        MISSING.to_string()
    } else {
        value.trim().to_string()
    }
}

fn build(street: &str, city: &str, state: &str, zip: &str) -> AddressComponents {
    AddressComponents {
        street: or_missing(&to_title_case(street)),
        city: or_missing(&to_title_case(city)),
        state: or_missing(&state.to_uppercase()),
        zip: or_missing(zip),
    }
}

struct SuffixMatch<'a> {
    street: &'a str,
    city: Option<&'a str>,
    state: &'a str,
}

fn suffix_anchored(raw: &str) -> Option<SuffixMatch<'_>> {
    let captures = SUFFIX_ANCHORED.captures(raw)?;
    Some(SuffixMatch {
        street: captures.get(1)?.as_str(),
        city: captures
            .get(2)
            .map(|city| city.as_str().trim())
            .filter(|city| !city.trim().is_empty()),
        state: captures.get(3)?.as_str(),
    })
}

/// Strip the ZIP and the lookup's city and state from the text and keep the
/// rest as street.
fn strip_known_location(before_zip: &str, location: ZipLocation) -> String {
    let mut remainder = before_zip.to_string();
    for needle in [location.city, location.state] {
        let pattern = format!(r"\b{}\b", regex::escape(needle));
        if let Ok(word) = RegexBuilder::new(&pattern).case_insensitive(true).build() {
            remainder = word.replace_all(&remainder, " ").into_owned();
        }
    }
    let parts: Vec<String> = remainder
        .split(',')
        .map(collapse_whitespace)
        .filter(|part| !part.is_empty())
        .collect();
    parts.join(", ")
}

fn zip_anchor(raw: &str) -> Option<AddressComponents> {
    let zip_match = TRAILING_ZIP.captures(raw)?.get(1)?;
    let zip = zip_match.as_str();

    if let Some(location) = lookup_zip(zip) {
        let street = match suffix_anchored(raw) {
            Some(found) => found.street.to_string(),
            None => strip_known_location(&raw[..zip_match.start()], location),
        };
        return Some(build(&street, location.city, location.state, zip));
    }

    if let Some(found) = suffix_anchored(raw)
        && is_valid_state_code(&found.state.to_uppercase())
    {
        return Some(build(found.street, found.city.unwrap_or(""), found.state, zip));
    }

    let captures = SINGLE_TOKEN_CITY.captures(raw)?;
    let state = captures.get(3)?.as_str();
    if !is_valid_state_code(&state.to_uppercase()) {
        return None;
    }
    Some(build(
        captures.get(1)?.as_str(),
        captures.get(2)?.as_str(),
        state,
        zip,
    ))
}

fn comma_delimited(raw: &str) -> Option<AddressComponents> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    if parts.len() < 3 {
        return None;
    }
    let last = parts[parts.len() - 1];
    let state: String = last.chars().take(2).collect();
    let city = parts[parts.len() - 2];
    let street = parts[..parts.len() - 2].join(", ");
    let zip = ANY_ZIP
        .captures(raw)
        .and_then(|captures| captures.get(1))
        .map_or(MISSING, |found| found.as_str());
    Some(build(&street, city, &state, zip))
}

/// Parse a free-text US address into street, city, state, and ZIP.
///
/// A trailing ZIP found in the lookup table decides city and state, even
/// when the text names a different city. Input outside
/// [`MIN_ADDRESS_LEN`]..=[`MAX_ADDRESS_LEN`] characters is not parsed.
pub fn parse_address(raw: &str) -> AddressComponents {
    let trimmed = raw.trim();
    let len = trimmed.chars().count();
    if !(MIN_ADDRESS_LEN..=MAX_ADDRESS_LEN).contains(&len) {
        return AddressComponents::unresolved(raw);
    }
    for (name, strategy) in STRATEGIES {
        if let Some(components) = strategy(trimmed) {
            trace!(strategy = name, "address parsed");
            return components;
        }
    }
    AddressComponents::unresolved(raw)
}
