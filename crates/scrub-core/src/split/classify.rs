//! Splittable-column classification.

use std::collections::BTreeSet;

use scrub_model::{SplitType, is_blank};
use scrub_normalization::reference::{BUSINESS_KEYWORDS, STREET_SUFFIXES};

use super::address::TRAILING_ZIP;

/// Values sampled from the start of a column.
pub const SPLIT_SAMPLE_SIZE: usize = 30;
/// Fewer non-empty samples than this never classify.
pub const MIN_SPLIT_SAMPLES: usize = 5;
/// Below this distinct-value ratio a column is categorical.
pub const MIN_UNIQUENESS: f64 = 0.7;
/// Share of address-like (or name-like) samples needed to classify.
pub const SPLIT_TYPE_RATIO: f64 = 0.4;

fn words(value: &str) -> impl Iterator<Item = String> + '_ {
    value
        .split(|ch: char| !ch.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
}

pub fn is_address_like(value: &str) -> bool {
    TRAILING_ZIP.is_match(value) || words(value).any(|word| STREET_SUFFIXES.contains(&word.as_str()))
}

pub fn is_name_like(value: &str) -> bool {
    if value.chars().any(|ch| ch.is_ascii_digit()) {
        return false;
    }
    let token_count = value.split_whitespace().count();
    (2..=3).contains(&token_count)
        && !words(value).any(|word| BUSINESS_KEYWORDS.contains(&word.as_str()))
}

/// Decide whether the values of a column can be split into addresses or
/// names.
pub fn get_splittable_type<S: AsRef<str>>(values: &[S]) -> SplitType {
    let sample: Vec<&str> = values
        .iter()
        .map(|value| value.as_ref().trim())
        .filter(|value| !is_blank(value))
        .take(SPLIT_SAMPLE_SIZE)
        .collect();
    if sample.len() < MIN_SPLIT_SAMPLES {
        return SplitType::None;
    }
    let total = sample.len() as f64;

    let distinct: BTreeSet<String> = sample.iter().map(|value| value.to_lowercase()).collect();
    if (distinct.len() as f64) / total < MIN_UNIQUENESS {
        return SplitType::None;
    }

    let addresses = sample.iter().filter(|value| is_address_like(value)).count();
    if addresses as f64 / total > SPLIT_TYPE_RATIO {
        return SplitType::Address;
    }
    let names = sample.iter().filter(|value| is_name_like(value)).count();
    if names as f64 / total > SPLIT_TYPE_RATIO {
        SplitType::Name
    } else {
        SplitType::None
    }
}
