use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use scrub_model::NameComponents;
use scrub_normalization::to_title_case;

static HONORIFIC: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"^(?:mrs|mr|ms|dr|prof)\.?\s+")
        .case_insensitive(true)
        .build()
        .expect("Invalid honorific regex")
});

/// Split a full name into first, middle, and last.
///
/// A leading honorific is dropped. A single word becomes the first name with
/// an empty last name. Returns `None` for input shorter than two characters.
pub fn parse_full_name(raw: &str) -> Option<NameComponents> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < 2 {
        return None;
    }
    let without_title = HONORIFIC.replace(trimmed, "");
    let tokens: Vec<&str> = without_title.split_whitespace().collect();
    let (first, rest) = tokens.split_first()?;
    let (last, middle) = match rest.split_last() {
        Some((last, middle)) => (*last, middle.join(" ")),
        None => ("", String::new()),
    };
    let first = to_title_case(first);
    if first.is_empty() {
        return None;
    }
    Some(NameComponents {
        first,
        middle: to_title_case(&middle),
        last: to_title_case(last),
    })
}
