//! Abbreviation dictionaries used by [`crate::apply_dictionary`].
//!
//! Keys are lower-case without periods. No expansion contains a word that is
//! itself a key, so expanding twice is the same as expanding once.

use std::collections::HashMap;
use std::sync::LazyLock;

/// City-name abbreviations, applied only in city columns.
pub const CITY_ABBREVIATIONS: &[(&str, &str)] = &[
    ("nyc", "New York City"),
    ("la", "Los Angeles"),
    ("sf", "San Francisco"),
    ("philly", "Philadelphia"),
    ("bklyn", "Brooklyn"),
    ("lv", "Las Vegas"),
    ("st", "Saint"),
    ("ste", "Sainte"),
    ("ft", "Fort"),
    ("mt", "Mount"),
];

/// Street suffixes and job-title abbreviations, applied everywhere.
///
/// `dr` is left out: it is as often "Doctor" as "Drive".
pub const GENERAL_ABBREVIATIONS: &[(&str, &str)] = &[
    ("st", "Street"),
    ("ave", "Avenue"),
    ("av", "Avenue"),
    ("rd", "Road"),
    ("blvd", "Boulevard"),
    ("ln", "Lane"),
    ("ct", "Court"),
    ("hwy", "Highway"),
    ("pkwy", "Parkway"),
    ("pl", "Place"),
    ("sq", "Square"),
    ("ter", "Terrace"),
    ("cir", "Circle"),
    ("apt", "Apartment"),
    ("ste", "Suite"),
    ("mgr", "Manager"),
    ("eng", "Engineer"),
    ("engr", "Engineer"),
    ("dev", "Developer"),
    ("asst", "Assistant"),
    ("dir", "Director"),
    ("vp", "Vice President"),
    ("admin", "Administrator"),
    ("coord", "Coordinator"),
    ("rep", "Representative"),
    ("tech", "Technician"),
    ("dept", "Department"),
    ("acct", "Accountant"),
];

static CITY_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| CITY_ABBREVIATIONS.iter().copied().collect());

static GENERAL_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| GENERAL_ABBREVIATIONS.iter().copied().collect());

fn lookup_key(token: &str) -> String {
    token.replace('.', "").to_lowercase()
}

pub fn expand_city_abbreviation(token: &str) -> Option<&'static str> {
    CITY_TABLE.get(lookup_key(token).as_str()).copied()
}

pub fn expand_general_abbreviation(token: &str) -> Option<&'static str> {
    GENERAL_TABLE.get(lookup_key(token).as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case_and_periods() {
        assert_eq!(expand_general_abbreviation("St."), Some("Street"));
        assert_eq!(expand_general_abbreviation("BLVD"), Some("Boulevard"));
        assert_eq!(expand_city_abbreviation("N.Y.C."), Some("New York City"));
        assert_eq!(expand_general_abbreviation("Main"), None);
    }

    #[test]
    fn expansions_never_contain_keys() {
        let expansions = CITY_ABBREVIATIONS
            .iter()
            .chain(GENERAL_ABBREVIATIONS.iter())
            .flat_map(|(_, expansion)| expansion.split_whitespace());
        for word in expansions {
            assert!(
                expand_city_abbreviation(word).is_none(),
                "{word} re-expands as a city abbreviation"
            );
            assert!(
                expand_general_abbreviation(word).is_none(),
                "{word} re-expands as a general abbreviation"
            );
        }
    }
}
