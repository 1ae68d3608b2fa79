//! US state codes and names (50 states plus DC).

use std::collections::HashMap;
use std::sync::LazyLock;

/// `(code, full name)` for every state and the District of Columbia.
pub const US_STATES: &[(&str, &str)] = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("DC", "District of Columbia"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
];

/// Lower-cased full name to two-letter code.
static STATE_NAME_TO_CODE: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    US_STATES
        .iter()
        .map(|(code, name)| (name.to_lowercase(), *code))
        .collect()
});

/// Returns true if `code` is a valid two-letter code (case-sensitive, upper).
pub fn is_valid_state_code(code: &str) -> bool {
    US_STATES.iter().any(|(known, _)| *known == code)
}

/// Two-letter code for a full state name, ignoring case and surrounding space.
pub fn state_code_for_name(name: &str) -> Option<&'static str> {
    let key = name.split_whitespace().collect::<Vec<_>>().join(" ");
    STATE_NAME_TO_CODE.get(&key.to_lowercase()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_fifty_states_and_dc() {
        assert_eq!(US_STATES.len(), 51);
        assert!(is_valid_state_code("DC"));
        assert!(!is_valid_state_code("ZZ"));
        assert!(!is_valid_state_code("ny"));
    }

    #[test]
    fn full_names_map_to_codes() {
        assert_eq!(state_code_for_name("new  york"), Some("NY"));
        assert_eq!(state_code_for_name(" Massachusetts "), Some("MA"));
        assert_eq!(state_code_for_name("Atlantis"), None);
    }
}
