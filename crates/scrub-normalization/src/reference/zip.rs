//! ZIP code to city/state lookup.
//!
//! Dense for Manhattan and Brooklyn, sparse elsewhere. A ZIP that is not in
//! the table is a normal "no match", not an error.

use std::collections::HashMap;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZipLocation {
    pub city: &'static str,
    pub state: &'static str,
}

const MANHATTAN_RANGES: &[(u32, u32)] = &[(10001, 10041), (10044, 10045), (10055, 10055)];
const MANHATTAN_EXTRA: &[u32] = &[
    10065, 10069, 10075, 10103, 10110, 10111, 10112, 10115, 10118, 10119, 10128, 10152, 10153,
    10154, 10162, 10165, 10167, 10168, 10169, 10170, 10171, 10172, 10173, 10174, 10177, 10199,
    10271, 10278, 10279, 10280, 10281, 10282,
];
const BROOKLYN_RANGE: (u32, u32) = (11201, 11239);

const SPARSE: &[(&str, &str, &str)] = &[
    ("02108", "Boston", "MA"),
    ("02109", "Boston", "MA"),
    ("02110", "Boston", "MA"),
    ("02111", "Boston", "MA"),
    ("02113", "Boston", "MA"),
    ("02114", "Boston", "MA"),
    ("02115", "Boston", "MA"),
    ("02116", "Boston", "MA"),
    ("02138", "Cambridge", "MA"),
    ("02169", "Quincy", "MA"),
    ("07302", "Jersey City", "NJ"),
    ("10451", "Bronx", "NY"),
    ("11101", "Long Island City", "NY"),
    ("10301", "Staten Island", "NY"),
    ("19103", "Philadelphia", "PA"),
    ("20001", "Washington", "DC"),
    ("30303", "Atlanta", "GA"),
    ("33131", "Miami", "FL"),
    ("60601", "Chicago", "IL"),
    ("75201", "Dallas", "TX"),
    ("77002", "Houston", "TX"),
    ("80202", "Denver", "CO"),
    ("85004", "Phoenix", "AZ"),
    ("90012", "Los Angeles", "CA"),
    ("94103", "San Francisco", "CA"),
    ("98101", "Seattle", "WA"),
];

static ZIP_LOOKUP: LazyLock<HashMap<String, ZipLocation>> = LazyLock::new(|| {
    let mut table = HashMap::new();
    let manhattan = ZipLocation {
        city: "New York",
        state: "NY",
    };
    for (start, end) in MANHATTAN_RANGES {
        for zip in *start..=*end {
            table.insert(format!("{zip:05}"), manhattan);
        }
    }
    for zip in MANHATTAN_EXTRA {
        table.insert(format!("{zip:05}"), manhattan);
    }
    let brooklyn = ZipLocation {
        city: "Brooklyn",
        state: "NY",
    };
    for zip in BROOKLYN_RANGE.0..=BROOKLYN_RANGE.1 {
        table.insert(format!("{zip:05}"), brooklyn);
    }
    for (zip, city, state) in SPARSE {
        table.insert(
            (*zip).to_string(),
            ZipLocation {
                city: *city,
                state: *state,
            },
        );
    }
    table
});

/// Look up a 5-digit ZIP, or the first five digits of a ZIP+4.
pub fn lookup_zip(zip: &str) -> Option<ZipLocation> {
    let digits: String = zip.chars().filter(char::is_ascii_digit).take(5).collect();
    if digits.len() != 5 {
        return None;
    }
    ZIP_LOOKUP.get(&digits).copied()
}
