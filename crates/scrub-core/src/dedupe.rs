//! Exact and partial duplicate grouping.

use std::collections::{BTreeMap, BTreeSet};

use scrub_model::{DuplicateGroup, Row, is_placeholder};
use tracing::{debug, debug_span, trace};

/// Values shorter than this never form a partial-duplicate key.
pub const MIN_PARTIAL_KEY_LEN: usize = 3;

const FINGERPRINT_SEPARATOR: char = '\u{1f}';

fn fingerprint(row: &Row, columns: &[String]) -> String {
    let mut composite = String::new();
    for (pos, column) in columns.iter().enumerate() {
        if pos > 0 {
            composite.push(FINGERPRINT_SEPARATOR);
        }
        composite.push_str(&row.cell(column).trim().to_lowercase());
    }
    composite
}

/// Columns that identify a record on their own: email, phone, and name
/// columns other than last names.
pub fn partial_key_columns(columns: &[String]) -> Vec<&String> {
    columns
        .iter()
        .filter(|column| {
            let lower = column.to_lowercase();
            lower.contains("email")
                || lower.contains("phone")
                || (lower.contains("name") && !lower.contains("last"))
        })
        .collect()
}

/// Group row indices into duplicate groups.
///
/// Exact duplicates (every column equal after trim and lower-casing) are
/// grouped first. Remaining rows are then grouped per key column from
/// [`partial_key_columns`]. A row joins at most one group, and each group
/// lists its members in row order so the first is the original.
pub fn find_duplicate_groups(rows: &[Row], columns: &[String]) -> Vec<DuplicateGroup> {
    let span = debug_span!("find_duplicate_groups", rows = rows.len(), columns = columns.len());
    let _enter = span.enter();

    let mut groups = Vec::new();
    let mut processed = vec![false; rows.len()];

    let mut by_fingerprint: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (idx, row) in rows.iter().enumerate() {
        by_fingerprint
            .entry(fingerprint(row, columns))
            .or_default()
            .push(idx);
    }
    let mut exact: Vec<Vec<usize>> = by_fingerprint
        .into_values()
        .filter(|members| members.len() >= 2)
        .collect();
    exact.sort_by_key(|members| members[0]);
    for members in exact {
        for &idx in &members {
            processed[idx] = true;
        }
        trace!(members = ?members, "exact duplicate group");
        groups.push(DuplicateGroup::exact(members));
    }
    let exact_count = groups.len();

    for column in partial_key_columns(columns) {
        let mut by_value: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (idx, row) in rows.iter().enumerate() {
            if processed[idx] {
                continue;
            }
            let value = row.cell(column).trim();
            if value.chars().count() < MIN_PARTIAL_KEY_LEN || is_placeholder(value) {
                continue;
            }
            by_value.entry(value.to_lowercase()).or_default().push(idx);
        }
        let mut partial: Vec<Vec<usize>> = by_value
            .into_values()
            .filter(|members| members.len() >= 2)
            .collect();
        partial.sort_by_key(|members| members[0]);
        for members in partial {
            for &idx in &members {
                processed[idx] = true;
            }
            trace!(column = %column, members = ?members, "partial duplicate group");
            groups.push(DuplicateGroup::partial(column.clone(), members));
        }
    }

    debug!(
        exact = exact_count,
        partial = groups.len() - exact_count,
        "duplicate grouping complete"
    );
    groups
}

/// Drop the copies of every exact duplicate group, keeping originals.
///
/// Partial groups are reported by [`find_duplicate_groups`] but never
/// removed here.
pub fn remove_exact_duplicates(rows: &[Row], columns: &[String]) -> Vec<Row> {
    let copies: BTreeSet<usize> = find_duplicate_groups(rows, columns)
        .iter()
        .filter(|group| group.is_exact())
        .flat_map(|group| group.copies().iter().copied())
        .collect();
    debug!(removed = copies.len(), "removing exact duplicates");
    rows.iter()
        .enumerate()
        .filter(|(idx, _)| !copies.contains(idx))
        .map(|(_, row)| row.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrub_model::DuplicateKind;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn exact_groups_ignore_case_and_padding() {
        let rows = vec![
            Row::from_pairs([("email", "A@B.com")]),
            Row::from_pairs([("email", " a@b.com ")]),
            Row::from_pairs([("email", "c@d.com")]),
        ];
        let groups = find_duplicate_groups(&rows, &columns(&["email"]));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].rows, vec![0, 1]);
        assert!(groups[0].is_exact());
    }

    #[test]
    fn partial_groups_skip_processed_rows() {
        let cols = columns(&["name", "email", "city"]);
        let rows = vec![
            Row::from_pairs([("name", "Ann"), ("email", "ann@x.io"), ("city", "Boston")]),
            Row::from_pairs([("name", "Ann"), ("email", "ann@x.io"), ("city", "Boston")]),
            Row::from_pairs([("name", "Bob"), ("email", "ann@x.io"), ("city", "Quincy")]),
            Row::from_pairs([("name", "Bob"), ("email", "bob@x.io"), ("city", "Salem")]),
        ];
        let groups = find_duplicate_groups(&rows, &cols);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].rows, vec![0, 1]);
        assert_eq!(
            groups[1].kind,
            DuplicateKind::Partial {
                column: "name".to_string()
            }
        );
        assert_eq!(groups[1].rows, vec![2, 3]);
    }

    #[test]
    fn short_and_placeholder_keys_are_skipped() {
        let cols = columns(&["phone", "id"]);
        let rows = vec![
            Row::from_pairs([("phone", "[MISSING]"), ("id", "1")]),
            Row::from_pairs([("phone", "[MISSING]"), ("id", "2")]),
            Row::from_pairs([("phone", "12"), ("id", "3")]),
            Row::from_pairs([("phone", "12"), ("id", "4")]),
        ];
        assert!(find_duplicate_groups(&rows, &cols).is_empty());
    }

    #[test]
    fn last_name_columns_are_not_keys() {
        let cols = columns(&["first_name", "last_name", "EMAIL", "Phone"]);
        let keys: Vec<&str> = partial_key_columns(&cols)
            .into_iter()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["first_name", "EMAIL", "Phone"]);
    }

    #[test]
    fn removal_keeps_partial_duplicates() {
        let cols = columns(&["email", "note"]);
        let rows = vec![
            Row::from_pairs([("email", "a@b.com"), ("note", "x")]),
            Row::from_pairs([("email", "a@b.com"), ("note", "x")]),
            Row::from_pairs([("email", "c@d.com"), ("note", "y")]),
            Row::from_pairs([("email", "c@d.com"), ("note", "z")]),
        ];
        let kept = remove_exact_duplicates(&rows, &cols);
        assert_eq!(kept.len(), 3);
        assert_eq!(kept[0].cell("note"), "x");
        assert_eq!(kept[1].cell("note"), "y");
        assert_eq!(kept[2].cell("note"), "z");
    }
}
