use std::cmp::Ordering;
use std::collections::BTreeSet;

use proptest::prelude::*;
use scrub_core::{compare_cells, find_duplicate_groups, fix_all, sort_rows};
use scrub_model::Row;

const COLUMNS: &[&str] = &["Full Name", "email", "phone", "state", "price", "start_date", "city"];

fn columns() -> Vec<String> {
    COLUMNS.iter().map(|name| (*name).to_string()).collect()
}

fn cell() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("[MISSING]".to_string()),
        Just(String::new()),
        "[a-zA-Zßﬁéñİ]{1,8}( [a-zA-Zßﬁéñİ.]{1,6}){0,2}",
        "\\$?[0-9]{1,5}(\\.[0-9]{1,3})?",
        "[0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4}",
        "\\(?[0-9]{3}\\)?[ .-]?[0-9]{3}-?[0-9]{4}",
        "(ny|NY|new york|ca|Texas|zz)",
    ]
}

fn rows_strategy() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(prop::collection::vec(cell(), COLUMNS.len()), 0..12).prop_map(|table| {
        table
            .into_iter()
            .enumerate()
            .map(|(idx, values)| {
                Row::from_pairs(COLUMNS.iter().copied().zip(values)).with_original_index(idx)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn fix_all_is_idempotent(rows in rows_strategy()) {
        let columns = columns();
        let once = fix_all(&rows, &columns);
        prop_assert_eq!(fix_all(&once, &columns), once);
    }

    #[test]
    fn duplicate_groups_partition_rows(rows in rows_strategy()) {
        let groups = find_duplicate_groups(&rows, &columns());
        let mut seen = BTreeSet::new();
        for group in &groups {
            prop_assert!(group.len() >= 2);
            prop_assert!(group.rows.windows(2).all(|pair| pair[0] < pair[1]));
            for &idx in &group.rows {
                prop_assert!(idx < rows.len());
                prop_assert!(seen.insert(idx), "row {} in two groups", idx);
            }
        }
    }

    #[test]
    fn default_order_ignores_permutation(rows in rows_strategy(), seed in any::<u64>()) {
        let mut shuffled = rows.clone();
        let len = shuffled.len();
        if len > 1 {
            let mut state = seed;
            for idx in (1..len).rev() {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                shuffled.swap(idx, (state >> 33) as usize % (idx + 1));
            }
        }
        prop_assert_eq!(sort_rows(&shuffled, None), rows);
    }

    #[test]
    fn comparator_is_a_total_preorder(a in cell(), b in cell(), c in cell()) {
        prop_assert_eq!(compare_cells(&a, &b), compare_cells(&b, &a).reverse());
        if compare_cells(&a, &b) != Ordering::Greater && compare_cells(&b, &c) != Ordering::Greater {
            prop_assert_ne!(compare_cells(&a, &c), Ordering::Greater);
        }
    }
}
