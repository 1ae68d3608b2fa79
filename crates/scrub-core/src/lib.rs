//! Row-level operations of the cleaning engine: fixing, duplicate grouping,
//! column splitting, ordering, and column profiling.
//!
//! Every function takes rows by reference and returns new data; nothing here
//! keeps state between calls.

pub mod dedupe;
pub mod fix;
pub mod profile;
pub mod sort;
pub mod split;

pub use dedupe::{find_duplicate_groups, partial_key_columns, remove_exact_duplicates};
pub use fix::{FixMode, apply_fixes, fix_all, fix_row, fix_rows, fix_value};
pub use profile::{ColumnProfile, profile_columns};
pub use sort::{compare_cells, compare_rows, natural_cmp, sort_rows};
pub use split::{
    SplitOutcome, apply_split, get_splittable_type, parse_address, parse_full_name,
    smart_split_column, split_column_names,
};
