use scrub_model::{ColumnContext, Row, SplitType};
use scrub_normalization::column_context;
use serde::Serialize;

use crate::split::get_splittable_type;

/// What the engine infers about one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnProfile {
    pub column: String,
    pub context: ColumnContext,
    pub split_type: SplitType,
    /// Cells that are blank or hold a placeholder.
    pub blank_count: usize,
}

/// Inferred context and split type for every column, in column order.
pub fn profile_columns(rows: &[Row], columns: &[String]) -> Vec<ColumnProfile> {
    columns
        .iter()
        .map(|column| {
            let values: Vec<&str> = rows.iter().map(|row| row.cell(column)).collect();
            ColumnProfile {
                column: column.clone(),
                context: column_context(rows, column),
                split_type: get_splittable_type(&values),
                blank_count: values
                    .iter()
                    .filter(|value| scrub_model::is_blank(value))
                    .count(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_each_column() {
        let names = ["Ann Lee", "Bo Li", "Carl Jung", "Dee Ray", "Eve Moss"];
        let rows: Vec<Row> = names
            .iter()
            .map(|name| Row::from_pairs([("name", *name), ("home_city", "[MISSING]")]))
            .collect();
        let columns = vec!["name".to_string(), "home_city".to_string()];
        let profiles = profile_columns(&rows, &columns);
        assert_eq!(profiles[0].split_type, SplitType::Name);
        assert_eq!(profiles[0].context, ColumnContext::General);
        assert_eq!(profiles[1].context, ColumnContext::City);
        assert_eq!(profiles[1].blank_count, 5);
    }
}
