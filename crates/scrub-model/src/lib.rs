pub mod components;
pub mod context;
pub mod duplicate;
pub mod error;
pub mod issue;
pub mod row;
pub mod sort;

pub use components::{AddressComponents, NameComponents, SplitComponents, SplitType};
pub use context::ColumnContext;
pub use duplicate::{DuplicateGroup, DuplicateKind};
pub use error::ScrubError;
pub use issue::{ALL_COLUMNS, Issue, IssueSummary, IssueType, issues_for_row};
pub use row::{MISSING, Row, is_blank, is_placeholder};
pub use sort::{SortConfig, SortDirection};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_summary_counts() {
        let issues = vec![
            Issue::new(0, "email", IssueType::Duplicate, "Original"),
            Issue::new(1, "email", IssueType::Duplicate, "Duplicate Row"),
            Issue::new(1, "price", IssueType::Format, "Standardize Currency"),
        ];
        let summary = IssueSummary::from_issues(&issues);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.count(IssueType::Duplicate), 2);
        assert_eq!(summary.count(IssueType::Missing), 0);
        assert_eq!(summary.by_column.get("email"), Some(&2));
        assert_eq!(summary.rows_affected, 2);
    }

    #[test]
    fn issue_serializes_camel_case() {
        let issue = Issue::new(3, "state", IssueType::Validity, "Invalid State");
        let json = serde_json::to_string(&issue).expect("serialize issue");
        assert!(json.contains("\"rowId\":3"));
        assert!(json.contains("\"issueType\":\"VALIDITY\""));
        let round: Issue = serde_json::from_str(&json).expect("deserialize issue");
        assert_eq!(round, issue);
    }

    #[test]
    fn enum_parsing_reports_unknown_values() {
        assert_eq!("address".parse::<SplitType>().ok(), Some(SplitType::Address));
        assert_eq!("VALIDITY".parse::<IssueType>().ok(), Some(IssueType::Validity));
        let err = "sideways".parse::<SortDirection>().expect_err("unknown direction");
        assert_eq!(err.to_string(), "unknown sort direction: sideways");
        assert!(matches!(
            "fuzzy".parse::<IssueType>(),
            Err(ScrubError::UnknownIssueType(_))
        ));
    }
}
