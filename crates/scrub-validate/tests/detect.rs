use proptest::prelude::*;
use scrub_core::{fix_all, fix_rows};
use scrub_model::{Issue, IssueType, Row};
use scrub_validate::detect;

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

fn listing(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(|issue| {
            format!(
                "{} {} {} {}",
                issue.row_id, issue.column, issue.issue_type, issue.suggestion
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn sample_table() -> (Vec<Row>, Vec<String>) {
    let cols = columns(&["name", "email", "phone", "state", "price", "joined"]);
    let rows = vec![
        Row::from_pairs([
            ("name", "ann lee"),
            ("email", "ann@x.io"),
            ("phone", "555.123.4567"),
            ("state", "ny"),
            ("price", "1000"),
            ("joined", "1/5/2024"),
        ]),
        Row::from_pairs([
            ("name", "Bo Li"),
            ("email", "BO@X.IO"),
            ("phone", "(555) 987-6543"),
            ("state", "ZZ"),
            ("price", "12.50"),
            ("joined", "2024-02-01"),
        ]),
        Row::from_pairs([
            ("name", "Bo Li"),
            ("email", "[MISSING]"),
            ("phone", "n/a"),
            ("state", "California"),
            ("price", "$7"),
            ("joined", "2024-02-02"),
        ]),
    ];
    (rows, cols)
}

#[test]
fn sample_table_issues() {
    let (rows, cols) = sample_table();
    let issues = detect(&rows, &cols);
    insta::assert_snapshot!(listing(&issues), @r"
    1 name DUPLICATE Original
    2 name DUPLICATE Duplicate Row
    0 name FORMAT Fix Casing/Abbr
    0 phone FORMAT Standardize Phone
    0 state FORMAT Use 2-letter Code
    0 price FORMAT Standardize Currency
    0 joined FORMAT Use YYYY-MM-DD
    1 email FORMAT Fix Casing/Abbr
    1 state VALIDITY Invalid State
    2 email MISSING Fill Missing Value
    2 phone MISSING Fill Missing Value
    2 state FORMAT Use 2-letter Code
    2 price FORMAT Standardize Currency
    ");
}

#[test]
fn targeted_fix_clears_format_issues() {
    let (rows, cols) = sample_table();
    let issues = detect(&rows, &cols);
    let fixed = fix_rows(&rows, &cols, &issues);
    let remaining = detect(&fixed, &cols);
    assert!(
        remaining
            .iter()
            .all(|issue| issue.issue_type != IssueType::Format),
        "{remaining:?}"
    );
    assert_eq!(fixed[0].cell("price"), "1000.00");
    assert_eq!(fixed[0].cell("joined"), "2024-01-05");
    assert_eq!(fixed[2].cell("state"), "CA");
    assert_eq!(fixed[1].cell("state"), "ZZ");
}

#[test]
fn duplicate_issue_survives_fixing() {
    let cols = columns(&["email"]);
    let rows = vec![
        Row::from_pairs([("email", "A@B.com")]),
        Row::from_pairs([("email", "a@b.com")]),
    ];
    let before = detect(&rows, &cols);
    assert_eq!(
        before
            .iter()
            .filter(|issue| issue.issue_type == IssueType::Duplicate)
            .count(),
        2
    );
    let fixed = fix_all(&rows, &cols);
    let after = detect(&fixed, &cols);
    assert_eq!(
        after,
        vec![
            Issue::new(0, "*", IssueType::Duplicate, "Original"),
            Issue::new(1, "*", IssueType::Duplicate, "Duplicate Row"),
        ]
    );
}

#[test]
fn price_without_decimals_is_flagged_then_fixed() {
    let cols = columns(&["price"]);
    let rows = vec![Row::from_pairs([("price", "1000")])];
    assert_eq!(
        detect(&rows, &cols),
        vec![Issue::new(0, "price", IssueType::Format, "Standardize Currency")]
    );
    let fixed = fix_all(&rows, &cols);
    assert_eq!(fixed[0].cell("price"), "1000.00");
    assert!(detect(&fixed, &cols).is_empty());
}

fn cell() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("[MISSING]".to_string()),
        "[a-zA-Z ]{0,10}",
        "[0-9$.,/-]{0,10}",
    ]
}

#[test]
fn bulk_fix_leaves_clean_url_columns_clean() {
    let cols = columns(&["company_website", "job_link"]);
    let rows = vec![Row::from_pairs([
        ("company_website", "https://acme.com/st/main"),
        ("job_link", "http://jobs.io/sr-eng"),
    ])];
    assert!(detect(&rows, &cols).is_empty());

    let fixed = fix_all(&rows, &cols);
    assert_eq!(fixed, rows);
    assert!(detect(&fixed, &cols).is_empty());
}

#[test]
fn bulk_fix_is_stable_on_expanding_letters() {
    let cols = columns(&["name"]);
    let rows = vec![Row::from_pairs([("name", "ßa lee")])];
    let once = fix_all(&rows, &cols);
    assert_eq!(once[0].cell("name"), "ßa Lee");
    assert_eq!(fix_all(&once, &cols), once);
    assert!(detect(&once, &cols).is_empty());
}

proptest! {
    #[test]
    fn detection_is_pure(values in prop::collection::vec((cell(), cell(), cell()), 0..10)) {
        let cols = columns(&["city", "amount", "email"]);
        let rows: Vec<Row> = values
            .into_iter()
            .map(|(city, amount, email)| {
                Row::from_pairs([("city", city), ("amount", amount), ("email", email)])
            })
            .collect();
        prop_assert_eq!(detect(&rows, &cols), detect(&rows, &cols));
    }

    #[test]
    fn cells_get_at_most_one_non_duplicate_issue(
        values in prop::collection::vec((cell(), cell()), 0..10)
    ) {
        let cols = columns(&["state", "start_date"]);
        let rows: Vec<Row> = values
            .into_iter()
            .map(|(state, start)| Row::from_pairs([("state", state), ("start_date", start)]))
            .collect();
        let issues = detect(&rows, &cols);
        let mut seen = std::collections::BTreeSet::new();
        for issue in issues.iter().filter(|issue| issue.issue_type != IssueType::Duplicate) {
            prop_assert!(seen.insert((issue.row_id, issue.column.clone())));
        }
    }
}
