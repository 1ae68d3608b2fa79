//! Column-name rules for FORMAT and VALIDITY issues.
//!
//! Rules are tried in [`CELL_RULES`] order and the first whose predicate
//! claims the column decides the cell, so a cell gets at most one finding.

use scrub_model::{ColumnContext, IssueType};
use scrub_normalization::{
    has_currency_symbol, has_letter, is_currency_column, is_date_column, is_email_column,
    is_formatted_phone, is_iso_date, is_phone_column, is_state_column, is_two_decimal_amount,
    is_url_column, is_valid_state_code, is_valid_url, normalize_text, state_code_for_name,
};

pub const STANDARDIZE_PHONE: &str = "Standardize Phone";
pub const USE_ISO_DATE: &str = "Use YYYY-MM-DD";
pub const STANDARDIZE_CURRENCY: &str = "Standardize Currency";
pub const INVALID_STATE: &str = "Invalid State";
pub const USE_STATE_CODE: &str = "Use 2-letter Code";
pub const FIX_URL: &str = "Fix URL";
pub const FIX_CASING: &str = "Fix Casing/Abbr";

/// Issue produced by a rule for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding {
    pub issue_type: IssueType,
    pub suggestion: &'static str,
}

impl Finding {
    const fn format(suggestion: &'static str) -> Self {
        Self {
            issue_type: IssueType::Format,
            suggestion,
        }
    }
}

/// A cell handed to a rule: the trimmed value plus its column and context.
#[derive(Debug, Clone, Copy)]
pub struct Cell<'a> {
    pub column: &'a str,
    pub value: &'a str,
    pub context: ColumnContext,
}

pub struct CellRule {
    pub name: &'static str,
    pub applies: fn(&str) -> bool,
    pub check: fn(&Cell<'_>) -> Option<Finding>,
}

fn any_column(_column: &str) -> bool {
    true
}

fn check_phone(cell: &Cell<'_>) -> Option<Finding> {
    (!is_formatted_phone(cell.value)).then_some(Finding::format(STANDARDIZE_PHONE))
}

fn check_date(cell: &Cell<'_>) -> Option<Finding> {
    (!is_iso_date(cell.value)).then_some(Finding::format(USE_ISO_DATE))
}

fn check_currency(cell: &Cell<'_>) -> Option<Finding> {
    (has_currency_symbol(cell.value) || !is_two_decimal_amount(cell.value))
        .then_some(Finding::format(STANDARDIZE_CURRENCY))
}

fn check_state(cell: &Cell<'_>) -> Option<Finding> {
    let value = cell.value;
    let letters = value.chars().count();
    if letters == 2 && value.chars().all(char::is_alphabetic) {
        let upper = value.to_uppercase();
        if !is_valid_state_code(&upper) {
            return Some(Finding {
                issue_type: IssueType::Validity,
                suggestion: INVALID_STATE,
            });
        }
        return (upper != value).then_some(Finding::format(USE_STATE_CODE));
    }
    (letters > 2 && state_code_for_name(value).is_some()).then_some(Finding::format(USE_STATE_CODE))
}

fn check_url(cell: &Cell<'_>) -> Option<Finding> {
    (!is_valid_url(cell.value)).then_some(Finding::format(FIX_URL))
}

fn check_text(cell: &Cell<'_>) -> Option<Finding> {
    if !has_letter(cell.value) {
        return None;
    }
    let normalized = if is_email_column(cell.column) {
        cell.value.to_lowercase()
    } else {
        normalize_text(cell.value, cell.context)
    };
    (normalized != cell.value).then_some(Finding::format(FIX_CASING))
}

/// Cell rules in precedence order. The last rule claims every column.
pub const CELL_RULES: &[CellRule] = &[
    CellRule {
        name: "phone",
        applies: is_phone_column,
        check: check_phone,
    },
    CellRule {
        name: "date",
        applies: is_date_column,
        check: check_date,
    },
    CellRule {
        name: "currency",
        applies: is_currency_column,
        check: check_currency,
    },
    CellRule {
        name: "state",
        applies: is_state_column,
        check: check_state,
    },
    CellRule {
        name: "url",
        applies: is_url_column,
        check: check_url,
    },
    CellRule {
        name: "text",
        applies: any_column,
        check: check_text,
    },
];

/// The rule that claims `column`.
pub fn rule_for(column: &str) -> &'static CellRule {
    CELL_RULES
        .iter()
        .find(|rule| (rule.applies)(column))
        .unwrap_or(&CELL_RULES[CELL_RULES.len() - 1])
}

/// Run the claiming rule on a non-missing cell.
pub fn check_cell(cell: &Cell<'_>) -> Option<Finding> {
    (rule_for(cell.column).check)(cell)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(column: &str, value: &str) -> Option<(IssueType, &'static str)> {
        check_cell(&Cell {
            column,
            value,
            context: ColumnContext::General,
        })
        .map(|finding| (finding.issue_type, finding.suggestion))
    }

    #[test]
    fn phone_and_date() {
        assert_eq!(check("phone", "555-123-4567"), Some((IssueType::Format, STANDARDIZE_PHONE)));
        assert_eq!(check("phone", "(555) 123-4567"), None);
        assert_eq!(check("dob", "1/2/1990"), Some((IssueType::Format, USE_ISO_DATE)));
        assert_eq!(check("dob", "1990-01-02"), None);
    }

    #[test]
    fn currency() {
        assert_eq!(check("price", "1000"), Some((IssueType::Format, STANDARDIZE_CURRENCY)));
        assert_eq!(check("price", "$10.00"), Some((IssueType::Format, STANDARDIZE_CURRENCY)));
        assert_eq!(check("price", "10.00"), None);
        assert_eq!(check("price", "-3.50"), None);
    }

    #[test]
    fn state() {
        assert_eq!(check("state", "ZZ"), Some((IssueType::Validity, INVALID_STATE)));
        assert_eq!(check("state", "ny"), Some((IssueType::Format, USE_STATE_CODE)));
        assert_eq!(check("state", "Ohio"), Some((IssueType::Format, USE_STATE_CODE)));
        assert_eq!(check("state", "NY"), None);
        assert_eq!(check("state", "Narnia"), None);
    }

    #[test]
    fn url() {
        assert_eq!(check("website", "example.com"), Some((IssueType::Format, FIX_URL)));
        assert_eq!(check("website", "https://example.com"), None);
    }

    #[test]
    fn text_and_email() {
        assert_eq!(check("name", "ann lee"), Some((IssueType::Format, FIX_CASING)));
        assert_eq!(check("name", "Ann Lee"), None);
        assert_eq!(check("notes", "12 main st"), Some((IssueType::Format, FIX_CASING)));
        assert_eq!(check("notes", "12345"), None);
        assert_eq!(check("email", "A@B.com"), Some((IssueType::Format, FIX_CASING)));
        assert_eq!(check("email", "a@b.com"), None);
    }

    #[test]
    fn first_matching_rule_claims_the_cell() {
        // A date column never reaches the text rule.
        assert_eq!(check("start", "2024-01-01"), None);
        assert_eq!(rule_for("Mobile Phone").name, "phone");
        assert_eq!(rule_for("comments").name, "text");
    }
}
