//! Column-name roles.
//!
//! Detection and fixing both pick their rule from the column name. Short
//! keywords (`tel`, `end`, `dob`, ...) only match whole name tokens so that
//! `hotel` or `gender` are not mistaken for phone or date columns; long
//! keywords match anywhere in the lower-cased name.

/// Split a column name into lower-case tokens on punctuation, whitespace, and
/// camelCase boundaries (`startDate` -> `start`, `date`).
pub fn name_tokens(column: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;
    for ch in column.chars() {
        if !ch.is_alphanumeric() {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower && !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
        prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        current.extend(ch.to_lowercase());
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

fn contains_any(column: &str, needles: &[&str]) -> bool {
    let lower = column.to_lowercase();
    needles.iter().any(|needle| lower.contains(needle))
}

fn has_token(column: &str, wanted: &[&str]) -> bool {
    name_tokens(column)
        .iter()
        .any(|token| wanted.contains(&token.as_str()))
}

pub fn is_email_column(column: &str) -> bool {
    contains_any(column, &["email", "e-mail"])
}

pub fn is_phone_column(column: &str) -> bool {
    contains_any(column, &["phone", "mobile", "fax"]) || has_token(column, &["tel", "cell"])
}

const NOT_DATE_TOKENS: &[&str] = &["candidate", "update", "mandate", "validate"];

pub fn is_date_column(column: &str) -> bool {
    name_tokens(column).iter().any(|token| {
        matches!(
            token.as_str(),
            "date" | "dob" | "start" | "end" | "joined" | "birthday"
        ) || (token.ends_with("date") && !NOT_DATE_TOKENS.contains(&token.as_str()))
    })
}

pub fn is_currency_column(column: &str) -> bool {
    contains_any(column, &["price", "cost", "amount", "revenue", "salary"])
        || has_token(column, &["fee", "fees"])
}

/// `state`, `State Code`, `homeState`, or a column named exactly `st`.
pub fn is_state_column(column: &str) -> bool {
    column.trim().eq_ignore_ascii_case("st")
        || name_tokens(column)
            .iter()
            .any(|token| token.ends_with("state") && token != "estate")
}

pub fn is_url_column(column: &str) -> bool {
    contains_any(column, &["url", "website", "link", "homepage"])
}

/// Free-text columns whose values are names, places, roles, or categories.
pub fn is_text_column(column: &str) -> bool {
    contains_any(
        column,
        &[
            "name",
            "address",
            "street",
            "city",
            "town",
            "borough",
            "county",
            "country",
            "role",
            "title",
            "position",
            "job",
            "department",
            "category",
            "company",
            "employer",
            "organization",
            "occupation",
        ],
    ) || has_token(column, &["type", "dept", "org"])
}
