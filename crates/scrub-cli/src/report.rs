//! Terminal tables for command results.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use scrub_core::{ColumnProfile, FixMode, SplitOutcome};
use scrub_model::{
    ColumnContext, DuplicateGroup, DuplicateKind, Issue, IssueSummary, IssueType, Row, SplitType,
};

use crate::commands::FixResult;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn issue_type_color(issue_type: IssueType) -> Color {
    match issue_type {
        IssueType::Missing => Color::Yellow,
        IssueType::Format => Color::Blue,
        IssueType::Duplicate => Color::Magenta,
        IssueType::Validity => Color::Red,
    }
}

fn issue_type_cell(issue_type: IssueType) -> Cell {
    Cell::new(issue_type.label()).fg(issue_type_color(issue_type))
}

/// Counts per issue type plus the total and the number of affected rows.
pub fn summary_table(summary: &IssueSummary, rows: usize, columns: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Issue type"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for issue_type in IssueType::all() {
        table.add_row(vec![
            issue_type_cell(*issue_type),
            count_cell(summary.count(*issue_type), issue_type_color(*issue_type)),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.total).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        dim_cell("Rows affected"),
        dim_cell(format!("{} / {rows}", summary.rows_affected)),
    ]);
    table.add_row(vec![dim_cell("Columns"), dim_cell(columns)]);
    table
}

/// One line per issue with the current cell value, at most `limit` lines.
pub fn issue_table(issues: &[Issue], rows: &[Row], limit: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Suggestion"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for issue in issues.iter().take(limit) {
        let value = rows
            .get(issue.row_id)
            .and_then(|row| row.get(&issue.column))
            .map_or_else(|| dim_cell("-"), Cell::new);
        table.add_row(vec![
            Cell::new(issue.row_id),
            Cell::new(&issue.column),
            issue_type_cell(issue.issue_type),
            Cell::new(&issue.suggestion),
            value,
        ]);
    }
    if issues.len() > limit {
        table.add_row(vec![
            dim_cell("..."),
            dim_cell(format!("{} more", issues.len() - limit)),
            dim_cell(""),
            dim_cell(""),
            dim_cell(""),
        ]);
    }
    table
}

pub fn duplicate_table(groups: &[DuplicateGroup]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Group"),
        header_cell("Match"),
        header_cell("Original"),
        header_cell("Copies"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (idx, group) in groups.iter().enumerate() {
        let kind = match &group.kind {
            DuplicateKind::Exact => Cell::new("exact").fg(Color::Magenta),
            DuplicateKind::Partial { column } => Cell::new(format!("partial ({column})")),
        };
        let copies: Vec<String> = group.copies().iter().map(ToString::to_string).collect();
        table.add_row(vec![
            Cell::new(idx + 1),
            kind,
            group.original().map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(copies.join(", ")),
        ]);
    }
    table
}

fn context_cell(context: ColumnContext) -> Cell {
    match context {
        ColumnContext::General => dim_cell(context.label()),
        _ => Cell::new(context.label()).fg(Color::Green),
    }
}

fn split_type_cell(split_type: SplitType) -> Cell {
    match split_type {
        SplitType::None => dim_cell(split_type.label()),
        _ => Cell::new(split_type.label())
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    }
}

pub fn profile_table(profiles: &[ColumnProfile], rows: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Context"),
        header_cell("Splittable"),
        header_cell("Blank"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for profile in profiles {
        table.add_row(vec![
            Cell::new(&profile.column),
            context_cell(profile.context),
            split_type_cell(profile.split_type),
            dim_cell(format!("{} / {rows}", profile.blank_count)),
        ]);
    }
    table
}

pub fn split_table(column: &str, outcome: &SplitOutcome) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Parsed"),
        header_cell("Incomplete"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(column),
        split_type_cell(outcome.split_type),
        count_cell(outcome.success_count, Color::Green),
        count_cell(outcome.fail_count, Color::Yellow),
    ]);
    table
}

/// Print the outcome of a fix run to stderr so stdout stays clean CSV.
pub fn print_fix_summary(result: &FixResult) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Fix"), header_cell("Value")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let mode = match result.mode {
        FixMode::Targeted => "targeted",
        FixMode::All => "all",
    };
    table.add_row(vec![Cell::new("Mode"), Cell::new(mode)]);
    table.add_row(vec![
        Cell::new("Cells changed"),
        count_cell(result.changed_cells, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Issues before"),
        Cell::new(result.issues_before),
    ]);
    table.add_row(vec![
        Cell::new("Issues after"),
        count_cell(result.issues_after, Color::Yellow),
    ]);
    eprintln!("{table}");
}
