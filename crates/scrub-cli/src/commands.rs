use std::io;
use std::path::Path;

use anyhow::{Context, Result, bail};
use scrub_core::{
    ColumnProfile, FixMode, SplitOutcome, apply_fixes, apply_split, find_duplicate_groups,
    get_splittable_type, profile_columns, remove_exact_duplicates, smart_split_column, sort_rows,
    split_column_names,
};
use scrub_ingest::{Table, read_csv_rows, write_csv_rows, write_csv_writer};
use scrub_model::{DuplicateGroup, Issue, IssueSummary, Row, SortConfig, SortDirection, SplitType};
use scrub_validate::detect;
use tracing::{debug, info, info_span, trace};

use crate::cli::{CheckArgs, FixArgs, OutputArgs, ProfileArgs, SortArgs, SplitArgs};
use crate::logging::redact_value;

pub struct CheckResult {
    pub table: Table,
    pub issues: Vec<Issue>,
    pub summary: IssueSummary,
}

impl CheckResult {
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}

pub struct FixResult {
    pub table: Table,
    pub mode: FixMode,
    pub issues_before: usize,
    pub issues_after: usize,
    pub changed_cells: usize,
}

pub struct DedupeResult {
    pub table: Table,
    pub groups: Vec<DuplicateGroup>,
    pub removed: usize,
}

pub struct SplitResult {
    pub table: Table,
    pub column: String,
    pub outcome: SplitOutcome,
    /// Component columns written by the split, including reused ones.
    pub new_columns: Vec<String>,
}

pub fn load_table(path: &Path) -> Result<Table> {
    let table = read_csv_rows(path).with_context(|| format!("load {}", path.display()))?;
    debug!(
        rows = table.len(),
        columns = table.columns.len(),
        "table loaded"
    );
    Ok(table)
}

/// Write `table` to `output`, or as CSV on stdout when no path is given.
pub fn write_output(table: &Table, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            write_csv_rows(path, table).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), rows = table.len(), "output written");
        }
        None => write_csv_writer(io::stdout().lock(), table, "stdout").context("write stdout")?,
    }
    Ok(())
}

pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    let span = info_span!("check", input = %args.input.display());
    let _guard = span.enter();
    let table = load_table(&args.input)?;
    let issues = detect(&table.rows, &table.columns);
    let summary = IssueSummary::from_issues(&issues);
    info!(issues = summary.total, rows_affected = summary.rows_affected, "check complete");
    Ok(CheckResult {
        table,
        issues,
        summary,
    })
}

pub fn run_fix(args: &FixArgs) -> Result<FixResult> {
    let span = info_span!("fix", input = %args.io.input.display(), all = args.all);
    let _guard = span.enter();
    let table = load_table(&args.io.input)?;
    let mode = if args.all {
        FixMode::All
    } else {
        FixMode::Targeted
    };

    let issues = detect(&table.rows, &table.columns);
    let fixed = apply_fixes(&table.rows, &table.columns, &issues, mode);
    let changed_cells = changed_cells(&table.rows, &fixed, &table.columns);
    let issues_after = detect(&fixed, &table.columns).len();
    info!(
        changed_cells,
        issues_before = issues.len(),
        issues_after,
        "fix complete"
    );

    let table = Table::new(table.columns, fixed);
    write_output(&table, args.io.output.as_deref())?;
    Ok(FixResult {
        table,
        mode,
        issues_before: issues.len(),
        issues_after,
        changed_cells,
    })
}

fn changed_cells(before: &[Row], after: &[Row], columns: &[String]) -> usize {
    let mut changed = 0;
    for (row_id, (old, new)) in before.iter().zip(after).enumerate() {
        for column in columns {
            let (from, to) = (old.cell(column), new.cell(column));
            if from != to {
                changed += 1;
                trace!(
                    row_id,
                    column = %column,
                    from = redact_value(from),
                    to = redact_value(to),
                    "cell fixed"
                );
            }
        }
    }
    changed
}

pub fn run_dedupe(args: &OutputArgs) -> Result<DedupeResult> {
    let span = info_span!("dedupe", input = %args.input.display());
    let _guard = span.enter();
    let table = load_table(&args.input)?;
    let groups = find_duplicate_groups(&table.rows, &table.columns);
    let kept = remove_exact_duplicates(&table.rows, &table.columns);
    let removed = table.len() - kept.len();
    info!(groups = groups.len(), removed, "dedupe complete");

    let table = Table::new(table.columns, kept);
    write_output(&table, args.output.as_deref())?;
    Ok(DedupeResult {
        table,
        groups,
        removed,
    })
}

pub fn run_split(args: &SplitArgs) -> Result<SplitResult> {
    let span = info_span!("split", input = %args.io.input.display(), column = %args.column);
    let _guard = span.enter();
    let table = load_table(&args.io.input)?;
    let column = table.column(&args.column)?.to_string();

    let split_type = match args.kind.forced() {
        Some(split_type) => split_type,
        None => {
            let values: Vec<&str> = table.rows.iter().map(|row| row.cell(&column)).collect();
            get_splittable_type(&values)
        }
    };
    if split_type == SplitType::None {
        bail!("column `{column}` does not look like an address or name column; pass --kind");
    }
    debug!(split_type = %split_type, "split type resolved");

    let outcome = smart_split_column(&table.rows, &column, split_type);
    let (rows, columns) = apply_split(&table.rows, &table.columns, &column, &outcome);
    let new_columns = split_column_names(&column, split_type);
    info!(
        success = outcome.success_count,
        failed = outcome.fail_count,
        "split complete"
    );

    let table = Table::new(columns, rows);
    write_output(&table, args.io.output.as_deref())?;
    Ok(SplitResult {
        table,
        column,
        outcome,
        new_columns,
    })
}

pub fn run_sort(args: &SortArgs) -> Result<Table> {
    let span = info_span!("sort", input = %args.io.input.display());
    let _guard = span.enter();
    let table = load_table(&args.io.input)?;
    let config = match &args.column {
        Some(column) => {
            let direction = if args.desc {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            };
            Some(SortConfig::new(table.column(column)?, direction))
        }
        None => None,
    };

    let rows = sort_rows(&table.rows, config.as_ref());
    let table = Table::new(table.columns, rows);
    write_output(&table, args.io.output.as_deref())?;
    Ok(table)
}

pub fn run_profile(args: &ProfileArgs) -> Result<(Table, Vec<ColumnProfile>)> {
    let table = load_table(&args.input)?;
    let profiles = profile_columns(&table.rows, &table.columns);
    Ok((table, profiles))
}
