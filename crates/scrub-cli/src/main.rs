//! `scrub` command-line interface.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use scrub_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use scrub_cli::commands::{run_check, run_dedupe, run_fix, run_profile, run_sort, run_split};
use scrub_cli::logging::{LogConfig, LogFormat, init_logging};
use scrub_cli::report::{
    duplicate_table, issue_table, print_fix_summary, profile_table, split_table, summary_table,
};
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli.command) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(command: Command) -> anyhow::Result<i32> {
    match command {
        Command::Check(args) => {
            let result = run_check(&args)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result.issues)?);
            } else {
                println!(
                    "{}",
                    summary_table(&result.summary, result.table.len(), result.table.columns.len())
                );
                if result.has_issues() {
                    println!("{}", issue_table(&result.issues, &result.table.rows, args.limit));
                }
            }
            Ok(if args.fail_on_issues && result.has_issues() { 1 } else { 0 })
        }
        Command::Fix(args) => {
            let result = run_fix(&args)?;
            print_fix_summary(&result);
            Ok(0)
        }
        Command::Dedupe(args) => {
            let result = run_dedupe(&args)?;
            if result.groups.is_empty() {
                eprintln!("No duplicate rows found.");
            } else {
                eprintln!("{}", duplicate_table(&result.groups));
            }
            eprintln!("Removed {} exact duplicate row(s).", result.removed);
            Ok(0)
        }
        Command::Split(args) => {
            let result = run_split(&args)?;
            eprintln!("{}", split_table(&result.column, &result.outcome));
            eprintln!("Split columns: {}", result.new_columns.join(", "));
            Ok(0)
        }
        Command::Sort(args) => {
            run_sort(&args)?;
            Ok(0)
        }
        Command::Profile(args) => {
            let (table, profiles) = run_profile(&args)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&profiles)?);
            } else {
                println!("{}", profile_table(&profiles, table.len()));
            }
            Ok(0)
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        log_data: cli.log_data,
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
