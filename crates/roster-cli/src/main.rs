//! Employee roster CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use roster_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use roster_cli::commands::{
    open_store, run_add, run_delete, run_departments, run_export, run_list, run_show, run_stats,
    run_update,
};
use roster_cli::logging::{LogConfig, LogFormat, init_logging};
use roster_cli::summary::{
    print_departments, print_employee, print_form_errors, print_list, print_statistics,
};
use roster_cli::types::{ExportTarget, SaveOutcome};
use roster_store::default_data_dir;
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
    let mut store = open_store(&data_dir, !cli.no_seed);
    if let roster_store::LoadOutcome::Failed { reason } = store.load_outcome() {
        eprintln!("warning: could not read saved employees ({reason}); starting with an empty roster");
    }

    let exit_code = match &cli.command {
        Command::List(args) => match run_list(&store, args) {
            Ok(result) => {
                print_list(&result);
                0
            }
            Err(error) => report(&error),
        },
        Command::Show(args) => match run_show(&store, args) {
            Ok(employee) => {
                print_employee(employee);
                0
            }
            Err(error) => report(&error),
        },
        Command::Add(args) => match run_add(&mut store, args) {
            Ok(outcome) => saved_exit_code(&outcome, "Added"),
            Err(error) => report(&error),
        },
        Command::Update(args) => match run_update(&mut store, args) {
            Ok(outcome) => saved_exit_code(&outcome, "Updated"),
            Err(error) => report(&error),
        },
        Command::Delete(args) => match run_delete(&mut store, args) {
            Ok(removed) => {
                println!("Deleted {} ({})", removed.name, removed.id);
                0
            }
            Err(error) => report(&error),
        },
        Command::Stats => {
            print_statistics(&run_stats(&store));
            0
        }
        Command::Departments => {
            print_departments(&run_departments(&store));
            0
        }
        Command::Export(args) => match run_export(&store, args) {
            Ok(ExportTarget::Stdout(csv)) => {
                println!("{csv}");
                0
            }
            Ok(ExportTarget::File { path, rows }) => {
                println!("Exported {rows} employees to {}", path.display());
                0
            }
            Err(error) => report(&error),
        },
    };
    std::process::exit(exit_code);
}

fn saved_exit_code(outcome: &SaveOutcome, verb: &str) -> i32 {
    match outcome {
        SaveOutcome::Saved(id) => {
            println!("{verb} employee {id}");
            0
        }
        SaveOutcome::Rejected(errors) => {
            print_form_errors(errors);
            1
        }
    }
}

fn report(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error:#}");
    1
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
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
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
