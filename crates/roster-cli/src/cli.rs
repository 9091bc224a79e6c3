//! CLI argument definitions for the roster tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use roster_model::Department;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Employee roster - manage a small employee directory",
    long_about = "Manage a locally stored employee directory.\n\n\
                  Add, edit and remove employees, browse them by department or\n\
                  hire month, view summary statistics, and export to CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the roster data (default: $ROSTER_DATA_DIR or ./.roster).
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Do not add sample employees when the roster is empty.
    #[arg(long = "no-seed", global = true)]
    pub no_seed: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include employee names and emails in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List employees for a view, with optional search and sorting.
    List(ListArgs),

    /// Show one employee.
    Show(IdArgs),

    /// Add a new employee.
    Add(AddArgs),

    /// Edit an existing employee. Omitted fields keep their current value.
    Update(UpdateArgs),

    /// Delete an employee.
    Delete(IdArgs),

    /// Show summary statistics and the department distribution.
    Stats,

    /// List all departments.
    Departments,

    /// Export all employees to CSV.
    Export(ExportArgs),
}

#[derive(Parser)]
pub struct ListArgs {
    /// Which view to show.
    #[arg(long = "view", value_enum, default_value = "all")]
    pub view: ViewArg,

    /// Department to show (with --view department) or to filter by (with --view all).
    #[arg(long = "department", value_name = "DEPARTMENT", value_parser = parse_department)]
    pub department: Option<Department>,

    /// Case-insensitive text matched against name and email.
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Sort column.
    #[arg(long = "sort", value_enum, default_value = "name")]
    pub sort: SortArg,

    /// Sort descending instead of ascending.
    #[arg(long = "desc")]
    pub desc: bool,
}

#[derive(Parser)]
pub struct IdArgs {
    /// Employee identifier.
    #[arg(value_name = "ID")]
    pub id: String,
}

#[derive(Parser)]
pub struct AddArgs {
    /// Full name (letters and spaces, at least 3 characters).
    #[arg(long = "name")]
    pub name: String,

    /// Email address.
    #[arg(long = "email")]
    pub email: String,

    /// Department name.
    #[arg(long = "department")]
    pub department: String,

    /// Date of joining (YYYY-MM-DD, not in the future).
    #[arg(long = "joined", value_name = "DATE")]
    pub joined: String,
}

#[derive(Parser)]
pub struct UpdateArgs {
    /// Employee identifier.
    #[arg(value_name = "ID")]
    pub id: String,

    #[arg(long = "name")]
    pub name: Option<String>,

    #[arg(long = "email")]
    pub email: Option<String>,

    #[arg(long = "department")]
    pub department: Option<String>,

    #[arg(long = "joined", value_name = "DATE")]
    pub joined: Option<String>,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Output file, or `-` for stdout (default: ./employees_<today>.csv).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    All,
    Departments,
    Department,
    NewHires,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Name,
    Joined,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_department(value: &str) -> Result<Department, String> {
    value.parse::<Department>().map_err(|e| e.to_string())
}
