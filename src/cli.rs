//! Command-line argument parsing for the gridlet demo binary.
//!
//! This module handles parsing command-line arguments and determining
//! which command to execute.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// Usage text printed for `--help` and for argument errors.
pub const USAGE: &str = "\
Usage: gridlet [OPTIONS]

Options:
  --rows <N>       Number of generated sample records (default: 120)
  --page-size <N>  Records per page (default: 12)
  --latency <MS>   Simulated store latency in milliseconds (default: 150)
  --data <FILE>    Load records from a JSON dataset file instead of samples
  --ascii          Use plain ASCII markers instead of Unicode glyphs
  -V, --version    Print version information
  -h, --help       Print this help text";

/// Argument parsing failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    #[error("missing value for {0}")]
    MissingValue(&'static str),

    #[error("invalid value {value:?} for {flag}")]
    InvalidValue { flag: &'static str, value: String },

    #[error("unknown argument {0:?}")]
    UnknownArgument(String),
}

/// Options for running the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    /// Number of sample records to generate when no data file is given.
    pub rows: usize,
    /// Records per page served by the backing store.
    pub page_size: u32,
    /// Simulated store latency in milliseconds.
    pub latency_ms: u64,
    /// Use ASCII markers instead of Unicode glyphs.
    pub ascii: bool,
    /// Optional JSON dataset file to load instead of generated samples.
    pub data: Option<PathBuf>,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            rows: 120,
            page_size: 12,
            latency_ms: 150,
            ascii: false,
            data: None,
        }
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage text
    Help,
    /// Run the TUI application (default)
    RunTui(CliOptions),
}

/// Parse command-line arguments and return the appropriate command.
///
/// # Arguments
///
/// * `args` - Iterator of command-line arguments (typically `std::env::args()`)
///
/// # Examples
///
/// ```
/// use gridlet::cli::{parse_args, CliCommand};
///
/// let args = vec!["gridlet".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, CliError>
where
    I: Iterator<Item = String>,
{
    let mut args = args.skip(1); // Skip the program name
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--ascii" => options.ascii = true,
            "--rows" => options.rows = parse_value("--rows", args.next())?,
            "--page-size" => options.page_size = parse_value("--page-size", args.next())?,
            "--latency" => options.latency_ms = parse_value("--latency", args.next())?,
            "--data" => {
                let value = args.next().ok_or(CliError::MissingValue("--data"))?;
                options.data = Some(PathBuf::from(value));
            }
            other => return Err(CliError::UnknownArgument(other.to_string())),
        }
    }

    Ok(CliCommand::RunTui(options))
}

fn parse_value<T: FromStr>(flag: &'static str, value: Option<String>) -> Result<T, CliError> {
    let value = value.ok_or(CliError::MissingValue(flag))?;
    value
        .parse()
        .map_err(|_| CliError::InvalidValue { flag, value })
}
