use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use study_plan::config::SubjectEntry;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "study-plan")]
#[command(about = "Spread study hours across days under a daily cap.")]
pub struct CommandLine {
    /// TOML plan file with days, daily cap and subjects
    #[arg(short, long, value_name = "FILE")]
    pub plan: Option<PathBuf>,

    /// Subject and its required hours, e.g. "Math=10" (repeatable)
    #[arg(short = 's', long = "subject", value_name = "NAME=HOURS")]
    pub subjects: Vec<SubjectEntry>,

    /// Number of days in the plan
    #[arg(short, long, allow_negative_numbers = true)]
    pub days: Option<i64>,

    /// Maximum study hours per day
    #[arg(
        short,
        long = "max-hours-per-day",
        value_name = "HOURS",
        allow_negative_numbers = true
    )]
    pub max_hours_per_day: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Logs go to stderr so the report on stdout stays clean.
/// `RUST_LOG` wins over `-v`.
pub fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
