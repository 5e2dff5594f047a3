// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `jsp-gantt`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "jsp-gantt",
    version,
    about = "Turn a job-shop problem and its schedule into a Gantt chart figure.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `JspGantt.toml` in the current working directory. A missing
    /// default file falls back to built-in settings.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Problem document (JSON). Overrides `[input].problem`.
    #[arg(long, value_name = "PATH")]
    pub problem: Option<String>,

    /// Answer document (JSON). Overrides `[input].answer`.
    #[arg(long, value_name = "PATH")]
    pub answer: Option<String>,

    /// Job to highlight initially.
    ///
    /// Parsed like a line typed on stdin: anything that is not a whole,
    /// non-negative number selects nothing.
    #[arg(long, value_name = "ID")]
    pub job: Option<String>,

    /// Write the figure JSON here instead of stdout. Overrides `[output].path`.
    #[arg(long, value_name = "PATH")]
    pub output: Option<String>,

    /// Build once from the current files, no watching and no stdin.
    #[arg(long)]
    pub once: bool,

    /// Load + validate both documents and print a summary, write nothing.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `JSP_GANTT_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
