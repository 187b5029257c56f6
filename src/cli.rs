//! CLI argument definitions.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

/// Top-level CLI parser for `issue-lens`.
#[derive(Debug, Parser)]
#[command(
    name = "issue-lens",
    version,
    about = "Summarize GitHub issues through an analysis backend"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` wins when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze one issue and print the structured summary.
    Analyze(AnalyzeArgs),
    /// Print the example repository and issue used by `analyze --sample`.
    Sample,
    /// Check that the analysis backend is up.
    Health {
        /// Backend base URL (overrides `ISSUE_LENS_BASE_URL`).
        #[arg(long)]
        base_url: Option<String>,
    },
}

/// Arguments of `issue-lens analyze`.
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Repository URL, e.g. `https://github.com/facebook/react`.
    #[arg(long)]
    pub repo_url: Option<String>,
    /// Issue number.
    #[arg(long = "issue", value_name = "NUMBER")]
    pub issue_number: Option<String>,
    /// Start from the example repository and issue; explicit flags still override.
    #[arg(long)]
    pub sample: bool,
    /// Copy the raw JSON to the clipboard after a successful analysis.
    #[arg(long)]
    pub copy: bool,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Backend base URL (overrides `ISSUE_LENS_BASE_URL`).
    #[arg(long)]
    pub base_url: Option<String>,
}

/// How `analyze` prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain text.
    Text,
    /// HTML fragment.
    Html,
    /// The raw payload, pretty-printed.
    Json,
}
