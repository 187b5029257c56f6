//! Command dispatch and handlers.

pub mod analyze;
pub mod health;
pub mod sample;

use crate::cli::Command;

/// Dispatch a parsed command to its handler.
///
/// When `ISSUE_LENS_RECORD` is set to a file path, backend exchanges are
/// recorded to that cassette; `ISSUE_LENS_REPLAY` serves them from one.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Analyze(args) => analyze::run(args),
        Command::Sample => sample::run(),
        Command::Health { base_url } => health::run(base_url.as_deref()),
    }
}

/// Builds the single-threaded runtime commands drive the orchestrator on.
fn runtime() -> Result<tokio::runtime::Runtime, String> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))
}
