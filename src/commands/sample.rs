//! `issue-lens sample` command.

use std::io::{self, Write};

use crate::orchestrator::{SAMPLE_ISSUE_NUMBER, SAMPLE_REPO_URL};

/// Execute the `sample` command.
///
/// Prints the example inputs `analyze --sample` starts from. Sends nothing.
///
/// # Errors
///
/// Returns an error string if stdout cannot be written.
pub fn run() -> Result<(), String> {
    write_sample(&mut io::stdout()).map_err(|e| format!("Failed to write output: {e}"))
}

fn write_sample<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "repo_url:     {SAMPLE_REPO_URL}")?;
    writeln!(out, "issue_number: {SAMPLE_ISSUE_NUMBER}")?;
    writeln!(out)?;
    writeln!(out, "Run `issue-lens analyze --sample` to analyze it.")
}
