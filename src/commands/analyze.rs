//! `issue-lens analyze` command.

use std::io::{self, Write};

use tracing::info;

use crate::adapters::live::TerminalView;
use crate::cli::{AnalyzeArgs, OutputFormat};
use crate::config::Config;
use crate::context::ServiceContext;
use crate::orchestrator::{CopyOutcome, Orchestrator, Page};
use crate::render::{to_markup, to_plain_text};

/// Execute the `analyze` command.
///
/// Fills the form from the flags, submits it once, prints the results area
/// in the requested format and optionally copies the raw JSON.
///
/// # Errors
///
/// Returns the failure message when the analysis ends in the failed state,
/// or an error string when setup, output or the clipboard fails.
pub fn run(args: &AnalyzeArgs) -> Result<(), String> {
    let config = Config::from_env(args.base_url.as_deref())?;
    let ctx = ServiceContext::from_config(&config)?;
    let mut orchestrator = Orchestrator::new(ctx, Box::new(TerminalView::stderr()));
    super::runtime()?.block_on(drive(&mut orchestrator, args, &mut io::stdout()))
}

/// Plays the user's interaction against an orchestrator.
async fn drive<W: Write>(
    orchestrator: &mut Orchestrator,
    args: &AnalyzeArgs,
    out: &mut W,
) -> Result<(), String> {
    if args.sample {
        orchestrator.populate_sample();
    }
    if let Some(repo_url) = &args.repo_url {
        orchestrator.set_repo_url(repo_url.as_str());
    }
    if let Some(issue_number) = &args.issue_number {
        orchestrator.set_issue_number(issue_number.as_str());
    }

    orchestrator.submit_form().await;

    let rendered = render_page(orchestrator.page(), args.format);
    if let Some(message) = orchestrator.state().failure() {
        if args.format == OutputFormat::Html {
            write_out(out, &rendered)?;
        }
        return Err(message.to_owned());
    }
    write_out(out, &rendered)?;

    if args.copy {
        match orchestrator.copy_raw_payload().await {
            Ok(CopyOutcome::Copied) => info!("raw JSON copied to clipboard"),
            Ok(CopyOutcome::NothingToCopy) => {}
            Err(err) => return Err(err.reason),
        }
    }
    Ok(())
}

/// Formats the results area of `page`.
fn render_page(page: &Page, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => to_plain_text(&page.results),
        OutputFormat::Html => to_markup(&page.results),
        OutputFormat::Json if page.raw_json.is_empty() => String::new(),
        OutputFormat::Json => format!("{}\n", page.raw_json),
    }
}

fn write_out<W: Write>(out: &mut W, text: &str) -> Result<(), String> {
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| format!("Failed to write output: {e}"))
}
