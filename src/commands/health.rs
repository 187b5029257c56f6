//! `issue-lens health` command.

use serde::Deserialize;

use crate::config::Config;
use crate::context::ServiceContext;
use crate::ports::{BackendReply, TransportError};

/// Body of the backend health route.
#[derive(Deserialize)]
struct HealthBody {
    status: String,
}

/// Execute the `health` command.
///
/// # Errors
///
/// Returns an error string if the backend cannot be reached or reports a problem.
pub fn run(base_url: Option<&str>) -> Result<(), String> {
    let config = Config::from_env(base_url)?;
    let ctx = ServiceContext::from_config(&config)?;
    let result = super::runtime()?.block_on(ctx.analysis.health());
    let line = describe_health(&config.base_url, result)?;
    println!("{line}");
    Ok(())
}

fn describe_health(
    base_url: &str,
    result: Result<BackendReply, TransportError>,
) -> Result<String, String> {
    let reply = result.map_err(|e| format!("Failed to reach backend at {base_url}: {e}"))?;
    if !reply.is_success() {
        return Err(format!("Backend at {base_url} answered HTTP {}", reply.status));
    }
    match serde_json::from_str::<HealthBody>(&reply.body) {
        Ok(body) if body.status == "ok" => Ok(format!("{base_url}: ok")),
        Ok(body) => Err(format!("Backend at {base_url} reports status {:?}", body.status)),
        Err(e) => Err(format!("Backend at {base_url} sent an unexpected health body: {e}")),
    }
}
