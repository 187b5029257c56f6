//! Live adapter for the `AnalysisService` port over HTTP.

use reqwest::Client;
use tracing::debug;

use crate::model::AnalysisRequest;
use crate::ports::{AnalysisFuture, AnalysisService, BackendReply, TransportError};

/// Path of the analysis route, relative to the base URL.
pub const ANALYZE_PATH: &str = "/api/analyze_issue";
/// Path of the health route, relative to the base URL.
pub const HEALTH_PATH: &str = "/";

/// Posts analysis requests to the backend with `reqwest`.
///
/// No timeout is configured; a hung backend keeps the request outstanding.
pub struct LiveAnalysisService {
    client: Client,
    base_url: String,
}

impl LiveAnalysisService {
    /// Creates a client for the backend at `base_url` (no trailing slash).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Uses a preconfigured client for the backend at `base_url`.
    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self { client, base_url: base_url.into() }
    }

    /// Full URL of the analysis route.
    #[must_use]
    pub fn analyze_url(&self) -> String {
        format!("{}{ANALYZE_PATH}", self.base_url)
    }

    /// Full URL of the health route.
    #[must_use]
    pub fn health_url(&self) -> String {
        format!("{}{HEALTH_PATH}", self.base_url)
    }
}

/// Turns a received response into a [`BackendReply`], whatever its status.
async fn into_reply(response: reqwest::Response) -> Result<BackendReply, TransportError> {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| TransportError(format!("Failed to read backend response: {e}")))?;
    debug!(status, bytes = body.len(), "backend response read");
    Ok(BackendReply { status, body })
}

impl AnalysisService for LiveAnalysisService {
    fn analyze(&self, request: &AnalysisRequest) -> AnalysisFuture<'_> {
        let request = request.clone();

        Box::pin(async move {
            let url = self.analyze_url();
            debug!(%url, "POST");
            let response = self
                .client
                .post(&url)
                .json(&request)
                .send()
                .await
                .map_err(|e| TransportError(format!("Analysis request to {url} failed: {e}")))?;
            into_reply(response).await
        })
    }

    fn health(&self) -> AnalysisFuture<'_> {
        Box::pin(async move {
            let url = self.health_url();
            debug!(%url, "GET");
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| TransportError(format!("Health request to {url} failed: {e}")))?;
            into_reply(response).await
        })
    }
}
