//! Analysis service port for the remote issue-analysis backend.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::model::AnalysisRequest;

/// Boxed future type alias used by [`AnalysisService`] to keep the trait dyn-compatible.
pub type AnalysisFuture<'a> =
    Pin<Box<dyn Future<Output = Result<BackendReply, TransportError>> + Send + 'a>>;

/// A completed HTTP exchange: the status code and the undecoded body.
///
/// Any status counts as a completed exchange; interpreting non-2xx replies is
/// the orchestrator's job, not the transport's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendReply {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: String,
}

impl BackendReply {
    /// Creates a reply from a status code and body text.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The exchange never completed (connection refused, DNS failure, body read failure).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Sends analysis requests to the backend.
pub trait AnalysisService: Send + Sync {
    /// Posts one analysis request and returns whatever the backend answered.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no response was received at all.
    fn analyze(&self, request: &AnalysisRequest) -> AnalysisFuture<'_>;

    /// Probes the backend health route.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no response was received at all.
    fn health(&self) -> AnalysisFuture<'_>;
}
