//! Error taxonomy for one analysis attempt and for the copy action.
//!
//! The `Display` text of each variant is the exact message shown to the user.

use crate::ports::TransportError;

/// Why an analysis attempt ended in the failed state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalyzeError {
    /// Missing repository URL or unusable issue number; nothing was sent.
    #[error("Please provide both a repository URL and an issue number.")]
    Validation,

    /// The backend rejected the request with a structured `detail`.
    #[error("{detail}")]
    Application {
        /// HTTP status code of the reply.
        status: u16,
        /// Message taken verbatim from the reply body.
        detail: String,
    },

    /// The backend rejected the request without a usable `detail`.
    #[error("Unknown error from backend.")]
    MalformedApplication {
        /// HTTP status code of the reply.
        status: u16,
    },

    /// A 2xx reply whose body is not an analysis.
    #[error("Backend returned an analysis that could not be read.")]
    MalformedResult {
        /// Decoder message, kept for logs only.
        reason: String,
    },

    /// No reply was received.
    #[error("Failed to reach backend. Is the analysis server running on the expected port?")]
    Transport(#[source] TransportError),
}

/// Copying the raw payload to the clipboard failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Could not copy to clipboard. You can select the text manually.")]
pub struct ClipboardError {
    /// Underlying clipboard failure, kept for logs only.
    pub reason: String,
}
