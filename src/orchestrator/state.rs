//! The mutually exclusive interaction state.

use crate::model::AnalysisResult;

/// What the page is currently showing.
///
/// `Idle` and `Loading` are transient; `Success` and `Failed` are resting
/// states that stay until the next submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InteractionState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A request is outstanding.
    Loading,
    /// The last request produced an analysis.
    Success(AnalysisResult),
    /// The last attempt failed; holds the user-facing message.
    Failed(String),
}

impl InteractionState {
    /// Whether a request is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The failure message, if the last attempt failed.
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
