//! Replaying adapter for the `AnalysisService` port.

use std::sync::{Arc, Mutex};

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::model::AnalysisRequest;
use crate::ports::{AnalysisFuture, AnalysisService, BackendReply, TransportError};

/// Serves recorded backend exchanges from a cassette.
///
/// A recorded transport failure replays as the same failure; running out of
/// recorded exchanges also surfaces as a transport failure.
pub struct ReplayingAnalysisService {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingAnalysisService {
    /// Create a replaying service backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }

    fn replay(&self, method: &str) -> AnalysisFuture<'_> {
        let result: Result<BackendReply, TransportError> =
            next_output(&self.replayer, "analysis", method)
                .and_then(replay_result)
                .map_err(TransportError);
        Box::pin(async move { result })
    }
}

impl AnalysisService for ReplayingAnalysisService {
    fn analyze(&self, _request: &AnalysisRequest) -> AnalysisFuture<'_> {
        self.replay("analyze")
    }

    fn health(&self) -> AnalysisFuture<'_> {
        self.replay("health")
    }
}
