//! Recording adapter for the `AnalysisService` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::model::AnalysisRequest;
use crate::ports::{AnalysisFuture, AnalysisService};

/// Records backend exchanges while delegating to an inner implementation.
pub struct RecordingAnalysisService {
    inner: Box<dyn AnalysisService>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingAnalysisService {
    /// Creates a new recording service wrapping the given implementation.
    pub fn new(inner: Box<dyn AnalysisService>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl AnalysisService for RecordingAnalysisService {
    fn analyze(&self, request: &AnalysisRequest) -> AnalysisFuture<'_> {
        let request = request.clone();

        Box::pin(async move {
            let result = self.inner.analyze(&request).await;
            record_result(&self.recorder, "analysis", "analyze", &request, &result);
            result
        })
    }

    fn health(&self) -> AnalysisFuture<'_> {
        Box::pin(async move {
            let result = self.inner.health().await;
            record_result(&self.recorder, "analysis", "health", &(), &result);
            result
        })
    }
}
