//! Service context bundling the port trait objects the orchestrator uses.

use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use crate::adapters::live::{LiveAnalysisService, LiveClipboard, LiveTimer};
use crate::adapters::recording::RecordingAnalysisService;
use crate::adapters::replaying::ReplayingAnalysisService;
use crate::cassette::format::Cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::config::{Config, Mode};
use crate::ports::{AnalysisService, Clipboard, Timer};

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors
/// wire up different adapter implementations (live, recording, replaying).
/// The view is not part of the context; it belongs to whoever drives the
/// orchestrator.
pub struct ServiceContext {
    /// Analysis backend.
    pub analysis: Box<dyn AnalysisService>,
    /// System clipboard.
    pub clipboard: Box<dyn Clipboard>,
    /// Timer for delayed label changes.
    pub timer: Box<dyn Timer>,
    /// Optional cassette recorder; written to disk on drop.
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl ServiceContext {
    /// Creates a context from explicit port implementations.
    #[must_use]
    pub fn new(
        analysis: Box<dyn AnalysisService>,
        clipboard: Box<dyn Clipboard>,
        timer: Box<dyn Timer>,
    ) -> Self {
        Self { analysis, clipboard, timer, recorder: None }
    }

    /// Creates a live context talking to the configured backend.
    #[must_use]
    pub fn live(config: &Config) -> Self {
        Self::new(
            Box::new(LiveAnalysisService::new(config.base_url.clone())),
            Box::new(LiveClipboard),
            Box::new(LiveTimer),
        )
    }

    /// Creates a recording context that writes a cassette file on drop.
    ///
    /// Uses live adapters for actual work; every backend exchange is
    /// captured into the cassette at `path`.
    #[must_use]
    pub fn recording(config: &Config, path: &Path) -> Self {
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(
            path,
            "issue-lens-session",
            config.base_url.clone(),
        )));
        let analysis = RecordingAnalysisService::new(
            Box::new(LiveAnalysisService::new(config.base_url.clone())),
            Arc::clone(&recorder),
        );
        Self {
            analysis: Box::new(analysis),
            clipboard: Box::new(LiveClipboard),
            timer: Box::new(LiveTimer),
            recorder: Some(recorder),
        }
    }

    /// Creates a replaying context from a cassette file.
    ///
    /// Backend exchanges are served from the cassette; the clipboard and
    /// timer stay live.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        let replayer = Arc::new(Mutex::new(CassetteReplayer::new(&cassette)));
        Ok(Self::new(
            Box::new(ReplayingAnalysisService::new(replayer)),
            Box::new(LiveClipboard),
            Box::new(LiveTimer),
        ))
    }

    /// Creates the context selected by `config.mode`.
    ///
    /// # Errors
    ///
    /// Returns an error if a replay cassette cannot be loaded.
    pub fn from_config(config: &Config) -> Result<Self, String> {
        match &config.mode {
            Mode::Live => Ok(Self::live(config)),
            Mode::Record(path) => Ok(Self::recording(config, path)),
            Mode::Replay(path) => Self::replaying(path),
        }
    }
}

impl Drop for ServiceContext {
    fn drop(&mut self) {
        let Some(recorder) = self.recorder.take() else {
            return;
        };
        let Ok(recorder) = recorder.lock() else {
            warn!("cassette recorder lock poisoned; nothing written");
            return;
        };
        match recorder.save() {
            Ok(path) => {
                info!(path = %path.display(), interactions = recorder.len(), "cassette written");
            }
            Err(e) => warn!(error = %e, "failed to write cassette"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnalysisRequest;
    use crate::ports::BackendReply;
    use chrono::Utc;
    use serde_json::json;

    #[tokio::test]
    async fn replaying_context_serves_cassette() {
        let dir = std::env::temp_dir().join("issue_lens_ctx_replay_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("ctx.cassette.yaml");
        let cassette = Cassette {
            name: "ctx".into(),
            recorded_at: Utc::now(),
            base_url: "http://127.0.0.1:8000".into(),
            interactions: vec![crate::cassette::format::Interaction {
                seq: 0,
                port: "analysis".into(),
                method: "health".into(),
                input: json!(null),
                output: json!({"Ok": {"status": 200, "body": "{\"status\":\"ok\"}"}}),
            }],
        };
        std::fs::write(&path, serde_yaml::to_string(&cassette).unwrap()).unwrap();

        let config = Config { mode: Mode::Replay(path.clone()), ..Config::default() };
        let ctx = ServiceContext::from_config(&config).unwrap();
        assert_eq!(ctx.analysis.health().await, Ok(BackendReply::new(200, "{\"status\":\"ok\"}")));

        let request =
            AnalysisRequest { repo_url: "https://github.com/o/r".into(), issue_number: 1 };
        assert!(ctx.analysis.analyze(&request).await.is_err());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn replaying_missing_cassette_fails() {
        let err = ServiceContext::replaying(Path::new("/nonexistent/none.yaml")).err().unwrap();
        assert!(err.contains("Failed to read cassette file"));
    }

    #[test]
    fn recording_context_writes_cassette_on_drop() {
        let dir = std::env::temp_dir().join("issue_lens_ctx_record_test");
        let path = dir.join("session.cassette.yaml");
        let _ = std::fs::remove_file(&path);

        let config = Config { mode: Mode::Record(path.clone()), ..Config::default() };
        drop(ServiceContext::from_config(&config).unwrap());

        let cassette = Cassette::load(&path).unwrap();
        assert_eq!(cassette.base_url, "http://127.0.0.1:8000");
        assert!(cassette.interactions.is_empty());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
