//! The request orchestrator: validate, call the backend once, render the outcome.
//!
//! Handlers are plain methods invoked by an external event source (the CLI
//! here). Every handler takes `&mut self`, so a second submission cannot
//! start while one is awaiting the backend.

mod page;
mod state;

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::context::ServiceContext;
use crate::error::{AnalyzeError, ClipboardError};
use crate::model::{interpret_reply, AnalysisRequest, AnalysisResult};
use crate::ports::View;
use crate::render::{display_fields, ResultsPanel};

pub use page::{
    Control, FormFields, Page, COPY_DONE_LABEL, COPY_LABEL, PENDING_NOTICE, SAMPLE_ISSUE_NUMBER,
    SAMPLE_REPO_URL, SUBMIT_BUSY_LABEL, SUBMIT_LABEL,
};
pub use state::InteractionState;

/// How long the copy control shows its confirmation label.
pub const COPY_CONFIRMATION: Duration = Duration::from_millis(1200);

/// What a copy request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The raw payload was placed on the clipboard.
    Copied,
    /// There was no payload to copy; the clipboard was not touched.
    NothingToCopy,
}

/// Owns the interaction lifecycle and every page slot.
pub struct Orchestrator {
    ctx: ServiceContext,
    view: Box<dyn View>,
    state: InteractionState,
    page: Page,
    last_payload: Option<Value>,
}

impl Orchestrator {
    /// Creates an idle orchestrator over the given ports and view.
    #[must_use]
    pub fn new(ctx: ServiceContext, view: Box<dyn View>) -> Self {
        Self {
            ctx,
            view,
            state: InteractionState::Idle,
            page: Page::default(),
            last_payload: None,
        }
    }

    /// Current interaction state.
    #[must_use]
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Current page slots.
    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Raw payload of the last successful response.
    #[must_use]
    pub fn last_payload(&self) -> Option<&Value> {
        self.last_payload.as_ref()
    }

    /// Sets the repository URL input field.
    pub fn set_repo_url(&mut self, value: impl Into<String>) {
        self.page.form.repo_url = value.into();
        self.refresh();
    }

    /// Sets the issue number input field.
    pub fn set_issue_number(&mut self, value: impl Into<String>) {
        self.page.form.issue_number = value.into();
        self.refresh();
    }

    /// Fills both input fields with a known example. Sends nothing.
    pub fn populate_sample(&mut self) {
        self.page.form = FormFields {
            repo_url: SAMPLE_REPO_URL.to_owned(),
            issue_number: SAMPLE_ISSUE_NUMBER.to_owned(),
        };
        self.refresh();
    }

    /// Submits whatever the input fields currently hold.
    pub async fn submit_form(&mut self) {
        let FormFields { repo_url, issue_number } = self.page.form.clone();
        self.submit(&repo_url, &issue_number).await;
    }

    /// Runs one analysis attempt to completion.
    ///
    /// Invalid input fails immediately without touching the network.
    /// Otherwise exactly one request is sent, the outcome is rendered, and the
    /// submit control is restored whatever happened.
    pub async fn submit(&mut self, repo_url_raw: &str, issue_number_raw: &str) {
        let request = match AnalysisRequest::from_raw(repo_url_raw, issue_number_raw) {
            Ok(request) => request,
            Err(err) => {
                debug!("rejected submission before dispatch");
                self.render_failure(&err);
                return;
            }
        };

        let span = info_span!(
            "analyze",
            attempt = %Uuid::new_v4(),
            repo_url = %request.repo_url,
            issue_number = request.issue_number,
        );

        self.set_loading(true);
        self.render_pending();

        let outcome = self.dispatch(&request).instrument(span.clone()).await;
        let _entered = span.enter();
        match outcome {
            Ok((result, payload)) => {
                info!(labels = result.suggested_labels.len(), "analysis received");
                self.render_success(result, payload);
            }
            Err(err) => {
                match &err {
                    AnalyzeError::Transport(cause) => warn!(%cause, "backend unreachable"),
                    AnalyzeError::MalformedResult { reason } => {
                        warn!(%reason, "unreadable analysis payload");
                    }
                    other => info!(error = %other, "backend rejected request"),
                }
                self.render_failure(&err);
            }
        }
        self.set_loading(false);
    }

    async fn dispatch(
        &self,
        request: &AnalysisRequest,
    ) -> Result<(AnalysisResult, Value), AnalyzeError> {
        debug!("posting analysis request");
        let reply = self.ctx.analysis.analyze(request).await.map_err(AnalyzeError::Transport)?;
        debug!(status = reply.status, "backend replied");
        interpret_reply(&reply)
    }

    /// Copies the raw payload of the last success to the clipboard.
    ///
    /// On success the copy control shows a confirmation for
    /// [`COPY_CONFIRMATION`] before reverting.
    ///
    /// # Errors
    ///
    /// Returns a [`ClipboardError`] when the clipboard write fails; the view
    /// has already been shown a notice and the interaction state is untouched.
    pub async fn copy_raw_payload(&mut self) -> Result<CopyOutcome, ClipboardError> {
        let text = self.page.raw_json.trim().to_owned();
        if text.is_empty() {
            return Ok(CopyOutcome::NothingToCopy);
        }

        if let Err(err) = self.ctx.clipboard.write_text(&text) {
            let err = ClipboardError { reason: err.to_string() };
            warn!(reason = %err.reason, "clipboard write failed");
            self.view.notify(&err.to_string());
            return Err(err);
        }
        debug!(bytes = text.len(), "copied raw payload");

        self.page.copy.label = COPY_DONE_LABEL;
        self.refresh();
        self.ctx.timer.sleep(COPY_CONFIRMATION).await;
        self.page.copy.label = COPY_LABEL;
        self.refresh();
        Ok(CopyOutcome::Copied)
    }

    fn set_loading(&mut self, loading: bool) {
        if loading {
            self.state = InteractionState::Loading;
            self.page.submit = Control { enabled: false, label: SUBMIT_BUSY_LABEL };
        } else {
            self.page.submit = Control { enabled: true, label: SUBMIT_LABEL };
        }
        self.refresh();
    }

    fn render_pending(&mut self) {
        self.page.results_visible = true;
        self.page.results = ResultsPanel::Pending(PENDING_NOTICE.to_owned());
        self.page.raw_json.clear();
        self.page.copy.enabled = false;
        self.refresh();
    }

    fn render_success(&mut self, result: AnalysisResult, payload: Value) {
        self.page.results_visible = true;
        self.page.results = ResultsPanel::Fields(display_fields(&result));
        self.page.raw_json = match serde_json::to_string_pretty(&payload) {
            Ok(json) => json,
            Err(err) => {
                warn!(%err, "could not pretty-print payload");
                String::new()
            }
        };
        self.page.copy.enabled = !self.page.raw_json.is_empty();
        self.last_payload = Some(payload);
        self.state = InteractionState::Success(result);
        self.refresh();
    }

    fn render_failure(&mut self, err: &AnalyzeError) {
        let message = err.to_string();
        self.page.results_visible = true;
        self.page.results = ResultsPanel::Error(message.clone());
        self.page.raw_json.clear();
        self.page.copy.enabled = false;
        self.last_payload = None;
        self.state = InteractionState::Failed(message);
        self.refresh();
    }

    fn refresh(&mut self) {
        self.view.refresh(&self.state, &self.page);
    }
}
