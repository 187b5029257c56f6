//! In-memory port implementations shared by unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::context::ServiceContext;
use crate::model::AnalysisRequest;
use crate::orchestrator::{InteractionState, Orchestrator, Page};
use crate::ports::{
    AnalysisFuture, AnalysisService, BackendReply, Clipboard, Timer, TimerFuture, TransportError,
    View,
};

type Reply = Result<BackendReply, TransportError>;

/// One observed refresh of the view.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Frame {
    pub state: InteractionState,
    pub page: Page,
}

/// Shared handles onto every fake port, so tests can inspect what happened.
#[derive(Default)]
pub(crate) struct Fakes {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    requests: Arc<Mutex<Vec<AnalysisRequest>>>,
    frames: Arc<Mutex<Vec<Frame>>>,
    dispatch_frame: Arc<Mutex<Option<Frame>>>,
    notices: Arc<Mutex<Vec<String>>>,
    clipboard: Arc<Mutex<Vec<String>>>,
    clipboard_fails: bool,
    sleeps: Arc<Mutex<Vec<Duration>>>,
}

impl Fakes {
    pub fn with_replies(replies: Vec<Reply>) -> Self {
        Self { replies: Arc::new(Mutex::new(replies.into())), ..Self::default() }
    }

    pub fn failing_clipboard(mut self) -> Self {
        self.clipboard_fails = true;
        self
    }

    pub fn context(&self) -> ServiceContext {
        ServiceContext::new(
            Box::new(FakeAnalysis {
                replies: Arc::clone(&self.replies),
                requests: Arc::clone(&self.requests),
                frames: Arc::clone(&self.frames),
                dispatch_frame: Arc::clone(&self.dispatch_frame),
            }),
            Box::new(FakeClipboard {
                writes: Arc::clone(&self.clipboard),
                fails: self.clipboard_fails,
            }),
            Box::new(FakeTimer { sleeps: Arc::clone(&self.sleeps) }),
        )
    }

    pub fn view(&self) -> FakeView {
        FakeView { frames: Arc::clone(&self.frames), notices: Arc::clone(&self.notices) }
    }

    pub fn orchestrator(&self) -> Orchestrator {
        Orchestrator::new(self.context(), Box::new(self.view()))
    }

    pub fn requests(&self) -> Vec<AnalysisRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn frames(&self) -> Vec<Frame> {
        self.frames.lock().unwrap().clone()
    }

    /// The last frame the view had seen when the request went out.
    pub fn frame_at_dispatch(&self) -> Option<Frame> {
        self.dispatch_frame.lock().unwrap().clone()
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }

    pub fn clipboard_writes(&self) -> Vec<String> {
        self.clipboard.lock().unwrap().clone()
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

struct FakeAnalysis {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    requests: Arc<Mutex<Vec<AnalysisRequest>>>,
    frames: Arc<Mutex<Vec<Frame>>>,
    dispatch_frame: Arc<Mutex<Option<Frame>>>,
}

impl FakeAnalysis {
    fn next_reply(&self) -> Reply {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no reply queued".into())))
    }
}

impl AnalysisService for FakeAnalysis {
    fn analyze(&self, request: &AnalysisRequest) -> AnalysisFuture<'_> {
        self.requests.lock().unwrap().push(request.clone());
        *self.dispatch_frame.lock().unwrap() = self.frames.lock().unwrap().last().cloned();
        let reply = self.next_reply();
        Box::pin(async move { reply })
    }

    fn health(&self) -> AnalysisFuture<'_> {
        let reply = self.next_reply();
        Box::pin(async move { reply })
    }
}

struct FakeClipboard {
    writes: Arc<Mutex<Vec<String>>>,
    fails: bool,
}

impl Clipboard for FakeClipboard {
    fn write_text(&self, text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.fails {
            return Err("clipboard unavailable".into());
        }
        self.writes.lock().unwrap().push(text.to_owned());
        Ok(())
    }
}

struct FakeTimer {
    sleeps: Arc<Mutex<Vec<Duration>>>,
}

impl Timer for FakeTimer {
    fn sleep(&self, duration: Duration) -> TimerFuture<'_> {
        self.sleeps.lock().unwrap().push(duration);
        Box::pin(async {})
    }
}

pub(crate) struct FakeView {
    frames: Arc<Mutex<Vec<Frame>>>,
    notices: Arc<Mutex<Vec<String>>>,
}

impl View for FakeView {
    fn refresh(&mut self, state: &InteractionState, page: &Page) {
        self.frames.lock().unwrap().push(Frame { state: state.clone(), page: page.clone() });
    }

    fn notify(&mut self, message: &str) {
        self.notices.lock().unwrap().push(message.to_owned());
    }
}
