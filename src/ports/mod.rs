//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the orchestrator and an external
//! collaborator (the analysis backend, the clipboard, timers, the page).
//! Implementations live in `src/adapters/`.

pub mod analysis;
pub mod clipboard;
pub mod timer;
pub mod view;

pub use analysis::{AnalysisFuture, AnalysisService, BackendReply, TransportError};
pub use clipboard::Clipboard;
pub use timer::{Timer, TimerFuture};
pub use view::View;
