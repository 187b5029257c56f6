//! Live adapters for real external interactions.

pub mod analysis;
pub mod clipboard;
pub mod timer;
pub mod view;

pub use analysis::LiveAnalysisService;
pub use clipboard::LiveClipboard;
pub use timer::LiveTimer;
pub use view::TerminalView;
