//! Live clipboard backed by the native platform clipboard.

use tracing::debug;

use crate::ports::Clipboard;

/// Writes to the system clipboard through `arboard`.
///
/// A fresh handle is opened per write. On X11 the contents are handed to the
/// clipboard manager when the handle is dropped.
pub struct LiveClipboard;

impl Clipboard for LiveClipboard {
    fn write_text(&self, text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text)?;
        debug!(bytes = text.len(), "clipboard written");
        Ok(())
    }
}
