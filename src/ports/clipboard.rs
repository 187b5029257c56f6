//! Clipboard port for exporting text.

/// Places text on the system clipboard.
///
/// Write-only: the orchestrator never reads the clipboard back.
pub trait Clipboard: Send + Sync {
    /// Replaces the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns an error if no clipboard is available or the write is refused.
    fn write_text(&self, text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
