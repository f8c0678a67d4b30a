//! Clipboard port - abstracts exclusive access to the system clipboard

use crate::clipboard::ClipboardError;

/// Entry point to the system clipboard.
///
/// The clipboard is a single-owner resource shared with every other process,
/// so access is split in two: `open` takes the OS lock and returns a session,
/// and dropping the session releases it. Callers decide the retry policy for a
/// failed `open`.
pub trait ClipboardPort {
    type Session: ClipboardSessionPort;

    /// Acquire the clipboard.
    ///
    /// Fails with [`ClipboardError::Busy`] while another window holds it.
    fn open(&self) -> Result<Self::Session, ClipboardError>;
}

/// Operations available while the clipboard is held.
///
/// Implementations release the lock on drop, on every exit path.
pub trait ClipboardSessionPort {
    /// Current plain text, empty when no text format is present.
    fn read_text(&self) -> String;

    /// Replace the clipboard content with `text`.
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
