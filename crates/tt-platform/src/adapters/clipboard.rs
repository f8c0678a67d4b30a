use tt_core::ports::{ClipboardPort, ClipboardSessionPort};
use tt_core::ClipboardError;

/// The process-wide system clipboard.
///
/// Stateless: every `open` goes straight to the OS lock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(windows)]
impl ClipboardPort for SystemClipboard {
    type Session = crate::clipboard::Clipboard;

    fn open(&self) -> Result<Self::Session, ClipboardError> {
        crate::clipboard::Clipboard::open()
    }
}

#[cfg(windows)]
impl ClipboardSessionPort for crate::clipboard::Clipboard {
    fn read_text(&self) -> String {
        crate::clipboard::Clipboard::read_text(self)
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        crate::clipboard::Clipboard::write_text(self, text)
    }
}

/// Session type on targets without a system clipboard. It cannot be constructed.
#[cfg(not(windows))]
#[derive(Debug)]
pub enum UnsupportedSession {}

#[cfg(not(windows))]
impl ClipboardPort for SystemClipboard {
    type Session = UnsupportedSession;

    fn open(&self) -> Result<Self::Session, ClipboardError> {
        Err(ClipboardError::Unsupported)
    }
}

#[cfg(not(windows))]
impl ClipboardSessionPort for UnsupportedSession {
    fn read_text(&self) -> String {
        match *self {}
    }

    fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        match *self {}
    }
}
