//! Clipboard change handler port
//!
//! This port defines the callback interface for clipboard change events
//! delivered by the platform watcher:
//! - Platform layer (low-level) depends on this abstraction
//! - App layer (high-level) implements this interface

/// Callback handler for clipboard change notifications.
///
/// Invoked synchronously on the watcher thread, once per notification. No
/// other notification is processed until it returns, so it must not block
/// indefinitely.
pub trait ClipboardChangeHandler {
    fn on_clipboard_changed(&mut self);
}

impl<F> ClipboardChangeHandler for F
where
    F: FnMut(),
{
    fn on_clipboard_changed(&mut self) {
        self()
    }
}
