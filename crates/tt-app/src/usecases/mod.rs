//! Use cases
//!
//! [ClipboardWatcher]
//        ↓
// CleanClipboardOnChange  → read, clean, write back

pub mod clean_clipboard_on_change;

pub use clean_clipboard_on_change::{CleanClipboardOnChange, CleanOutcome};
