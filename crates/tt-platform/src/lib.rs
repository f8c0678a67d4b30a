//! # tt-platform
//!
//! Platform-specific implementations for vn-text-trim.
//!
//! This crate owns every interaction with the operating system clipboard:
//! the scoped clipboard lock, global memory handed to the clipboard, the
//! hidden message-only window that receives change notifications and the
//! blocking loop that drives the change handler.
//!
//! Access to the clipboard from multiple threads is not supported. The types
//! that hold OS handles are neither `Send` nor `Sync`.

pub mod adapters;
pub mod clipboard;
pub mod watcher;

#[cfg(windows)]
mod win32;

pub use adapters::SystemClipboard;
pub use watcher::{ClipboardWatcher, WatchSummary, WatcherState};

#[cfg(windows)]
pub use clipboard::Clipboard;
#[cfg(windows)]
pub use watcher::{MessageWindow, StopHandle};
