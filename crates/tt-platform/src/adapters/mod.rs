//! # Platform Adapters
//!
//! Implementations of the `tt-core` ports backed by the operating system.
//!
//! - `clipboard` - the system clipboard behind `ClipboardPort`

pub mod clipboard;

pub use clipboard::SystemClipboard;
#[cfg(not(windows))]
pub use clipboard::UnsupportedSession;
