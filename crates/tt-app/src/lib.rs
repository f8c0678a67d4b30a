//! vn-text-trim application layer
//!
//! Use cases wiring the text cleaner to the clipboard ports. Nothing here
//! touches the OS directly.

pub mod retry;
pub mod usecases;

pub use retry::WriteRetryPolicy;
pub use usecases::{CleanClipboardOnChange, CleanOutcome};
