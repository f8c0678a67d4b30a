//! Clipboard domain types shared by the platform and application layers.

mod error;
mod format;

pub use error::ClipboardError;
pub use format::ClipboardFormat;
