//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and the platform implementations. The clipboard and the notification
//! receiver are OS resources; everything that touches them goes through
//! these traits so the cleaning flow can be exercised without a desktop.

mod clipboard;
mod clipboard_change_handler;
mod errors;
mod notification;

pub use clipboard::{ClipboardPort, ClipboardSessionPort};
pub use clipboard_change_handler::ClipboardChangeHandler;
pub use errors::WatcherError;
pub use notification::{NotificationSourcePort, Wake};
