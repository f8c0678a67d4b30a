use thiserror::Error;

/// The watcher could not set up its notification receiver.
///
/// Without a receiver no notification can ever be observed, so both variants
/// are fatal for the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WatcherError {
    #[error("Failed to create clipboard window. Error: {code}")]
    CreateReceiver { code: u32 },

    #[error("Cannot listen for clipboard updates. Error: {code}")]
    RegisterListener { code: u32 },

    #[error("clipboard watching is not supported on this platform")]
    Unsupported,
}
