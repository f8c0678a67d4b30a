use thiserror::Error;

/// Failures of clipboard access.
///
/// Absent content is never an error: reads return empty values instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// The clipboard is held by another window or thread.
    #[error("clipboard is busy (os error {code})")]
    Busy { code: u32 },

    /// The OS rejected an operation while the clipboard was held.
    #[error("{operation} failed (os error {code})")]
    Os { operation: &'static str, code: u32 },

    /// Global memory for a payload could not be allocated or locked.
    #[error("failed to allocate {size} bytes of clipboard memory (os error {code})")]
    Alloc { size: usize, code: u32 },

    /// No system clipboard is available on this target.
    #[error("system clipboard is not supported on this platform")]
    Unsupported,
}

impl ClipboardError {
    /// Contention is expected and worth retrying; everything else is not.
    pub fn is_transient(&self) -> bool {
        matches!(self, ClipboardError::Busy { .. } | ClipboardError::Os { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_and_os_errors_are_transient() {
        assert!(ClipboardError::Busy { code: 5 }.is_transient());
        assert!(ClipboardError::Os {
            operation: "SetClipboardData",
            code: 1418
        }
        .is_transient());
        assert!(!ClipboardError::Unsupported.is_transient());
        assert!(!ClipboardError::Alloc { size: 4, code: 8 }.is_transient());
    }

    #[test]
    fn display_includes_os_code() {
        let err = ClipboardError::Os {
            operation: "EmptyClipboard",
            code: 1418,
        };
        assert_eq!(err.to_string(), "EmptyClipboard failed (os error 1418)");
    }
}
