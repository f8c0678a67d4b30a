/// Outcome of one blocking wait on a notification source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wake {
    /// The clipboard content changed.
    Changed,
    /// Something unrelated to the clipboard was delivered and handled.
    Other,
    /// The wait returned an error; the loop should keep going.
    Spurious { code: u32 },
    /// The source is shutting down; no further notifications will arrive.
    Terminate,
}

/// Blocking source of clipboard change notifications.
///
/// `wait` suspends the calling thread until the next wake. There is no timeout
/// and no polling.
pub trait NotificationSourcePort {
    fn wait(&mut self) -> Wake;
}
