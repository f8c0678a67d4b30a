//! Clipboard change watcher
//!
//! The watcher blocks on a [`NotificationSourcePort`] and calls the change
//! handler once per clipboard update, synchronously, on the calling thread.
//!
//! ```text
//! OS clipboard update
//!      ↓
//! MessageWindow      (hidden message-only window)
//!      ↓
//! ClipboardWatcher   (this module)
//!      ↓
//! ClipboardChangeHandler
//! ```
//!
//! ## Lifecycle
//!
//! `register()` creates the receiver and subscribes it; `run()` consumes the
//! watcher and returns once the source reports [`Wake::Terminate`]. The source
//! is dropped at that point, which unsubscribes it.
//!
//! Our own clipboard writes generate notifications as well. The handler is
//! expected to settle on a second pass rather than the watcher suppressing
//! them.

mod channel;
#[cfg(windows)]
mod message_window;
#[cfg(windows)]
mod stop;

pub use channel::{notification_channel, ChannelNotificationSource, NotificationSender};
#[cfg(windows)]
pub use message_window::MessageWindow;
#[cfg(windows)]
pub use stop::{install_console_stop, StopHandle};

use tracing::{debug, info, info_span, warn};
use tt_core::ports::{ClipboardChangeHandler, NotificationSourcePort, Wake};

/// Lifecycle of a watcher, for logging and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatcherState {
    /// The receiver exists and is subscribed; the loop has not started.
    Registered,
    /// The loop is blocked on or dispatching notifications.
    Running,
    /// The source terminated and was released.
    Terminated,
}

/// Counters reported when the loop exits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WatchSummary {
    /// Clipboard updates delivered to the handler.
    pub notifications: u64,
    /// Failed waits that were logged and skipped.
    pub spurious: u64,
    /// Unrelated messages dispatched without calling the handler.
    pub other: u64,
}

pub struct ClipboardWatcher<S>
where
    S: NotificationSourcePort,
{
    source: S,
    state: WatcherState,
}

impl<S> ClipboardWatcher<S>
where
    S: NotificationSourcePort,
{
    /// Wraps an already subscribed source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: WatcherState::Registered,
        }
    }

    /// Blocks until the source terminates, calling `handler` once per change.
    pub fn run<H>(mut self, handler: &mut H) -> WatchSummary
    where
        H: ClipboardChangeHandler + ?Sized,
    {
        let span = info_span!("platform.clipboard_watcher.run");
        let _enter = span.enter();

        self.state = WatcherState::Running;
        debug!(state = ?self.state, "clipboard watcher loop started");

        let mut summary = WatchSummary::default();
        loop {
            match self.source.wait() {
                Wake::Changed => {
                    summary.notifications += 1;
                    handler.on_clipboard_changed();
                }
                Wake::Other => summary.other += 1,
                Wake::Spurious { code } => {
                    summary.spurious += 1;
                    warn!(code, "Unexpected error when handling clipboard message");
                }
                Wake::Terminate => break,
            }
        }

        self.state = WatcherState::Terminated;
        let ClipboardWatcher { source, state } = self;
        drop(source);

        info!(
            state = ?state,
            notifications = summary.notifications,
            spurious = summary.spurious,
            "clipboard watcher stopped"
        );
        summary
    }
}

#[cfg(windows)]
impl ClipboardWatcher<MessageWindow> {
    /// Creates the hidden receiver window and subscribes it to clipboard updates.
    pub fn register() -> Result<Self, tt_core::ports::WatcherError> {
        MessageWindow::create().map(Self::new)
    }

    /// Handle that ends [`run`](Self::run) from another thread.
    ///
    /// The loop must run on the thread that registered the watcher.
    pub fn stop_handle(&self) -> StopHandle {
        self.source.stop_handle()
    }
}
