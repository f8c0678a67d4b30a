//! In-process notification source.
//!
//! Feeds the watcher from a channel instead of the OS. Used by tests and by
//! callers that bridge change notifications from elsewhere. Dropping every
//! sender terminates the loop.

use std::sync::mpsc;

use tt_core::ports::{NotificationSourcePort, Wake};

/// Creates a connected sender and source pair.
pub fn notification_channel() -> (NotificationSender, ChannelNotificationSource) {
    let (tx, rx) = mpsc::channel();
    (
        NotificationSender { tx },
        ChannelNotificationSource { rx },
    )
}

#[derive(Debug, Clone)]
pub struct NotificationSender {
    tx: mpsc::Sender<Wake>,
}

impl NotificationSender {
    /// Queues a wake. Returns `false` once the source is gone.
    pub fn send(&self, wake: Wake) -> bool {
        self.tx.send(wake).is_ok()
    }

    pub fn notify_changed(&self) -> bool {
        self.send(Wake::Changed)
    }

    pub fn terminate(&self) -> bool {
        self.send(Wake::Terminate)
    }
}

#[derive(Debug)]
pub struct ChannelNotificationSource {
    rx: mpsc::Receiver<Wake>,
}

impl NotificationSourcePort for ChannelNotificationSource {
    fn wait(&mut self) -> Wake {
        self.rx.recv().unwrap_or(Wake::Terminate)
    }
}
