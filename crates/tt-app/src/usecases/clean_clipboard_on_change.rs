//! Use case run on every clipboard change notification

use std::thread;

use tracing::{debug, error, info_span, warn};
use tt_core::ports::{ClipboardChangeHandler, ClipboardPort, ClipboardSessionPort};
use tt_core::{ClipboardError, TextCleaner};

use crate::retry::WriteRetryPolicy;

/// What a single run of [`CleanClipboardOnChange`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanOutcome {
    /// The clipboard could not be opened; this notification is dropped.
    Skipped(ClipboardError),
    /// No text on the clipboard.
    NoText,
    /// The cleaner left the text alone.
    Unchanged,
    /// The cleaned text was written back.
    Rewritten { attempts: u32 },
    /// Every allowed write attempt was rejected.
    GaveUp { attempts: u32, error: ClipboardError },
}

/// Cleans the clipboard text in place.
///
/// ## Behavior
/// - Opens the clipboard once; an open failure skips this notification
/// - Reads the text and runs it through the cleaner
/// - Writes the result back while the clipboard is still held, retrying a
///   rejected write with the same text according to the retry policy
/// - Gives up at once on errors that retrying cannot fix, such as a failed
///   allocation
///
/// The clipboard is released when the run ends, on every path. The write-back
/// raises a new notification; a second pass over already cleaned text is
/// expected to report no change.
pub struct CleanClipboardOnChange<C>
where
    C: ClipboardPort,
{
    clipboard: C,
    cleaner: TextCleaner,
    retry: WriteRetryPolicy,
}

impl<C> CleanClipboardOnChange<C>
where
    C: ClipboardPort,
{
    pub fn new(clipboard: C, cleaner: TextCleaner) -> Self {
        Self {
            clipboard,
            cleaner,
            retry: WriteRetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: WriteRetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Execute the use case once.
    pub fn execute(&self) -> CleanOutcome {
        let span = info_span!("usecase.clean_clipboard.execute");
        let _enter = span.enter();

        let session = match self.clipboard.open() {
            Ok(session) => session,
            Err(err) => {
                debug!(error = %err, "clipboard unavailable, skipping notification");
                return CleanOutcome::Skipped(err);
            }
        };

        let text = session.read_text();
        if text.is_empty() {
            return CleanOutcome::NoText;
        }

        match self.cleaner.clean(&text) {
            Some(cleaned) => self.write_back(&session, &cleaned),
            None => CleanOutcome::Unchanged,
        }
    }

    fn write_back(&self, session: &C::Session, text: &str) -> CleanOutcome {
        let mut attempts: u32 = 0;
        loop {
            attempts = attempts.saturating_add(1);

            let error = match session.write_text(text) {
                Ok(()) => {
                    debug!(attempts, "clipboard text replaced");
                    return CleanOutcome::Rewritten { attempts };
                }
                Err(error) => error,
            };

            // Only contention clears up by itself.
            if !error.is_transient() || !self.retry.allows_retry(attempts) {
                error!(attempts, error = %error, "Giving up on setting new clipboard");
                return CleanOutcome::GaveUp { attempts, error };
            }

            warn!(attempts, error = %error, "Failed to set new clipboard! Try again...");
            if !self.retry.delay.is_zero() {
                thread::sleep(self.retry.delay);
            }
        }
    }
}

impl<C> ClipboardChangeHandler for CleanClipboardOnChange<C>
where
    C: ClipboardPort,
{
    fn on_clipboard_changed(&mut self) {
        let outcome = self.execute();
        debug!(?outcome, "clipboard change handled");
    }
}
