use std::num::NonZeroU32;
use std::time::Duration;

use tt_core::ClipboardSettings;

/// How often a rejected clipboard write is attempted again.
///
/// The default retries forever without pausing: contention on the clipboard
/// is short-lived and the cleaned text must land eventually.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteRetryPolicy {
    /// Total attempts before giving up, `None` for no limit.
    pub limit: Option<NonZeroU32>,
    /// Pause between attempts.
    pub delay: Duration,
}

impl WriteRetryPolicy {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn limited(attempts: NonZeroU32) -> Self {
        Self {
            limit: Some(attempts),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Whether another attempt is allowed after `attempts` failed ones.
    pub fn allows_retry(&self, attempts: u32) -> bool {
        self.limit.map_or(true, |limit| attempts < limit.get())
    }
}

impl From<&ClipboardSettings> for WriteRetryPolicy {
    fn from(settings: &ClipboardSettings) -> Self {
        Self {
            limit: settings.retry_limit(),
            delay: settings.retry_delay(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_never_gives_up() {
        let policy = WriteRetryPolicy::default();
        assert!(policy.allows_retry(0));
        assert!(policy.allows_retry(u32::MAX));
        assert_eq!(policy.delay, Duration::ZERO);
    }

    #[test]
    fn limit_counts_total_attempts() {
        let policy = WriteRetryPolicy::limited(NonZeroU32::new(3).unwrap());
        assert!(policy.allows_retry(1));
        assert!(policy.allows_retry(2));
        assert!(!policy.allows_retry(3));
    }

    #[test]
    fn built_from_clipboard_settings() {
        let settings = ClipboardSettings {
            write_retry_limit: 5,
            write_retry_delay_ms: 20,
        };
        let policy = WriteRetryPolicy::from(&settings);
        assert_eq!(policy.limit, NonZeroU32::new(5));
        assert_eq!(policy.delay, Duration::from_millis(20));

        let unbounded = WriteRetryPolicy::from(&ClipboardSettings::default());
        assert_eq!(unbounded, WriteRetryPolicy::unbounded());
    }
}
