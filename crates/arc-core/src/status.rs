use std::time::{Duration, Instant};

/// How long a transient status message stays up.
pub const STATUS_TIMEOUT: Duration = Duration::from_millis(5000);

/// Severity of a status message, used for colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    expires_at: Instant,
}

/// A single transient message slot, like a window's status bar.
///
/// A new message replaces the current one. Time is passed in by the caller so
/// expiry can be tested without sleeping.
#[derive(Debug, Clone, Default)]
pub struct StatusBar {
    current: Option<StatusMessage>,
}

impl StatusBar {
    pub fn show(&mut self, text: impl Into<String>, level: StatusLevel, now: Instant) {
        self.show_for(text, level, now, STATUS_TIMEOUT);
    }

    pub fn show_for(
        &mut self,
        text: impl Into<String>,
        level: StatusLevel,
        now: Instant,
        timeout: Duration,
    ) {
        self.current = Some(StatusMessage {
            text: text.into(),
            level,
            expires_at: now + timeout,
        });
    }

    /// The message still visible at `now`, if any.
    pub fn current(&self, now: Instant) -> Option<&StatusMessage> {
        self.current.as_ref().filter(|m| now < m.expires_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_expires() {
        let t0 = Instant::now();
        let mut bar = StatusBar::default();
        bar.show("ERROR: 'x' value unknown.", StatusLevel::Error, t0);

        assert!(bar.current(t0).is_some());
        assert!(bar.current(t0 + Duration::from_millis(4999)).is_some());
        assert!(bar.current(t0 + STATUS_TIMEOUT).is_none());
    }

    #[test]
    fn test_new_message_replaces_old() {
        let t0 = Instant::now();
        let mut bar = StatusBar::default();
        bar.show("first", StatusLevel::Info, t0);
        bar.show("second", StatusLevel::Error, t0);
        let msg = bar.current(t0).map(|m| m.text.as_str());
        assert_eq!(msg, Some("second"));
    }
}
