use std::time::Duration;

/// Default time an acknowledgment stays on screen.
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
}

/// Acknowledgment popup shown to the user.
///
/// Times are host-supplied monotonic offsets, not wall clock readings.
#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
    pub displayed_at: Option<Duration>,
    pub duration: Duration,
}

impl Notification {
    #[must_use]
    pub fn new(
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
            displayed_at: None,
            duration: DEFAULT_NOTIFICATION_DURATION,
        }
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn is_expired(&self, now: Duration) -> bool {
        self.displayed_at
            .is_some_and(|start| now.saturating_sub(start) > self.duration)
    }

    pub fn mark_displayed(&mut self, now: Duration) {
        if self.displayed_at.is_none() {
            self.displayed_at = Some(now);
        }
    }
}
