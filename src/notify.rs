//! User-facing notifications.
//!
//! The subsystem never talks to a UI directly. Warnings meant for the player
//! go through a `Notifier`; the game decides how to show them.

use std::fmt;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Danger,
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NotificationLevel::Info => "info",
            NotificationLevel::Success => "success",
            NotificationLevel::Warning => "warning",
            NotificationLevel::Danger => "danger",
        };
        f.write_str(name)
    }
}

/// Sink for player-facing messages.
pub trait Notifier {
    fn notify(&mut self, message: &str, level: NotificationLevel);
}

/// Forwards notifications to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, message: &str, level: NotificationLevel) {
        match level {
            NotificationLevel::Warning | NotificationLevel::Danger => {
                tracing::warn!(%level, "{message}")
            }
            NotificationLevel::Info | NotificationLevel::Success => {
                tracing::info!(%level, "{message}")
            }
        }
    }
}

/// Keeps every notification, in order.
///
/// # Examples
///
/// ```rust
/// use eggworks::notify::{NotificationLevel, Notifier, RecordingNotifier};
///
/// let mut notifier = RecordingNotifier::default();
/// notifier.notify("hello", NotificationLevel::Info);
/// assert_eq!(notifier.messages(), ["hello"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    pub received: Vec<(String, NotificationLevel)>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<&str> {
        self.received.iter().map(|(m, _)| m.as_str()).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str, level: NotificationLevel) {
        self.received.push((message.to_string(), level));
    }
}
