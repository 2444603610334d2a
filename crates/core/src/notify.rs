//! User-facing notifications.

use crate::config::ResolvedConfig;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}

/// Sink for messages meant for the person running mdpubs.
pub trait Notifier {
    fn notify(&self, level: NotifyLevel, message: &str);

    fn info(&self, message: &str) {
        self.notify(NotifyLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.notify(NotifyLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.notify(NotifyLevel::Error, message);
    }
}

/// Emits notifications as `tracing` events under the `mdpubs::notify` target.
///
/// With notifications disabled only errors get through.
#[derive(Debug, Clone, Copy)]
pub struct TracingNotifier {
    enabled: bool,
}

impl TracingNotifier {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn from_config(cfg: &ResolvedConfig) -> Self {
        Self::new(cfg.notifications)
    }

    pub fn shows(&self, level: NotifyLevel) -> bool {
        self.enabled || level == NotifyLevel::Error
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, level: NotifyLevel, message: &str) {
        if !self.shows(level) {
            tracing::debug!(target: "mdpubs::notify", "suppressed: {message}");
            return;
        }
        match level {
            NotifyLevel::Info => tracing::info!(target: "mdpubs::notify", "{message}"),
            NotifyLevel::Warn => tracing::warn!(target: "mdpubs::notify", "{message}"),
            NotifyLevel::Error => tracing::error!(target: "mdpubs::notify", "{message}"),
        }
    }
}
