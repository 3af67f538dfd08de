//! Player-facing notification sinks.

/// How loudly a notification should be presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum NotifySeverity {
    Info,
    Success,
    Warning,
    Error,
}

/// Sink for player-facing messages (learned an ability, rollback, ...).
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, severity: NotifySeverity);
}

/// Discards every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _message: &str, _severity: NotifySeverity) {}
}

/// Forwards notifications into `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str, severity: NotifySeverity) {
        match severity {
            NotifySeverity::Info | NotifySeverity::Success => {
                tracing::info!(target: "spellcraft::notify", %severity, "{message}")
            }
            NotifySeverity::Warning => {
                tracing::warn!(target: "spellcraft::notify", "{message}")
            }
            NotifySeverity::Error => {
                tracing::error!(target: "spellcraft::notify", "{message}")
            }
        }
    }
}
