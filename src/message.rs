//! Message channel for user-facing progress, warnings and errors
//!
//! The converter never prints or depends on a global logger for what the
//! user should see; it reports through a [`MessageSink`] handed to it at
//! construction. Whether anything listens is up to the caller.

use std::fmt;
use std::sync::Mutex;

/// Severity of a reported message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// Progress and success notices
    Info,
    /// Something was skipped or could not be acted on
    Warning,
    /// The operation failed
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(name)
    }
}

/// Receiver for converter messages
///
/// Delivery is synchronous. Implementations must not block for long since
/// the conversion waits on them.
///
/// # Example
///
/// ```
/// use emapconv::{MessageSink, Severity};
///
/// struct Stderr;
///
/// impl MessageSink for Stderr {
///     fn message(&self, severity: Severity, message: &str) {
///         eprintln!("{}: {}", severity, message);
///     }
/// }
/// ```
pub trait MessageSink: Send + Sync {
    /// Handle one message
    fn message(&self, severity: Severity, message: &str);
}

impl<F> MessageSink for F
where
    F: Fn(Severity, &str) + Send + Sync,
{
    fn message(&self, severity: Severity, message: &str) {
        self(severity, message)
    }
}

/// Forwards messages to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl MessageSink for LogSink {
    fn message(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => log::info!("{}", message),
            Severity::Warning => log::warn!("{}", message),
            Severity::Error => log::error!("{}", message),
        }
    }
}

/// Discards every message
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl MessageSink for NullSink {
    fn message(&self, _severity: Severity, _message: &str) {}
}

/// Keeps every message in memory, in delivery order
#[derive(Debug, Default)]
pub struct MessageLog {
    entries: Mutex<Vec<(Severity, String)>>,
}

impl MessageLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything received so far
    pub fn entries(&self) -> Vec<(Severity, String)> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Messages of one severity
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, message)| message)
            .collect()
    }

    /// True if an error was reported
    pub fn has_errors(&self) -> bool {
        self.entries().iter().any(|(s, _)| *s == Severity::Error)
    }
}

impl MessageSink for MessageLog {
    fn message(&self, severity: Severity, message: &str) {
        let mut entries = match self.entries.lock() {
            Ok(entries) => entries,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.push((severity, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_message_log_records_in_order() {
        let log = MessageLog::new();
        log.message(Severity::Info, "Reading input file...");
        log.message(Severity::Error, "bad face");

        assert_eq!(log.entries().len(), 2);
        assert_eq!(log.messages(Severity::Info), vec!["Reading input file..."]);
        assert!(log.has_errors());
    }

    #[test]
    fn test_closure_sink() {
        let count = AtomicUsize::new(0);
        let sink = |_: Severity, _: &str| {
            count.fetch_add(1, Ordering::SeqCst);
        };
        sink.message(Severity::Warning, "one");
        sink.message(Severity::Info, "two");
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_null_sink_accepts_everything() {
        NullSink.message(Severity::Error, "ignored");
    }
}
