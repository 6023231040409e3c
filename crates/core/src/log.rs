//! Agent activity log - a bounded, newest-first feed of automated actions.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::id::LogEntryId;
use crate::Time;

/// Maximum number of retained log entries.
pub const LOG_CAPACITY: usize = 50;

/// One line of the activity feed. Entries are never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique identifier
    pub id: LogEntryId,

    /// Creation instant
    pub timestamp: Time,

    /// Message text
    pub message: String,

    /// Severity tag
    pub severity: Severity,
}

impl LogEntry {
    /// Create a new entry stamped with the current time.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: LogEntryId::new(),
            timestamp: chrono::Utc::now(),
            message: message.into(),
            severity,
        }
    }
}

/// Severity of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Routine action
    Info,
    /// Action that moved work forward
    Success,
    /// Input was dropped or nothing qualified
    Warning,
}

/// Append-only feed capped at [`LOG_CAPACITY`] entries, newest first.
/// Beyond capacity the oldest entry is dropped silently.
#[derive(Debug, Clone, Default)]
pub struct AgentLog {
    entries: VecDeque<LogEntry>,
}

impl AgentLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, evicting the oldest beyond capacity.
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(LOG_CAPACITY);
    }

    /// Append an `Info` entry.
    pub fn info(&mut self, message: impl Into<String>) {
        self.push(LogEntry::new(Severity::Info, message));
    }

    /// Append a `Success` entry.
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(LogEntry::new(Severity::Success, message));
    }

    /// Append a `Warning` entry.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(LogEntry::new(Severity::Warning, message));
    }

    /// Iterate entries newest-first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
