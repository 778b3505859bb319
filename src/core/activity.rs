//! Activity log

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One line of the activity log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

impl ActivityLogEntry {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ActivityLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let local: DateTime<Local> = self.timestamp.into();
        write!(f, "[{}] {}", local.format("%Y-%m-%d %H:%M:%S"), self.message)
    }
}

/// Append-only log. Insertion order is chronological order.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: Vec<ActivityLogEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: impl Into<String>) -> &ActivityLogEntry {
        self.entries.push(ActivityLogEntry::new(message));
        &self.entries[self.entries.len() - 1]
    }

    /// The last `limit` entries, oldest first
    pub fn recent(&self, limit: usize) -> &[ActivityLogEntry] {
        let start = self.entries.len().saturating_sub(limit);
        &self.entries[start..]
    }

    pub fn last(&self) -> Option<&ActivityLogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_keeps_order_and_bound() {
        let mut log = ActivityLog::new();
        for i in 0..3000 {
            log.append(format!("entry {}", i));
        }

        let recent = log.recent(50);
        assert_eq!(recent.len(), 50);
        assert_eq!(recent[0].message, "entry 2950");
        assert_eq!(recent[49].message, "entry 2999");
        assert!(recent.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
        assert_eq!(log.len(), 3000);
    }

    #[test]
    fn test_recent_on_short_log() {
        let mut log = ActivityLog::new();
        assert!(log.recent(50).is_empty());
        log.append("System armed");
        assert_eq!(log.recent(50).len(), 1);
        assert!(log.recent(0).is_empty());
    }

    #[test]
    fn test_display_format() {
        let entry = ActivityLogEntry::new("System disarmed");
        let line = entry.to_string();
        assert!(line.starts_with('['));
        assert!(line.ends_with("] System disarmed"));
        // "[YYYY-MM-DD HH:MM:SS] "
        assert_eq!(line.find(']'), Some(20));
    }
}
