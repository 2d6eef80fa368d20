use std::collections::VecDeque;

use chrono::Local;
use serde::Serialize;
use tracing::debug;

use crate::session::models::Severity;

/// Maximum number of retained entries.
pub const ACTIVITY_LOG_CAPACITY: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityEntry {
    pub message: String,
    /// `%Y-%m-%d %H:%M:%S`
    pub timestamp: String,
    /// `%H:%M`
    pub time_ago: String,
    #[serde(rename = "type")]
    pub kind: Severity,
}

/// Append-only, newest-first, bounded log. Observational only.
#[derive(Debug, Default, Clone)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
}

impl ActivityLog {
    pub fn record(&mut self, message: impl Into<String>, kind: Severity) {
        let now = Local::now();
        let entry = ActivityEntry {
            message: message.into(),
            timestamp: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            time_ago: now.format("%H:%M").to_string(),
            kind,
        };
        debug!(kind = %entry.kind, "activity: {}", entry.message);
        self.entries.push_front(entry);
        self.entries.truncate(ACTIVITY_LOG_CAPACITY);
    }

    pub fn entries(&self) -> Vec<ActivityEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
