use std::sync::Mutex;

use serde::Serialize;

use crate::session::models::Severity;

/// A transient user-facing message shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub level: Severity,
    pub message: String,
}

impl Notice {
    pub fn new(level: Severity, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Pending notices, drained by whichever page renders next.
/// Independent of session data: a session reset keeps queued notices.
#[derive(Debug, Default)]
pub struct FlashQueue {
    pending: Mutex<Vec<Notice>>,
}

impl FlashQueue {
    pub fn push(&self, notice: Notice) {
        self.lock().push(notice);
    }

    pub fn extend(&self, notices: impl IntoIterator<Item = Notice>) {
        self.lock().extend(notices);
    }

    pub fn take(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notice>> {
        // A poisoned queue only holds display strings; keep serving them.
        self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }
}
