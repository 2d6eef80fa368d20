use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::scorer::SkillScore;

/// Severity shared by activity entries and flash notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document whose text was extracted successfully in the current batch.
#[derive(Debug, Clone, Serialize)]
pub struct UploadedDocument {
    /// Sanitized, de-duplicated filename. Identity within the session.
    pub filename: String,
    pub text: String,
    pub path: PathBuf,
    pub uploaded_at: DateTime<Utc>,
}

/// Score of one stored document, keyed by the same filename.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    pub filename: String,
    #[serde(flatten)]
    pub result: SkillScore,
}
