use crate::scoring::ranking::{rank_all, rank_top, TOP_N};
use crate::session::activity::{ActivityEntry, ActivityLog};
use crate::session::models::{ScoreResult, Severity, UploadedDocument};
use crate::session::stats::{compute_stats, SystemStats};

/// Single owner of all per-session data. Documents and scores are kept in
/// insertion order and always share the same set of filenames.
#[derive(Debug, Default)]
pub struct SessionStore {
    documents: Vec<UploadedDocument>,
    scores: Vec<ScoreResult>,
    job_description: String,
    required_skills: Vec<String>,
    activity: ActivityLog,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards documents, scores, job description, required skills and the
    /// activity log in one step.
    pub fn reset(&mut self) {
        self.documents.clear();
        self.scores.clear();
        self.job_description.clear();
        self.required_skills.clear();
        self.activity.clear();
    }

    pub fn begin_batch(&mut self, job_description: &str, required_skills: Vec<String>) {
        self.job_description = job_description.to_string();
        self.required_skills = required_skills;
    }

    /// Stores a document together with its score. The score's filename is
    /// overwritten with the document's so the two can never diverge.
    pub fn insert_scored(&mut self, document: UploadedDocument, mut score: ScoreResult) {
        score.filename = document.filename.clone();
        self.documents.push(document);
        self.scores.push(score);
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.documents.iter().any(|d| d.filename == filename)
    }

    pub fn documents(&self) -> &[UploadedDocument] {
        &self.documents
    }

    pub fn scores(&self) -> &[ScoreResult] {
        &self.scores
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn required_skills(&self) -> &[String] {
        &self.required_skills
    }

    pub fn log(&mut self, message: impl Into<String>, kind: Severity) {
        self.activity.record(message, kind);
    }

    pub fn activities(&self) -> Vec<ActivityEntry> {
        self.activity.entries()
    }

    pub fn stats(&self, min_files: usize) -> SystemStats {
        compute_stats(&self.scores, min_files)
    }

    pub fn ranking(&self) -> Vec<&ScoreResult> {
        rank_all(&self.scores)
    }

    pub fn top_candidates(&self) -> Vec<&ScoreResult> {
        rank_top(&self.scores, TOP_N)
    }
}
