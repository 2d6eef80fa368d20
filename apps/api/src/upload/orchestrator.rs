//! Batch orchestration: one upload submission processed as a unit.
//!
//! Phases run strictly in order:
//! `Validating → SessionReset → ExtractingSkills → ProcessingDocuments → Finalizing`.
//! Validation failures leave the store untouched. Everything after
//! `SessionReset` works on a freshly emptied session, so a rejected batch
//! past that point still discards the previous one.
//!
//! The caller holds the store lock for the whole run; batches never
//! interleave.

use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::extract::{has_extension, TextExtractor};
use crate::scoring::ranking::TOP_N;
use crate::scoring::scorer::{score_document, MatchLevel};
use crate::scoring::vocabulary::extract_required_skills;
use crate::session::flash::Notice;
use crate::session::models::{ScoreResult, Severity, UploadedDocument};
use crate::session::store::SessionStore;
use crate::upload::filename::{dedup_filename, sanitize_filename};
use crate::upload::storage::UploadStorage;

/// Inclusive bounds on the number of documents per batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchLimits {
    pub min_files: usize,
    pub max_files: usize,
}

impl Default for BatchLimits {
    fn default() -> Self {
        Self {
            min_files: 10,
            max_files: 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchPhase {
    Validating,
    SessionReset,
    ExtractingSkills,
    ProcessingDocuments,
    Finalizing,
}

/// One uploaded file as received from the client.
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub filename: String,
    pub bytes: Bytes,
}

#[derive(Debug, Clone, Default)]
pub struct BatchSubmission {
    pub job_description: String,
    pub files: Vec<IncomingFile>,
}

#[derive(Debug, Error, PartialEq)]
pub enum BatchError {
    #[error("{0}")]
    Validation(String),

    #[error("No recognizable skills found in job description. Please include technical skills.")]
    NoSkillsFound,
}

/// Tagged result of processing one submitted file.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentOutcome {
    Scored {
        filename: String,
        score: f64,
        match_level: MatchLevel,
    },
    ExtractionFailure {
        filename: String,
        reason: String,
    },
    UnsupportedFormat {
        filename: String,
    },
}

impl DocumentOutcome {
    pub fn filename(&self) -> &str {
        match self {
            DocumentOutcome::Scored { filename, .. }
            | DocumentOutcome::ExtractionFailure { filename, .. }
            | DocumentOutcome::UnsupportedFormat { filename } => filename,
        }
    }

    pub fn is_scored(&self) -> bool {
        matches!(self, DocumentOutcome::Scored { .. })
    }
}

/// Aggregated outcome of a completed batch.
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub required_skills: Vec<String>,
    pub outcomes: Vec<DocumentOutcome>,
    /// Top candidates, empty unless the batch reached the minimum.
    pub selected: Vec<String>,
    pub limits: BatchLimits,
}

impl BatchReport {
    pub fn processed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_scored()).count()
    }

    pub fn failed_filenames(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| !o.is_scored())
            .map(DocumentOutcome::filename)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.processed_count() >= self.limits.min_files
    }

    /// User-facing notices describing how the batch went.
    pub fn notices(&self) -> Vec<Notice> {
        let processed = self.processed_count();
        let mut notices = Vec::new();

        if self.is_complete() {
            notices.push(Notice::new(
                Severity::Success,
                format!(
                    "Successfully processed {processed} resume(s)! Top {TOP_N} candidates automatically selected."
                ),
            ));
        } else if processed > 0 {
            notices.push(Notice::new(
                Severity::Warning,
                format!(
                    "Only {processed} resumes processed. Need minimum {} resumes for analysis.",
                    self.limits.min_files
                ),
            ));
        }

        let failed = self.failed_filenames();
        if !failed.is_empty() {
            notices.push(Notice::new(
                Severity::Error,
                format!("Failed to process: {}", failed.join(", ")),
            ));
        }

        notices
    }
}

/// Checks the submission shape. Pure: never touches session state.
pub fn validate_submission(
    job_description: &str,
    file_count: usize,
    limits: BatchLimits,
) -> Result<(), BatchError> {
    if job_description.trim().is_empty() {
        return Err(BatchError::Validation(
            "Please provide a job description for skill matching.".to_string(),
        ));
    }
    if file_count == 0 {
        return Err(BatchError::Validation("No files selected.".to_string()));
    }
    if file_count < limits.min_files {
        return Err(BatchError::Validation(format!(
            "Minimum {} resumes required. You selected only {file_count} files.",
            limits.min_files
        )));
    }
    if file_count > limits.max_files {
        return Err(BatchError::Validation(format!(
            "Maximum {} files allowed. You selected {file_count} files.",
            limits.max_files
        )));
    }
    Ok(())
}

/// Wipes the uploads directory and all session data, then records the reset.
pub async fn clear_session(store: &mut SessionStore, storage: &UploadStorage) {
    if let Err(e) = storage.wipe().await {
        warn!("Failed to wipe upload directory: {e}");
    }
    store.reset();
    store.log("All data cleared and system reset", Severity::Warning);
}

/// Runs one batch end to end against `store`.
pub async fn run_batch(
    store: &mut SessionStore,
    storage: &UploadStorage,
    extractor: &dyn TextExtractor,
    limits: BatchLimits,
    submission: BatchSubmission,
) -> Result<BatchReport, BatchError> {
    let job_description = submission.job_description.trim().to_string();
    let files: Vec<IncomingFile> = submission
        .files
        .into_iter()
        .filter(|f| !f.filename.is_empty())
        .collect();

    enter(BatchPhase::Validating);
    validate_submission(&job_description, files.len(), limits)?;
    info!("Received {} files for processing", files.len());

    enter(BatchPhase::SessionReset);
    clear_session(store, storage).await;
    store.log("Started new resume analysis session", Severity::Info);

    enter(BatchPhase::ExtractingSkills);
    let required_skills = extract_required_skills(&job_description);
    if required_skills.is_empty() {
        store.log(
            "Failed: No skills found in job description",
            Severity::Error,
        );
        return Err(BatchError::NoSkillsFound);
    }
    store.begin_batch(&job_description, required_skills.clone());
    store.log(describe_skills(&required_skills), Severity::Success);

    enter(BatchPhase::ProcessingDocuments);
    let mut outcomes = Vec::with_capacity(files.len());
    for file in files {
        let outcome = process_document(store, storage, extractor, &required_skills, file).await;
        debug!(?outcome, "document processed");
        outcomes.push(outcome);
    }

    enter(BatchPhase::Finalizing);
    Ok(finalize(store, limits, required_skills, outcomes))
}

fn enter(phase: BatchPhase) {
    debug!(?phase, "batch phase");
}

fn describe_skills(skills: &[String]) -> String {
    let preview: Vec<&str> = skills.iter().take(3).map(String::as_str).collect();
    let ellipsis = if skills.len() > 3 { "..." } else { "" };
    format!(
        "Job description processed - Found {} skills: {}{ellipsis}",
        skills.len(),
        preview.join(", ")
    )
}

async fn process_document(
    store: &mut SessionStore,
    storage: &UploadStorage,
    extractor: &dyn TextExtractor,
    required_skills: &[String],
    file: IncomingFile,
) -> DocumentOutcome {
    if !has_extension(&file.filename, extractor.accepted_extension()) {
        return DocumentOutcome::UnsupportedFormat {
            filename: file.filename,
        };
    }

    let filename = dedup_filename(&sanitize_filename(&file.filename), |n| store.contains(n));

    let path = match storage.save(&filename, &file.bytes).await {
        Ok(path) => path,
        Err(e) => {
            warn!("Failed to store {filename}: {e}");
            return DocumentOutcome::ExtractionFailure {
                filename,
                reason: e.to_string(),
            };
        }
    };

    let text = match extractor.extract(&path).await {
        Ok(text) if !text.is_empty() => text,
        Ok(_) => {
            warn!("No text extracted from {filename}");
            storage.remove(&path).await;
            return DocumentOutcome::ExtractionFailure {
                filename,
                reason: "no extractable text".to_string(),
            };
        }
        Err(e) => {
            warn!("Error extracting text from {filename}: {e}");
            storage.remove(&path).await;
            return DocumentOutcome::ExtractionFailure {
                filename,
                reason: e.to_string(),
            };
        }
    };

    let result = score_document(&text, required_skills);
    let outcome = DocumentOutcome::Scored {
        filename: filename.clone(),
        score: result.score,
        match_level: result.match_level,
    };

    store.insert_scored(
        UploadedDocument {
            filename: filename.clone(),
            text,
            path,
            uploaded_at: chrono::Utc::now(),
        },
        ScoreResult { filename, result },
    );

    outcome
}

fn finalize(
    store: &mut SessionStore,
    limits: BatchLimits,
    required_skills: Vec<String>,
    outcomes: Vec<DocumentOutcome>,
) -> BatchReport {
    for outcome in &outcomes {
        match outcome {
            DocumentOutcome::Scored {
                filename,
                score,
                match_level,
            } => store.log(
                format!("Processed {filename} - Score: {score:.1}% ({match_level} match)"),
                Severity::Info,
            ),
            DocumentOutcome::ExtractionFailure { filename, reason } => {
                debug!("{filename} excluded: {reason}");
                store.log(
                    format!("Failed to extract text from {filename}"),
                    Severity::Error,
                );
            }
            DocumentOutcome::UnsupportedFormat { filename } => {
                debug!("Skipped {filename}: unsupported format");
            }
        }
    }

    let mut report = BatchReport {
        required_skills,
        outcomes,
        selected: Vec::new(),
        limits,
    };
    let processed = report.processed_count();

    if report.is_complete() {
        report.selected = store
            .top_candidates()
            .iter()
            .map(|s| s.filename.clone())
            .collect();
        store.log(
            format!(
                "Analysis complete: {processed} resumes processed, Top {TOP_N} selected: {}",
                report.selected.join(", ")
            ),
            Severity::Success,
        );
    } else if processed > 0 {
        store.log(
            format!(
                "Insufficient resumes: Only {processed} processed, need minimum {}",
                limits.min_files
            ),
            Severity::Warning,
        );
    }

    let failed = report.failed_filenames().len();
    if failed > 0 {
        store.log(
            format!("Warning: {failed} files failed to process"),
            Severity::Warning,
        );
    }

    info!(
        processed,
        failed,
        selected = report.selected.len(),
        "Batch complete"
    );
    report
}
