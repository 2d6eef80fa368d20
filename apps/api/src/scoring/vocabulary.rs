//! Skill vocabulary: the fixed, ordered list of skill phrases a job
//! description is matched against.
//!
//! Matching is plain substring containment over normalized text, so a short
//! entry can match inside a longer word ("ai" inside "maintain"). Output order
//! always follows the vocabulary, never the input.

use crate::scoring::normalize::normalize_text;

/// Known skills, in match-output order. Multi-word phrases are allowed and
/// must already be in normalized form.
pub const SKILL_VOCABULARY: &[&str] = &[
    "python",
    "java",
    "javascript",
    "react",
    "angular",
    "vue",
    "nodejs",
    "express",
    "html",
    "css",
    "bootstrap",
    "jquery",
    "php",
    "laravel",
    "django",
    "flask",
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "redis",
    "elasticsearch",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "jenkins",
    "git",
    "github",
    "machine learning",
    "ai",
    "data science",
    "pandas",
    "numpy",
    "tensorflow",
    "communication",
    "teamwork",
    "leadership",
    "problem solving",
    "analytical",
];

/// Returns the entries of `vocabulary` contained in the normalized
/// `job_description`, in vocabulary order.
pub fn match_vocabulary(job_description: &str, vocabulary: &[&str]) -> Vec<String> {
    let normalized = normalize_text(job_description);
    if normalized.is_empty() {
        return Vec::new();
    }

    vocabulary
        .iter()
        .filter(|skill| normalized.contains(**skill))
        .map(|skill| skill.to_string())
        .collect()
}

/// Required skills for a job description against the built-in vocabulary.
pub fn extract_required_skills(job_description: &str) -> Vec<String> {
    match_vocabulary(job_description, SKILL_VOCABULARY)
}
