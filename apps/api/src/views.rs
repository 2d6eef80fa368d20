//! HTML views. Templates live in `templates/`; every page extends
//! `base.html`, which renders pending flash notices.

use askama::Template;

use crate::scoring::scorer::MatchLevel;
use crate::session::activity::ActivityEntry;
use crate::session::flash::Notice;
use crate::session::models::ScoreResult;
use crate::session::stats::SystemStats;

/// One ranked candidate, pre-formatted for display.
#[derive(Debug, Clone)]
pub struct CandidateRow {
    pub rank: usize,
    pub candidate_name: String,
    pub score: String,
    pub match_level: &'static str,
    pub level_class: &'static str,
    pub matched_skills: String,
}

impl CandidateRow {
    pub fn from_ranked(ranked: &[&ScoreResult]) -> Vec<CandidateRow> {
        ranked
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let level = s.result.match_level.as_str();
                CandidateRow {
                    rank: i + 1,
                    candidate_name: s.filename.clone(),
                    score: format!("{:.1}", s.result.score),
                    match_level: level,
                    level_class: match s.result.match_level {
                        MatchLevel::High => "level-high",
                        MatchLevel::Medium => "level-medium",
                        MatchLevel::Low => "level-low",
                    },
                    matched_skills: if s.result.matched_skills.is_empty() {
                        "-".to_string()
                    } else {
                        s.result.matched_skills.join(", ")
                    },
                }
            })
            .collect()
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub notices: Vec<Notice>,
    pub min_files: usize,
    pub max_files: usize,
}

#[derive(Template)]
#[template(path = "upload.html")]
pub struct UploadPage {
    pub notices: Vec<Notice>,
    pub min_files: usize,
    pub max_files: usize,
    pub job_description: String,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub notices: Vec<Notice>,
    pub stats: SystemStats,
    pub highest_score: String,
    pub total_resumes: usize,
    pub job_description: String,
    pub required_skills: String,
    pub activities: Vec<ActivityEntry>,
}

#[derive(Template)]
#[template(path = "scoring.html")]
pub struct ScoringPage {
    pub notices: Vec<Notice>,
    pub rows: Vec<CandidateRow>,
    pub job_description: String,
    pub total_resumes: usize,
}

#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsPage {
    pub notices: Vec<Notice>,
    pub rows: Vec<CandidateRow>,
    pub total_candidates: usize,
}
