//! JSON mirrors of the HTML views. Read-only; these never touch the
//! activity log.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::scoring::scorer::MatchLevel;
use crate::session::activity::ActivityEntry;
use crate::session::models::ScoreResult;
use crate::session::stats::SystemStats;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ActivitiesResponse {
    pub activities: Vec<ActivityEntry>,
}

#[derive(Debug, Serialize)]
pub struct ScoringRow {
    pub candidate_name: String,
    pub matched_skills: Vec<String>,
    pub score: f64,
    pub match_level: MatchLevel,
}

#[derive(Debug, Serialize)]
pub struct ScoringResponse {
    pub results: Vec<ScoringRow>,
}

#[derive(Debug, Serialize)]
pub struct ResultRow {
    pub candidate_name: String,
    pub final_score: f64,
    pub match_level: MatchLevel,
    pub matched_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ResultsResponse {
    pub results: Vec<ResultRow>,
    pub total_uploaded: usize,
    pub top_3_selected: usize,
}

impl From<&ScoreResult> for ScoringRow {
    fn from(s: &ScoreResult) -> Self {
        ScoringRow {
            candidate_name: s.filename.clone(),
            matched_skills: s.result.matched_skills.clone(),
            score: s.result.score,
            match_level: s.result.match_level,
        }
    }
}

impl From<&ScoreResult> for ResultRow {
    fn from(s: &ScoreResult) -> Self {
        ResultRow {
            candidate_name: s.filename.clone(),
            final_score: s.result.score,
            match_level: s.result.match_level,
            matched_skills: s.result.matched_skills.clone(),
        }
    }
}

/// GET /api/stats
pub async fn stats(State(state): State<AppState>) -> Json<SystemStats> {
    let store = state.store.lock().await;
    Json(store.stats(state.config.min_files))
}

/// GET /api/recent-activities
pub async fn recent_activities(State(state): State<AppState>) -> Json<ActivitiesResponse> {
    let store = state.store.lock().await;
    Json(ActivitiesResponse {
        activities: store.activities(),
    })
}

/// GET /api/scoring-data
///
/// Full ranking, highest score first.
pub async fn scoring_data(State(state): State<AppState>) -> Json<ScoringResponse> {
    let store = state.store.lock().await;
    let results = store.ranking().into_iter().map(ScoringRow::from).collect();
    Json(ScoringResponse { results })
}

/// GET /api/results-data
///
/// Top 3 of the ranking plus the total number of scored documents.
pub async fn results_data(State(state): State<AppState>) -> Json<ResultsResponse> {
    let store = state.store.lock().await;
    let results: Vec<ResultRow> = store
        .top_candidates()
        .into_iter()
        .map(ResultRow::from)
        .collect();
    Json(ResultsResponse {
        total_uploaded: store.scores().len(),
        top_3_selected: results.len(),
        results,
    })
}
