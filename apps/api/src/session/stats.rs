use serde::Serialize;

use crate::scoring::ranking::TOP_N;
use crate::session::models::ScoreResult;

/// Aggregate view over the score collection. Never stored; always derived.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemStats {
    pub total_uploaded: usize,
    pub total_selected: usize,
    pub highest_score: f64,
}

/// Derives stats from the current scores. Candidates only count as selected
/// once at least `min_files` documents were processed.
pub fn compute_stats(scores: &[ScoreResult], min_files: usize) -> SystemStats {
    let total = scores.len();
    let total_selected = if total >= min_files {
        total.min(TOP_N)
    } else {
        0
    };
    let highest_score = scores
        .iter()
        .map(|s| s.result.score)
        .fold(0.0_f64, f64::max);

    SystemStats {
        total_uploaded: total,
        total_selected,
        highest_score,
    }
}
