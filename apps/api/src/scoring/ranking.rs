//! Ranking views over the current score collection. Both are recomputed on
//! every call; nothing is cached.

use crate::session::models::ScoreResult;

/// Number of candidates reported as "selected".
pub const TOP_N: usize = 3;

/// All results, highest score first. Ties keep insertion order.
pub fn rank_all(scores: &[ScoreResult]) -> Vec<&ScoreResult> {
    let mut ranked: Vec<&ScoreResult> = scores.iter().collect();
    ranked.sort_by(|a, b| b.result.score.total_cmp(&a.result.score));
    ranked
}

/// The first `n` entries of [`rank_all`].
pub fn rank_top(scores: &[ScoreResult], n: usize) -> Vec<&ScoreResult> {
    let mut ranked = rank_all(scores);
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::scorer::{MatchLevel, SkillScore};

    fn result(name: &str, score: f64) -> ScoreResult {
        ScoreResult {
            filename: name.to_string(),
            result: SkillScore {
                score,
                matched_skills: vec![],
                match_level: MatchLevel::from_score(score),
            },
        }
    }

    fn names(ranked: &[&ScoreResult]) -> Vec<String> {
        ranked.iter().map(|r| r.filename.clone()).collect()
    }

    #[test]
    fn test_rank_all_descending() {
        let scores = vec![result("a", 25.0), result("b", 75.0), result("c", 50.0)];
        assert_eq!(names(&rank_all(&scores)), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let scores = vec![result("a", 50.0), result("b", 50.0), result("c", 50.0)];
        assert_eq!(names(&rank_all(&scores)), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_top_is_prefix_of_full_ranking() {
        let scores: Vec<_> = (0..7)
            .map(|i| result(&format!("doc{i}"), (i * 13 % 100) as f64))
            .collect();
        let full = names(&rank_all(&scores));
        let top = names(&rank_top(&scores, TOP_N));
        assert_eq!(top.len(), 3);
        assert_eq!(&full[..3], &top[..]);
    }

    #[test]
    fn test_top_shorter_than_n() {
        let scores = vec![result("only", 10.0)];
        assert_eq!(rank_top(&scores, TOP_N).len(), 1);
        assert!(rank_top(&[], TOP_N).is_empty());
    }
}
