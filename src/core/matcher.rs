use std::cmp::Ordering;
use crate::models::{UserProfile, MatchScore, MatchThresholds, ScoringWeights};
use crate::core::scoring::calculate_match_score;

/// Result of a recommendation run
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<MatchScore>,
    /// Candidates scored, after excluding the target itself
    pub total_candidates: usize,
}

/// Ranks a candidate pool against a target profile
///
/// # Pipeline Stages
/// 1. Self exclusion (candidate id equal to the target id)
/// 2. Weighted scoring of every remaining candidate
/// 3. Stable descending sort by score
/// 4. Truncation to the requested count
///
/// The matcher holds no mutable state and can be shared across threads.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    thresholds: MatchThresholds,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            thresholds: MatchThresholds::STANDARD,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default())
    }

    pub fn with_thresholds(mut self, thresholds: MatchThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn thresholds(&self) -> &MatchThresholds {
        &self.thresholds
    }

    /// Recommend teammates for `target` from `pool`
    ///
    /// # Arguments
    /// * `target` - Profile recommendations are made for
    /// * `pool` - Candidate pool in input order; may contain the target
    /// * `top_n` - Maximum number of recommendations; 0 yields none
    ///
    /// # Returns
    /// MatchResult with at most `top_n` scores, highest first. Equal scores
    /// keep their pool order.
    pub fn recommend(
        &self,
        target: &UserProfile,
        pool: &[UserProfile],
        top_n: usize,
    ) -> MatchResult {
        let mut scored: Vec<MatchScore> = pool
            .iter()
            .filter(|candidate| candidate.id != target.id)
            .map(|candidate| {
                calculate_match_score(target, candidate, &self.weights, &self.thresholds)
            })
            .collect();

        let total_candidates = scored.len();

        // sort_by is stable, ties keep pool order
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored.truncate(top_n);

        tracing::trace!(
            "Ranked {} candidates for {}, returning {}",
            total_candidates,
            target.id,
            scored.len()
        );

        MatchResult {
            matches: scored,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
