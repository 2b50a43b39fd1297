use serde::{Deserialize, Serialize};
use crate::models::domain::MatchScore;

/// Response for a recommendation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<MatchScore>,
    pub summary: RecommendationSummary,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Headline numbers shown above the recommendation list, taken before any filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSummary {
    pub count: usize,
    #[serde(rename = "topMatchPercent")]
    pub top_match_percent: u32,
}

impl RecommendationSummary {
    /// Recommendations are expected in ranked order
    pub fn from_ranked(recommendations: &[MatchScore]) -> Self {
        Self {
            count: recommendations.len(),
            top_match_percent: recommendations.first().map(|m| m.percent()).unwrap_or(0),
        }
    }
}
