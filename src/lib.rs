//! TeamUp Match - teammate recommendations for university team projects
//!
//! This library ranks candidate students against a target profile using a
//! weighted blend of availability, skill, interest and personality similarity,
//! and provides the team formation flow that follows a recommendation.

pub mod config;
pub mod core;
pub mod models;
pub mod presentation;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, MatchResult, RecommendationFilter};
pub use crate::models::{UserProfile, MatchScore, MatchTag, ScoringWeights, MatchThresholds, RecommendRequest, RecommendResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let matcher = Matcher::default();
        assert_eq!(*matcher.weights(), ScoringWeights::default());
        assert_eq!(*matcher.thresholds(), MatchThresholds::STANDARD);
    }
}
