// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;
pub mod similarity;

pub use filters::{matches_filter, RecommendationFilter};
pub use matcher::{Matcher, MatchResult};
pub use scoring::{calculate_match_score, derive_match_tags, score_breakdown};
pub use similarity::{cosine_similarity, jaccard_similarity, time_compatibility};
