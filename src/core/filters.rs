use crate::models::{MatchScore, MatchTag};

/// Dashboard narrowing applied to an already ranked recommendation list
#[derive(Debug, Clone, Default)]
pub struct RecommendationFilter {
    /// Keep only recommendations carrying this tag
    pub tag: Option<MatchTag>,
    /// Case-insensitive search over name and major
    pub search: Option<String>,
}

impl RecommendationFilter {
    pub fn new(tag: Option<MatchTag>, search: Option<String>) -> Self {
        Self { tag, search }
    }

    pub fn is_empty(&self) -> bool {
        self.tag.is_none() && self.search.as_deref().map_or(true, str::is_empty)
    }

    /// Filter in place; relative order is preserved
    pub fn apply(&self, recommendations: Vec<MatchScore>) -> Vec<MatchScore> {
        if self.is_empty() {
            return recommendations;
        }

        recommendations
            .into_iter()
            .filter(|rec| matches_filter(rec, self))
            .collect()
    }
}

/// Check whether a recommendation passes both the tag and the search filter
#[inline]
pub fn matches_filter(recommendation: &MatchScore, filter: &RecommendationFilter) -> bool {
    if let Some(tag) = filter.tag {
        if !recommendation.has_tag(tag) {
            return false;
        }
    }

    // the term is used as typed; only an empty string disables search
    match filter.search.as_deref() {
        None | Some("") => true,
        Some(term) => matches_search(recommendation, term),
    }
}

#[inline]
fn matches_search(recommendation: &MatchScore, term: &str) -> bool {
    let needle = term.to_lowercase();
    recommendation.name.to_lowercase().contains(&needle)
        || recommendation.major.to_lowercase().contains(&needle)
}
