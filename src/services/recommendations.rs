use thiserror::Error;
use validator::Validate;
use crate::core::{Matcher, RecommendationFilter};
use crate::models::{RecommendRequest, RecommendResponse, RecommendationSummary, UserProfile};
use crate::services::profiles::{find_profile, ProfileError};

/// Errors that can occur while serving a recommendation request
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error(transparent)]
    Profile(#[from] ProfileError),
}

/// Serves recommendation requests against a candidate pool
///
/// Resolves the target from the pool, applies per-request weight overrides,
/// ranks, then narrows the ranked list with the request's filters.
#[derive(Debug, Clone)]
pub struct RecommendationService {
    matcher: Matcher,
    max_top_n: usize,
}

impl RecommendationService {
    pub fn new(matcher: Matcher, max_top_n: usize) -> Self {
        Self { matcher, max_top_n }
    }

    pub fn recommend(
        &self,
        req: &RecommendRequest,
        pool: &[UserProfile],
    ) -> Result<RecommendResponse, RecommendError> {
        req.validate()?;

        let target = find_profile(pool, &req.user_id)?;
        let top_n = req.top_n.min(self.max_top_n);

        tracing::info!("Finding teammates for user: {}, top_n: {}", target.id, top_n);

        let result = match req.weights {
            Some(weights) => Matcher::new(weights)
                .with_thresholds(*self.matcher.thresholds())
                .recommend(target, pool, top_n),
            None => self.matcher.recommend(target, pool, top_n),
        };

        // headline numbers describe the full ranking, not the filtered view
        let summary = RecommendationSummary::from_ranked(&result.matches);
        let filter = RecommendationFilter::new(req.tag, req.search.clone());
        let recommendations = filter.apply(result.matches);

        tracing::info!(
            "Returning {} recommendations for user {} (from {} candidates)",
            recommendations.len(),
            target.id,
            result.total_candidates
        );

        Ok(RecommendResponse {
            recommendations,
            summary,
            total_candidates: result.total_candidates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MatchTag, Personality, ScoringWeights, TimePreference};

    fn create_profile(id: &str, role: &str, skills: &[&str]) -> UserProfile {
        UserProfile {
            id: id.to_string(),
            name: format!("Student {}", id),
            major: "Statistics".to_string(),
            year: Some(2),
            intro: None,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            interests: vec![],
            time_pref: TimePreference { morning: true, ..TimePreference::default() },
            role_pref: role.to_string(),
            personality: Personality { agreeableness: 0.6, conscientiousness: 0.7, openness: 0.8 },
        }
    }

    fn create_request(user_id: &str, top_n: usize) -> RecommendRequest {
        RecommendRequest {
            user_id: user_id.to_string(),
            top_n,
            weights: None,
            tag: None,
            search: None,
        }
    }

    fn pool() -> Vec<UserProfile> {
        vec![
            create_profile("me", "개발", &["Python"]),
            create_profile("a", "개발", &["Python"]),
            create_profile("b", "디자인", &["Figma"]),
            create_profile("c", "개발", &[]),
        ]
    }

    #[test]
    fn test_recommend_excludes_target() {
        let service = RecommendationService::new(Matcher::default(), 100);

        let response = service.recommend(&create_request("me", 10), &pool()).unwrap();

        assert_eq!(response.total_candidates, 3);
        assert_eq!(response.recommendations.len(), 3);
        assert!(response.recommendations.iter().all(|r| r.user_id != "me"));
        assert_eq!(response.summary.count, 3);
        assert_eq!(response.summary.top_match_percent, response.recommendations[0].percent());
    }

    #[test]
    fn test_top_n_capped() {
        let service = RecommendationService::new(Matcher::default(), 2);

        let response = service.recommend(&create_request("me", 10), &pool()).unwrap();

        assert_eq!(response.recommendations.len(), 2);
    }

    #[test]
    fn test_unknown_user() {
        let service = RecommendationService::new(Matcher::default(), 100);

        let result = service.recommend(&create_request("ghost", 10), &pool());

        assert!(matches!(result, Err(RecommendError::Profile(ProfileError::NotFound(_)))));
    }

    #[test]
    fn test_tag_filter_after_ranking() {
        let service = RecommendationService::new(Matcher::default(), 100);
        let mut req = create_request("me", 10);
        req.tag = Some(MatchTag::Role);

        let response = service.recommend(&req, &pool()).unwrap();
        let ids: Vec<&str> = response.recommendations.iter().map(|r| r.user_id.as_str()).collect();

        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_summary_ignores_filters() {
        let service = RecommendationService::new(Matcher::default(), 100);
        let unfiltered = service.recommend(&create_request("me", 10), &pool()).unwrap();

        let mut req = create_request("me", 10);
        req.tag = Some(MatchTag::Role);
        req.search = Some("Student c".to_string());
        let filtered = service.recommend(&req, &pool()).unwrap();

        assert_eq!(filtered.recommendations.len(), 1);
        assert_eq!(filtered.summary, unfiltered.summary);
        assert_eq!(filtered.summary.count, 3);
    }

    #[test]
    fn test_weight_override_validated() {
        let service = RecommendationService::new(Matcher::default(), 100);
        let mut req = create_request("me", 10);
        req.weights = Some(ScoringWeights { skill: -1.0, ..ScoringWeights::default() });

        assert!(matches!(service.recommend(&req, &pool()), Err(RecommendError::Validation(_))));
    }
}
