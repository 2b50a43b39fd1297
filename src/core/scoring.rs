use crate::models::{UserProfile, MatchScore, MatchTag, MatchThresholds, ScoreBreakdown, ScoringWeights};
use crate::core::similarity::{cosine_similarity, jaccard_similarity, time_compatibility};

/// Calculate the match score of a candidate against a target profile
///
/// Scoring formula:
/// score = (
///     time_compat * w.time +                # Shared availability slots
///     skill_overlap * w.skill +             # Jaccard over skills
///     interest_similarity * w.interest +    # Jaccard over interests
///     personality_compat * w.personality    # Cosine over personality vectors
/// )
///
/// The score lies in [0, w.sum()] since every sub-score is in [0, 1].
pub fn calculate_match_score(
    target: &UserProfile,
    candidate: &UserProfile,
    weights: &ScoringWeights,
    thresholds: &MatchThresholds,
) -> MatchScore {
    let details = score_breakdown(target, candidate);

    let score = weights.time * details.time_compat
        + weights.skill * details.skill_overlap
        + weights.interest * details.interest_similarity
        + weights.personality * details.personality_compat;

    let matched_on = derive_match_tags(&details, thresholds, target.role_pref == candidate.role_pref);

    MatchScore {
        user_id: candidate.id.clone(),
        name: candidate.name.clone(),
        major: candidate.major.clone(),
        score,
        matched_on,
        details,
    }
}

/// Compute the four component sub-scores
#[inline]
pub fn score_breakdown(target: &UserProfile, candidate: &UserProfile) -> ScoreBreakdown {
    ScoreBreakdown {
        time_compat: time_compatibility(&target.time_pref, &candidate.time_pref),
        skill_overlap: jaccard_similarity(&target.skills, &candidate.skills),
        interest_similarity: jaccard_similarity(&target.interests, &candidate.interests),
        personality_compat: cosine_similarity(&target.personality, &candidate.personality),
    }
}

/// Tags are evaluated independently; boundary values do not qualify
pub fn derive_match_tags(
    details: &ScoreBreakdown,
    thresholds: &MatchThresholds,
    same_role: bool,
) -> Vec<MatchTag> {
    let mut tags = Vec::with_capacity(MatchTag::ALL.len());

    if details.time_compat > thresholds.time {
        tags.push(MatchTag::Time);
    }
    if details.skill_overlap > thresholds.skill {
        tags.push(MatchTag::Skill);
    }
    if details.interest_similarity > thresholds.interest {
        tags.push(MatchTag::Interest);
    }
    if details.personality_compat > thresholds.personality {
        tags.push(MatchTag::Personality);
    }
    if same_role {
        tags.push(MatchTag::Role);
    }

    tags
}
