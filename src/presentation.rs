//! Text rendering of recommendations. Tag display labels are localized here,
//! never inside the scorer.

use serde::Deserialize;
use std::fmt::Write;
use crate::models::{MatchScore, MatchTag, RecommendResponse, Team, Invitation};

/// Score percentage at or above which a card is marked as a high match
pub const HIGH_MATCH_PERCENT: u32 = 80;

/// Tags shown per card before collapsing into a `+N` counter
const VISIBLE_TAGS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ko,
    En,
}

pub fn tag_label(tag: MatchTag, locale: Locale) -> &'static str {
    match (locale, tag) {
        (Locale::Ko, MatchTag::Time) => "시간대",
        (Locale::Ko, MatchTag::Skill) => "스킬",
        (Locale::Ko, MatchTag::Interest) => "관심사",
        (Locale::Ko, MatchTag::Personality) => "성향",
        (Locale::Ko, MatchTag::Role) => "역할",
        (Locale::En, tag) => tag.as_str(),
    }
}

/// Tag labels for a card: the first three, then `+N` for the rest
pub fn card_tags(recommendation: &MatchScore, locale: Locale) -> Vec<String> {
    let mut labels: Vec<String> = recommendation
        .matched_on
        .iter()
        .take(VISIBLE_TAGS)
        .map(|tag| tag_label(*tag, locale).to_string())
        .collect();

    let hidden = recommendation.matched_on.len().saturating_sub(VISIBLE_TAGS);
    if hidden > 0 {
        labels.push(format!("+{}", hidden));
    }

    labels
}

/// Render one recommendation as a ranked line plus its score breakdown
pub fn render_recommendation(rank: usize, recommendation: &MatchScore, locale: Locale) -> String {
    let percent = recommendation.percent();
    let marker = if percent >= HIGH_MATCH_PERCENT { " *" } else { "" };
    let d = &recommendation.details;

    format!(
        "{:>2}. {} ({}) {}%{} [{}]\n    time {:.2} | skill {:.2} | interest {:.2} | personality {:.2}",
        rank,
        recommendation.name,
        recommendation.major,
        percent,
        marker,
        card_tags(recommendation, locale).join(", "),
        d.time_compat,
        d.skill_overlap,
        d.interest_similarity,
        d.personality_compat,
    )
}

pub fn render_recommendations(response: &RecommendResponse, locale: Locale) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} recommendations (top match {}%, {} candidates considered)",
        response.summary.count, response.summary.top_match_percent, response.total_candidates
    );

    if response.recommendations.len() != response.summary.count {
        let _ = writeln!(out, "Showing {} after filters", response.recommendations.len());
    }

    if response.recommendations.is_empty() {
        out.push_str("No matching teammates found.\n");
        return out;
    }

    for (i, rec) in response.recommendations.iter().enumerate() {
        let _ = writeln!(out, "{}", render_recommendation(i + 1, rec, locale));
    }

    out
}

pub fn render_team(team: &Team) -> String {
    format!(
        "{} [{}] {} - {} ({} members, owner {})",
        team.name,
        team.id,
        team.course_id,
        team.course_name,
        team.members.len(),
        team.owner_id
    )
}

pub fn render_invitation(invitation: &Invitation) -> String {
    format!(
        "{} {} -> {} ({:?}, {})",
        invitation.id,
        invitation.inviter_id,
        invitation.candidate_id,
        invitation.status,
        invitation.created_at.format("%Y-%m-%d %H:%M")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RecommendationSummary, ScoreBreakdown};

    fn recommendation(score: f64, tags: Vec<MatchTag>) -> MatchScore {
        MatchScore {
            user_id: "user2".to_string(),
            name: "박서연".to_string(),
            major: "산업디자인".to_string(),
            score,
            matched_on: tags,
            details: ScoreBreakdown {
                time_compat: 0.5,
                skill_overlap: 0.0,
                interest_similarity: 0.2,
                personality_compat: 0.98,
            },
        }
    }

    #[test]
    fn test_tag_labels() {
        assert_eq!(tag_label(MatchTag::Time, Locale::Ko), "시간대");
        assert_eq!(tag_label(MatchTag::Role, Locale::Ko), "역할");
        assert_eq!(tag_label(MatchTag::Interest, Locale::En), "interest");
    }

    #[test]
    fn test_card_tags_overflow() {
        let rec = recommendation(0.9, MatchTag::ALL.to_vec());

        assert_eq!(card_tags(&rec, Locale::Ko), vec!["시간대", "스킬", "관심사", "+2"]);
    }

    #[test]
    fn test_high_match_marker() {
        let high = render_recommendation(1, &recommendation(0.8, vec![]), Locale::En);
        let low = render_recommendation(2, &recommendation(0.79, vec![]), Locale::En);

        assert!(high.contains("80% *"));
        assert!(low.contains("79% ["));
    }

    #[test]
    fn test_header_reports_filtered_count_separately() {
        let response = RecommendResponse {
            recommendations: vec![recommendation(0.6, vec![MatchTag::Role])],
            summary: RecommendationSummary { count: 4, top_match_percent: 72 },
            total_candidates: 4,
        };

        let text = render_recommendations(&response, Locale::En);

        assert!(text.starts_with("4 recommendations (top match 72%, 4 candidates considered)\n"));
        assert!(text.contains("Showing 1 after filters\n"));
    }
}
