use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{MatchTag, ScoringWeights};

/// Request for teammate recommendations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[serde(default = "default_top_n", rename = "topN")]
    pub top_n: usize,
    /// Overrides the configured weights when present
    #[validate(nested)]
    #[serde(default)]
    pub weights: Option<ScoringWeights>,
    #[serde(default)]
    pub tag: Option<MatchTag>,
    #[serde(default)]
    pub search: Option<String>,
}

fn default_top_n() -> usize {
    10
}

/// Request to create a team
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTeamRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "ownerId")]
    pub owner_id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    #[serde(rename = "courseId")]
    pub course_id: String,
    #[serde(rename = "courseName", default)]
    pub course_name: String,
}

/// Request to invite a recommended candidate into a team
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InviteRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "teamId")]
    pub team_id: String,
    #[validate(length(min = 1))]
    #[serde(rename = "inviterId")]
    pub inviter_id: String,
    #[validate(length(min = 1))]
    #[serde(rename = "candidateId")]
    pub candidate_id: String,
}
