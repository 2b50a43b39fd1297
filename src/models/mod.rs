// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    UserProfile, TimePreference, TimeSlot, Personality, MatchTag, MatchScore, ScoreBreakdown,
    ScoringWeights, MatchThresholds, Team, Invitation, InvitationStatus,
};
pub use requests::{RecommendRequest, CreateTeamRequest, InviteRequest};
pub use responses::{RecommendResponse, RecommendationSummary};
