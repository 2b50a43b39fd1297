use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;
use validator::Validate;
use crate::models::{CreateTeamRequest, InviteRequest, Invitation, InvitationStatus, Team};
use crate::services::store::{KeyValueStore, StoreError, StoreKey};

/// Errors that can occur during team operations
#[derive(Debug, Error)]
pub enum TeamError {
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Team not found: {0}")]
    TeamNotFound(String),

    #[error("Invitation not found: {0}")]
    InvitationNotFound(String),

    #[error("User {user_id} is not a member of team {team_id}")]
    NotAMember { team_id: String, user_id: String },

    #[error("User {user_id} is already a member of team {team_id}")]
    AlreadyMember { team_id: String, user_id: String },

    #[error("User {candidate_id} already has a pending invitation to team {team_id}")]
    DuplicateInvitation { team_id: String, candidate_id: String },

    #[error("Invitation {0} is no longer pending")]
    InvitationResolved(String),
}

/// Team formation over an injected key-value store
///
/// Teams live under one key as a JSON array; each team's invitations live
/// under their own key. Operations are read-modify-write without locking
/// across calls, so a store must not be shared by concurrent writers.
pub struct TeamService<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> TeamService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create a team owned by the requester, who becomes its only member
    pub fn create_team(&self, req: CreateTeamRequest) -> Result<Team, TeamError> {
        req.validate()?;

        let team = Team {
            id: Uuid::new_v4().to_string(),
            name: req.name,
            course_id: req.course_id,
            course_name: req.course_name,
            owner_id: req.owner_id.clone(),
            members: vec![req.owner_id],
            created_at: Utc::now(),
        };

        let mut teams = self.load_teams()?;
        teams.push(team.clone());
        self.store.set_json(&StoreKey::teams(), &teams)?;

        tracing::info!("Created team {} ({}) for {}", team.id, team.name, team.owner_id);
        Ok(team)
    }

    pub fn get_team(&self, team_id: &str) -> Result<Team, TeamError> {
        self.load_teams()?
            .into_iter()
            .find(|t| t.id == team_id)
            .ok_or_else(|| TeamError::TeamNotFound(team_id.to_string()))
    }

    /// Teams the user belongs to, in creation order
    pub fn teams_for_member(&self, user_id: &str) -> Result<Vec<Team>, TeamError> {
        Ok(self
            .load_teams()?
            .into_iter()
            .filter(|t| t.is_member(user_id))
            .collect())
    }

    /// Invite a recommended candidate. The inviter must already be a member.
    pub fn invite_candidate(&self, req: InviteRequest) -> Result<Invitation, TeamError> {
        req.validate()?;

        let team = self.get_team(&req.team_id)?;
        if !team.is_member(&req.inviter_id) {
            return Err(TeamError::NotAMember {
                team_id: team.id,
                user_id: req.inviter_id,
            });
        }
        if team.is_member(&req.candidate_id) {
            return Err(TeamError::AlreadyMember {
                team_id: team.id,
                user_id: req.candidate_id,
            });
        }

        let mut invitations = self.invitations(&team.id)?;
        let already_pending = invitations
            .iter()
            .any(|i| i.candidate_id == req.candidate_id && i.status == InvitationStatus::Pending);
        if already_pending {
            return Err(TeamError::DuplicateInvitation {
                team_id: team.id,
                candidate_id: req.candidate_id,
            });
        }

        let invitation = Invitation {
            id: Uuid::new_v4().to_string(),
            team_id: team.id.clone(),
            inviter_id: req.inviter_id,
            candidate_id: req.candidate_id,
            status: InvitationStatus::Pending,
            created_at: Utc::now(),
        };

        invitations.push(invitation.clone());
        self.store.set_json(&StoreKey::invitations(&team.id), &invitations)?;

        tracing::info!(
            "Invited {} to team {} (by {})",
            invitation.candidate_id,
            team.id,
            invitation.inviter_id
        );
        Ok(invitation)
    }

    pub fn invitations(&self, team_id: &str) -> Result<Vec<Invitation>, TeamError> {
        Ok(self
            .store
            .get_json(&StoreKey::invitations(team_id))?
            .unwrap_or_default())
    }

    /// Accept a pending invitation, adding the candidate to the team
    pub fn accept_invitation(&self, team_id: &str, invitation_id: &str) -> Result<Team, TeamError> {
        let mut teams = self.load_teams()?;
        let team = teams
            .iter_mut()
            .find(|t| t.id == team_id)
            .ok_or_else(|| TeamError::TeamNotFound(team_id.to_string()))?;

        let mut invitations = self.invitations(team_id)?;
        let invitation = invitations
            .iter_mut()
            .find(|i| i.id == invitation_id)
            .ok_or_else(|| TeamError::InvitationNotFound(invitation_id.to_string()))?;

        if invitation.status != InvitationStatus::Pending {
            return Err(TeamError::InvitationResolved(invitation_id.to_string()));
        }

        invitation.status = InvitationStatus::Accepted;
        if !team.is_member(&invitation.candidate_id) {
            team.members.push(invitation.candidate_id.clone());
        }
        let updated = team.clone();

        // membership first: a failed status write leaves the invitation pending and retryable
        self.store.set_json(&StoreKey::teams(), &teams)?;
        self.store.set_json(&StoreKey::invitations(team_id), &invitations)?;

        tracing::info!("Team {} now has {} members", updated.id, updated.members.len());
        Ok(updated)
    }

    fn load_teams(&self) -> Result<Vec<Team>, TeamError> {
        Ok(self.store.get_json(&StoreKey::teams())?.unwrap_or_default())
    }
}
