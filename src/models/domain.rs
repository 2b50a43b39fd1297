use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Student profile with the attributes used for teammate matching
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserProfile {
    #[validate(length(min = 1))]
    pub id: String,
    pub name: String,
    pub major: String,
    #[serde(default)]
    pub year: Option<u8>,
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(rename = "timePref", default)]
    pub time_pref: TimePreference,
    #[serde(rename = "rolePref")]
    pub role_pref: String,
    #[validate(nested)]
    pub personality: Personality,
}

/// One of the four fixed availability slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 4] = [
        TimeSlot::Morning,
        TimeSlot::Afternoon,
        TimeSlot::Evening,
        TimeSlot::Night,
    ];
}

/// Availability per time slot. Any subset may be set, including none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePreference {
    #[serde(default)]
    pub morning: bool,
    #[serde(default)]
    pub afternoon: bool,
    #[serde(default)]
    pub evening: bool,
    #[serde(default)]
    pub night: bool,
}

impl TimePreference {
    #[inline]
    pub fn is_available(&self, slot: TimeSlot) -> bool {
        match slot {
            TimeSlot::Morning => self.morning,
            TimeSlot::Afternoon => self.afternoon,
            TimeSlot::Evening => self.evening,
            TimeSlot::Night => self.night,
        }
    }
}

/// Personality vector, every component in [0, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Personality {
    #[validate(range(min = 0.0, max = 1.0))]
    pub agreeableness: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub conscientiousness: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub openness: f64,
}

impl Personality {
    /// Components in the fixed order: agreeableness, conscientiousness, openness
    #[inline]
    pub fn as_array(&self) -> [f64; 3] {
        [self.agreeableness, self.conscientiousness, self.openness]
    }
}

/// Similarity dimension a candidate matched on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTag {
    Time,
    Skill,
    Interest,
    Personality,
    Role,
}

impl MatchTag {
    pub const ALL: [MatchTag; 5] = [
        MatchTag::Time,
        MatchTag::Skill,
        MatchTag::Interest,
        MatchTag::Personality,
        MatchTag::Role,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchTag::Time => "time",
            MatchTag::Skill => "skill",
            MatchTag::Interest => "interest",
            MatchTag::Personality => "personality",
            MatchTag::Role => "role",
        }
    }
}

impl fmt::Display for MatchTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchTag {
    type Err = String;

    /// Accepts the identifier or the Korean display label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "time" | "시간대" => Ok(MatchTag::Time),
            "skill" | "스킬" => Ok(MatchTag::Skill),
            "interest" | "관심사" => Ok(MatchTag::Interest),
            "personality" | "성향" => Ok(MatchTag::Personality),
            "role" | "역할" => Ok(MatchTag::Role),
            other => Err(format!(
                "unknown match tag '{}', expected one of: time, skill, interest, personality, role",
                other
            )),
        }
    }
}

/// Per-dimension sub-scores behind a match score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    #[serde(rename = "timeCompat")]
    pub time_compat: f64,
    #[serde(rename = "skillOverlap")]
    pub skill_overlap: f64,
    #[serde(rename = "interestSimilarity")]
    pub interest_similarity: f64,
    #[serde(rename = "personalityCompat")]
    pub personality_compat: f64,
}

/// Scored recommendation for one candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    pub major: String,
    pub score: f64,
    #[serde(rename = "matchedOn")]
    pub matched_on: Vec<MatchTag>,
    pub details: ScoreBreakdown,
}

impl MatchScore {
    /// Score as a rounded percentage, as shown on recommendation cards
    pub fn percent(&self) -> u32 {
        (self.score * 100.0).round().max(0.0) as u32
    }

    pub fn has_tag(&self, tag: MatchTag) -> bool {
        self.matched_on.contains(&tag)
    }
}

/// Scoring weights. Defaults sum to 1 but callers may supply any non-negative set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct ScoringWeights {
    #[validate(range(min = 0.0))]
    pub time: f64,
    #[validate(range(min = 0.0))]
    pub skill: f64,
    #[validate(range(min = 0.0))]
    pub interest: f64,
    #[validate(range(min = 0.0))]
    pub personality: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.time + self.skill + self.interest + self.personality
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            time: 0.3,
            skill: 0.3,
            interest: 0.2,
            personality: 0.2,
        }
    }
}

/// Sub-score thresholds for `matchedOn` tags. A sub-score must strictly exceed its threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchThresholds {
    pub time: f64,
    pub skill: f64,
    pub interest: f64,
    pub personality: f64,
}

impl MatchThresholds {
    pub const STANDARD: MatchThresholds = MatchThresholds {
        time: 0.5,
        skill: 0.3,
        interest: 0.3,
        personality: 0.7,
    };
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Project team formed around a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(rename = "courseId")]
    pub course_id: String,
    #[serde(rename = "courseName")]
    pub course_name: String,
    #[serde(rename = "ownerId")]
    pub owner_id: String,
    pub members: Vec<String>,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Team {
    pub fn is_member(&self, user_id: &str) -> bool {
        self.members.iter().any(|m| m == user_id)
    }
}

/// Invitation of a recommended candidate into a team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invitation {
    pub id: String,
    #[serde(rename = "teamId")]
    pub team_id: String,
    #[serde(rename = "inviterId")]
    pub inviter_id: String,
    #[serde(rename = "candidateId")]
    pub candidate_id: String,
    pub status: InvitationStatus,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvitationStatus {
    Pending,
    Accepted,
}
