use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Player profile from the data service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub ff_uid: String,
    pub in_game_name: String,
    pub avatar_url: Option<String>,
    pub role: Role,
    pub is_banned: bool,
}

/// Closed set of community roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Organizer,
    Moderator,
    Player,
}

impl Role {
    pub fn can_manage_tournaments(&self) -> bool {
        matches!(self, Role::SuperAdmin | Role::Organizer)
    }

    pub fn can_approve_registrations(&self) -> bool {
        matches!(self, Role::SuperAdmin | Role::Organizer | Role::Moderator)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Organizer => "organizer",
            Role::Moderator => "moderator",
            Role::Player => "player",
        }
    }
}

/// Tournament data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tournament {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tournament_type: TournamentType,
    pub status: TournamentStatus,
    pub max_slots: u32,
    pub match_count: u32,
    pub start_date: DateTime<Utc>,
}

/// Whether subjects are ranked as individual players or as squads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentType {
    Solo,
    Squad,
}

impl TournamentType {
    pub fn as_str(&self) -> &str {
        match self {
            TournamentType::Solo => "solo",
            TournamentType::Squad => "squad",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentStatus {
    Upcoming,
    Live,
    Completed,
}

impl TournamentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TournamentStatus::Upcoming => "upcoming",
            TournamentStatus::Live => "live",
            TournamentStatus::Completed => "completed",
        }
    }
}

/// Raw per-match result for one subject, as uploaded by organizers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub placement: u32,
    pub kills: u32,
}
