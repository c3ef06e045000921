use serde::{Deserialize, Serialize};

use crate::domain::Profile;

pub type TournamentId = String;

/// Identifier of the ranked entity: a player id in solo tournaments,
/// a squad id in squad tournaments.
pub type SubjectId = String;

/// Accumulated stats for one subject across all matches of one tournament.
///
/// Produced upstream by the data service from raw match results; the
/// ranking pipeline only ever reads a point-in-time snapshot of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRecord {
    pub tournament_id: TournamentId,
    pub subject_id: SubjectId,
    pub total_kills: u32,
    pub total_placement_points: u32,
    pub total_points: u32,
    pub matches_played: u32,
    /// Best (lowest) finish across played matches; `None` when the subject
    /// has not played any match yet.
    pub best_placement: Option<u32>,
    /// Joined identity for rendering; absence is valid and renders as
    /// "Unknown Player".
    pub display_profile: Option<Profile>,
}

/// Cosmetic rank-range category, derived from rank alone and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Gold,
    Silver,
    Bronze,
    Standard,
}

impl Tier {
    pub fn from_rank(rank: u32) -> Self {
        match rank {
            1 => Tier::Gold,
            2 => Tier::Silver,
            3 => Tier::Bronze,
            _ => Tier::Standard,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Tier::Gold => "gold",
            Tier::Silver => "silver",
            Tier::Bronze => "bronze",
            Tier::Standard => "standard",
        }
    }
}

/// One entry of the ranked output, self-describing so a display layer
/// never recomputes ranking logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub rank: u32,
    pub tier: Tier,
    pub record: AggregateRecord,
}
