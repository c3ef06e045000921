use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::{Profile, Role, Tournament, TournamentStatus, TournamentType};
use crate::ranking::AggregateRecord;

/// Raw tournament row from the data service
#[derive(Debug, Deserialize)]
pub struct TournamentRow {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub tournament_type: TournamentType,
    pub status: TournamentStatus,
    pub max_slots: u32,
    pub match_count: u32,
    pub start_date: String, // ISO 8601 string from the API
}

impl TournamentRow {
    pub fn into_tournament(self) -> Result<Tournament> {
        let start_date = parse_timestamp(&self.start_date)
            .with_context(|| format!("Failed to parse start_date for tournament {}", self.id))?;

        Ok(Tournament {
            id: self.id,
            title: self.title,
            description: self.description,
            tournament_type: self.tournament_type,
            status: self.status,
            max_slots: self.max_slots,
            match_count: self.match_count,
            start_date,
        })
    }
}

/// Raw leaderboard row from the data service, with the joined profile
#[derive(Debug, Deserialize)]
pub struct AggregateRow {
    pub tournament_id: String,
    pub user_id: Option<String>,
    pub squad_id: Option<String>,
    pub total_kills: u32,
    pub total_placement_points: u32,
    pub total_points: u32,
    pub matches_played: u32,
    pub best_placement: Option<u32>,
    pub profiles: Option<ProfileRow>,
}

impl AggregateRow {
    /// Map a wire row into a domain record. A row is either solo-scoped
    /// (user_id) or squad-scoped (squad_id); squad wins when both are set
    /// since squad tournaments still carry the uploader's user id.
    pub fn into_record(self) -> Result<AggregateRecord> {
        let subject_id = self
            .squad_id
            .or(self.user_id)
            .context("leaderboard row carries neither user_id nor squad_id")?;

        Ok(AggregateRecord {
            tournament_id: self.tournament_id,
            subject_id,
            total_kills: self.total_kills,
            total_placement_points: self.total_placement_points,
            total_points: self.total_points,
            matches_played: self.matches_played,
            best_placement: self.best_placement,
            display_profile: self.profiles.map(ProfileRow::into_profile),
        })
    }
}

/// Raw profile row from the data service
#[derive(Debug, Deserialize)]
pub struct ProfileRow {
    pub id: String,
    pub name: String,
    pub ff_uid: String,
    pub in_game_name: String,
    pub avatar_url: Option<String>,
    pub role: Role,
    pub is_banned: bool,
}

impl ProfileRow {
    pub fn into_profile(self) -> Profile {
        Profile {
            id: self.id,
            name: self.name,
            ff_uid: self.ff_uid,
            in_game_name: self.in_game_name,
            avatar_url: self.avatar_url,
            role: self.role,
            is_banned: self.is_banned,
        }
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(raw)?;
    Ok(parsed.with_timezone(&Utc))
}
