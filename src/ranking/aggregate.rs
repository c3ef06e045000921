use crate::domain::MatchResult;
use crate::scoring;

use super::types::{AggregateRecord, SubjectId, TournamentId};

/// Derive the aggregate for one subject from its raw per-match results.
///
/// This normally happens upstream in the data service; it lives here as
/// well so organizers' raw uploads can be re-derived and checked locally.
/// Re-deriving from the same match list always yields the same record.
pub fn build_aggregate(
    tournament_id: TournamentId,
    subject_id: SubjectId,
    matches: &[MatchResult],
) -> AggregateRecord {
    let total_kills: u32 = matches.iter().map(|m| m.kills).sum();
    let total_placement_points: u32 = matches
        .iter()
        .map(|m| scoring::placement_points(m.placement))
        .sum();

    AggregateRecord {
        tournament_id,
        subject_id,
        total_kills,
        total_placement_points,
        total_points: total_kills * scoring::kill_points() + total_placement_points,
        matches_played: matches.len() as u32,
        best_placement: matches.iter().map(|m| m.placement).min(),
        display_profile: None,
    }
}
