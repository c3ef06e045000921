use std::cmp::Ordering;
use std::collections::HashSet;

use log::debug;

use crate::errors::RankingError;
use crate::scoring;

use super::types::{AggregateRecord, RankedEntry, Tier};

/// Sort one tournament's aggregate snapshot and assign display ranks.
///
/// The snapshot may arrive in any order. Sort key precedence:
/// total points desc, then total kills desc, then best placement asc
/// (subjects with no played match sort after every subject with one),
/// then subject id asc as the final tie-break.
///
/// Ranks are dense and positional: the sorted order is numbered 1..N with
/// no shared ranks, even for entries tied on every scoring key. The
/// subject-id tie-break makes that numbering deterministic. This is a
/// deliberate policy choice favoring a stable, gap-free display list over
/// Olympic-style tied ranking.
pub fn rank_snapshot(
    mut records: Vec<AggregateRecord>,
) -> Result<Vec<RankedEntry>, RankingError> {
    validate_snapshot(&records)?;

    records.sort_by(compare_records);
    debug!("Ranked {} aggregate records", records.len());

    Ok(assign_ranks(records))
}

/// Reject snapshots the engine must not guess about: duplicate subjects
/// and rows whose own fields contradict each other.
fn validate_snapshot(records: &[AggregateRecord]) -> Result<(), RankingError> {
    let mut seen = HashSet::new();

    for record in records {
        if !seen.insert(record.subject_id.as_str()) {
            return Err(RankingError::DuplicateSubject {
                tournament_id: record.tournament_id.clone(),
                subject_id: record.subject_id.clone(),
            });
        }
        check_record(record)?;
    }

    Ok(())
}

fn check_record(record: &AggregateRecord) -> Result<(), RankingError> {
    let expected = record.total_kills * scoring::kill_points() + record.total_placement_points;
    if record.total_points != expected {
        return Err(inconsistent(
            record,
            format!(
                "total_points is {} but kills and placement sum to {}",
                record.total_points, expected
            ),
        ));
    }

    if record.best_placement == Some(0) {
        return Err(inconsistent(record, "best_placement of 0".to_string()));
    }

    // best_placement is defined exactly when at least one match was played.
    if record.matches_played == 0 && record.best_placement.is_some() {
        return Err(inconsistent(
            record,
            "best_placement present with zero matches played".to_string(),
        ));
    }

    if record.matches_played > 0 && record.best_placement.is_none() {
        return Err(inconsistent(
            record,
            "best_placement missing despite played matches".to_string(),
        ));
    }

    Ok(())
}

fn inconsistent(record: &AggregateRecord, reason: String) -> RankingError {
    RankingError::InconsistentRecord {
        subject_id: record.subject_id.clone(),
        reason,
    }
}

fn compare_records(a: &AggregateRecord, b: &AggregateRecord) -> Ordering {
    b.total_points
        .cmp(&a.total_points)
        .then_with(|| b.total_kills.cmp(&a.total_kills))
        .then_with(|| effective_best_placement(a).cmp(&effective_best_placement(b)))
        .then_with(|| a.subject_id.cmp(&b.subject_id))
}

/// Best placement as a totally ordered key: any played placement beats
/// "never played", and lower placements beat higher ones.
fn effective_best_placement(record: &AggregateRecord) -> (bool, u32) {
    match record.best_placement {
        Some(placement) => (false, placement),
        None => (true, 0),
    }
}

fn assign_ranks(records: Vec<AggregateRecord>) -> Vec<RankedEntry> {
    records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| {
            let rank = (idx + 1) as u32;
            RankedEntry {
                rank,
                tier: Tier::from_rank(rank),
                record,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a consistent record: placement points are whatever is left of
    /// `points` after kills are paid out at one point each.
    fn record(subject_id: &str, points: u32, kills: u32, best: Option<u32>) -> AggregateRecord {
        AggregateRecord {
            tournament_id: "t1".to_string(),
            subject_id: subject_id.to_string(),
            total_kills: kills,
            total_placement_points: points - kills,
            total_points: points,
            matches_played: if best.is_some() { 3 } else { 0 },
            best_placement: best,
            display_profile: None,
        }
    }

    fn subject_order(entries: &[RankedEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.record.subject_id.as_str()).collect()
    }

    #[test]
    fn test_orders_by_total_points() {
        let entries = rank_snapshot(vec![
            record("a", 40, 12, Some(2)),
            record("b", 51, 15, Some(1)),
        ])
        .unwrap();

        assert_eq!(subject_order(&entries), vec!["b", "a"]);
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[1].rank, 2);
    }

    #[test]
    fn test_full_tie_broken_by_subject_id() {
        let entries = rank_snapshot(vec![
            record("b", 51, 15, Some(1)),
            record("a", 51, 15, Some(1)),
        ])
        .unwrap();

        // Never equal ranks, even on a full tie.
        assert_eq!(subject_order(&entries), vec!["a", "b"]);
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[1].rank, 2);
    }

    #[test]
    fn test_kills_break_point_ties() {
        let entries = rank_snapshot(vec![
            record("a", 30, 5, Some(1)),
            record("b", 30, 20, Some(4)),
        ])
        .unwrap();

        assert_eq!(subject_order(&entries), vec!["b", "a"]);
    }

    #[test]
    fn test_best_placement_breaks_kill_ties() {
        let entries = rank_snapshot(vec![
            record("a", 30, 10, Some(5)),
            record("b", 30, 10, Some(2)),
        ])
        .unwrap();

        assert_eq!(subject_order(&entries), vec!["b", "a"]);
    }

    #[test]
    fn test_zero_participation_ranks_last_among_tied() {
        let entries = rank_snapshot(vec![
            record("a", 0, 0, None),
            record("b", 0, 0, Some(8)),
            record("c", 0, 0, Some(3)),
        ])
        .unwrap();

        assert_eq!(subject_order(&entries), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_empty_snapshot() {
        let entries = rank_snapshot(Vec::new()).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_length_preserved_and_ranks_gapless() {
        let entries = rank_snapshot(vec![
            record("d", 10, 2, Some(6)),
            record("a", 51, 15, Some(1)),
            record("c", 28, 8, Some(4)),
            record("b", 40, 12, Some(2)),
        ])
        .unwrap();

        assert_eq!(entries.len(), 4);
        let ranks: Vec<u32> = entries.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_deterministic_under_input_reordering() {
        let mut records = vec![
            record("d", 10, 2, Some(6)),
            record("a", 51, 15, Some(1)),
            record("c", 51, 15, Some(1)),
            record("b", 40, 12, Some(2)),
        ];

        let first = rank_snapshot(records.clone()).unwrap();
        records.reverse();
        let second = rank_snapshot(records).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_output_is_monotonic() {
        let entries = rank_snapshot(vec![
            record("e", 0, 0, None),
            record("a", 51, 15, Some(1)),
            record("c", 40, 12, Some(4)),
            record("b", 40, 12, Some(2)),
            record("d", 40, 9, Some(1)),
        ])
        .unwrap();

        for pair in entries.windows(2) {
            assert_ne!(
                compare_records(&pair[0].record, &pair[1].record),
                Ordering::Greater
            );
        }
    }

    #[test]
    fn test_tiers_follow_ranks() {
        let entries = rank_snapshot(vec![
            record("a", 51, 15, Some(1)),
            record("b", 40, 12, Some(2)),
            record("c", 28, 8, Some(4)),
            record("d", 10, 2, Some(6)),
            record("e", 5, 1, Some(9)),
        ])
        .unwrap();

        let tiers: Vec<Tier> = entries.iter().map(|e| e.tier).collect();
        assert_eq!(
            tiers,
            vec![Tier::Gold, Tier::Silver, Tier::Bronze, Tier::Standard, Tier::Standard]
        );
    }

    #[test]
    fn test_duplicate_subject_is_rejected() {
        let result = rank_snapshot(vec![
            record("a", 51, 15, Some(1)),
            record("a", 40, 12, Some(2)),
        ]);

        assert!(matches!(
            result,
            Err(RankingError::DuplicateSubject { ref subject_id, .. }) if subject_id == "a"
        ));
    }

    #[test]
    fn test_inconsistent_points_are_rejected() {
        let mut bad = record("a", 51, 15, Some(1));
        bad.total_points = 50;

        let result = rank_snapshot(vec![bad]);
        assert!(matches!(
            result,
            Err(RankingError::InconsistentRecord { ref subject_id, .. }) if subject_id == "a"
        ));
    }

    #[test]
    fn test_phantom_best_placement_is_rejected() {
        let mut bad = record("a", 0, 0, None);
        bad.best_placement = Some(1);

        assert!(rank_snapshot(vec![bad]).is_err());
    }

    #[test]
    fn test_missing_best_placement_with_played_matches_is_rejected() {
        let mut bad = record("a", 30, 10, Some(2));
        bad.best_placement = None;

        let result = rank_snapshot(vec![bad]);
        assert!(matches!(
            result,
            Err(RankingError::InconsistentRecord { ref subject_id, .. }) if subject_id == "a"
        ));
    }
}
