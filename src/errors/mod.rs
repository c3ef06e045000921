use thiserror::Error;

/// Errors surfaced by the leaderboard ranking pipeline.
///
/// All of these are recoverable at the caller boundary; a ranking failure
/// for one tournament never takes down any other screen or operation.
#[derive(Debug, Error)]
pub enum RankingError {
    /// The data gateway could not supply a snapshot. The underlying cause
    /// is carried unmodified; retry policy belongs to the gateway, not here.
    #[error("failed to fetch aggregates for tournament {tournament_id}")]
    UpstreamFetch {
        tournament_id: String,
        #[source]
        source: anyhow::Error,
    },

    /// Two aggregate rows for the same subject in one tournament snapshot.
    /// The engine refuses to guess which one is right.
    #[error("duplicate subject {subject_id} in snapshot for tournament {tournament_id}")]
    DuplicateSubject {
        tournament_id: String,
        subject_id: String,
    },

    /// A single row whose fields contradict each other, e.g. total_points
    /// not matching the kill/placement sum. Upstream math is not repaired.
    #[error("inconsistent record for subject {subject_id}: {reason}")]
    InconsistentRecord { subject_id: String, reason: String },
}

/// Add context to fetch errors
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}
