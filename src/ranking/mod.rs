pub mod aggregate;
pub mod engine;
pub mod types;

pub use aggregate::build_aggregate;
pub use engine::rank_snapshot;
pub use types::{AggregateRecord, RankedEntry, SubjectId, Tier, TournamentId};
