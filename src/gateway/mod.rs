pub mod models;
pub mod supabase;

pub use supabase::SupabaseGateway;

use anyhow::Result;
use std::future::Future;

use crate::domain::Tournament;
use crate::ranking::AggregateRecord;

/// Capability for reading tournament data from the hosted data service.
///
/// Injected into services rather than reached for through a module-level
/// singleton, so callers and tests choose the implementation.
pub trait DataGateway {
    /// All tournaments visible to the community, newest first.
    fn fetch_tournaments(&self) -> impl Future<Output = Result<Vec<Tournament>>> + Send;

    /// One tournament's aggregate snapshot, already scoped to that
    /// tournament but in no particular order.
    fn fetch_aggregates(
        &self,
        tournament_id: &str,
    ) -> impl Future<Output = Result<Vec<AggregateRecord>>> + Send;
}
