use log::{info, warn};

use crate::cache::Cache;
use crate::errors::RankingError;
use crate::gateway::DataGateway;
use crate::ranking::{self, RankedEntry};

/// Orchestrates one leaderboard refresh: fetch the snapshot, rank it,
/// remember the result, hand the ranked list to the caller.
///
/// Every refresh re-fetches and re-sorts from scratch; the cache only
/// backs the fallback path when the data service is unreachable.
pub struct LeaderboardService<G: DataGateway> {
    gateway: G,
    cache: Cache,
}

impl<G: DataGateway> LeaderboardService<G> {
    pub fn new(gateway: G, cache: Cache) -> Self {
        Self { gateway, cache }
    }

    /// Fetch and rank one tournament's leaderboard.
    ///
    /// With `allow_fallback`, an upstream fetch failure falls back to the
    /// last ranked list cached for this tournament. Integrity violations
    /// never fall back: a stale-but-correct list is acceptable, a
    /// silently-wrong one is not.
    pub async fn ranked_leaderboard(
        &self,
        tournament_id: &str,
        allow_fallback: bool,
    ) -> Result<Vec<RankedEntry>, RankingError> {
        match self.fetch_and_rank(tournament_id).await {
            Ok(entries) => {
                self.store_snapshot(tournament_id, &entries);
                Ok(entries)
            }
            Err(err @ RankingError::UpstreamFetch { .. }) if allow_fallback => {
                self.cached_or(tournament_id, err)
            }
            Err(err) => Err(err),
        }
    }

    async fn fetch_and_rank(&self, tournament_id: &str) -> Result<Vec<RankedEntry>, RankingError> {
        let records = self
            .gateway
            .fetch_aggregates(tournament_id)
            .await
            .map_err(|source| RankingError::UpstreamFetch {
                tournament_id: tournament_id.to_string(),
                source,
            })?;

        info!(
            "Ranking {} aggregate records for tournament {}",
            records.len(),
            tournament_id
        );
        ranking::rank_snapshot(records)
    }

    fn store_snapshot(&self, tournament_id: &str, entries: &[RankedEntry]) {
        if let Err(e) = self.cache.save(&cache_key(tournament_id), &entries) {
            warn!(
                "Failed to cache leaderboard for tournament {}: {:?}",
                tournament_id, e
            );
        }
    }

    fn cached_or(
        &self,
        tournament_id: &str,
        err: RankingError,
    ) -> Result<Vec<RankedEntry>, RankingError> {
        match self.cache.load::<Vec<RankedEntry>>(&cache_key(tournament_id)) {
            Ok(Some(entries)) => {
                warn!(
                    "Using cached leaderboard for tournament {} after fetch failure: {}",
                    tournament_id, err
                );
                Ok(entries)
            }
            _ => Err(err),
        }
    }
}

fn cache_key(tournament_id: &str) -> String {
    format!("leaderboard_{}", tournament_id)
}
