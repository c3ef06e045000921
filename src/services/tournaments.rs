use anyhow::Result;
use log::info;

use crate::domain::Tournament;
use crate::gateway::DataGateway;

/// Thin read-side service over the tournament listing.
pub struct TournamentService<G: DataGateway> {
    gateway: G,
}

impl<G: DataGateway> TournamentService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> Result<Vec<Tournament>> {
        let tournaments = self.gateway.fetch_tournaments().await?;
        info!("Fetched {} tournaments", tournaments.len());
        Ok(tournaments)
    }
}
