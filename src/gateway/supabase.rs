use anyhow::{Context, Result};
use log::info;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use urlencoding::encode;

use crate::config::settings::GatewaySettings;
use crate::domain::Tournament;
use crate::errors;
use crate::ranking::AggregateRecord;

use super::models::{AggregateRow, TournamentRow};
use super::DataGateway;

/// REST client for the hosted tournament data service.
pub struct SupabaseGateway {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseGateway {
    pub fn new(settings: &GatewaySettings) -> Result<Self> {
        let client = Self::build_client(settings)?;
        let api_key = settings.api_key()?;

        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
            api_key,
        })
    }

    fn build_client(settings: &GatewaySettings) -> Result<Client> {
        Client::builder()
            .user_agent(settings.user_agent)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    fn build_tournaments_url(&self) -> String {
        format!(
            "{}/rest/v1/tournaments?select=*&order=created_at.desc",
            self.base_url
        )
    }

    fn build_leaderboard_url(&self, tournament_id: &str) -> String {
        format!(
            "{}/rest/v1/leaderboard?select=*,profiles(*)&tournament_id=eq.{}",
            self.base_url,
            encode(tournament_id)
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .with_context(|| errors::fetch_context(url))?;

        if !response.status().is_success() {
            anyhow::bail!("Data service returned status: {}", response.status());
        }

        response
            .json()
            .await
            .with_context(|| errors::parse_context("data service response"))
    }
}

impl DataGateway for SupabaseGateway {
    async fn fetch_tournaments(&self) -> Result<Vec<Tournament>> {
        let url = self.build_tournaments_url();
        info!("Fetching tournaments from {}", url);

        let rows: Vec<TournamentRow> = self.get_json(&url).await?;
        rows.into_iter().map(TournamentRow::into_tournament).collect()
    }

    async fn fetch_aggregates(&self, tournament_id: &str) -> Result<Vec<AggregateRecord>> {
        let url = self.build_leaderboard_url(tournament_id);
        info!("Fetching leaderboard snapshot for tournament {}", tournament_id);

        let rows: Vec<AggregateRow> = self.get_json(&url).await?;
        rows.into_iter().map(AggregateRow::into_record).collect()
    }
}
