pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod gateway;
pub mod ranking;
pub mod scoring;
pub mod services;
pub mod view;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cache::Cache;
use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::gateway::SupabaseGateway;
use crate::services::leaderboard::LeaderboardService;
use crate::services::tournaments::TournamentService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_tournaments() -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let gateway = SupabaseGateway::new(&config.gateway)?;
        let service = TournamentService::new(gateway);

        let tournaments = service.list().await?;
        println!("{}", view::render_tournaments(&tournaments));
        Ok(())
    })
}

pub fn handle_leaderboard(tournament_id: &str, no_fallback: bool) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let gateway = SupabaseGateway::new(&config.gateway)?;
        let cache = Cache::new(&config.cache.dir)?;
        let service = LeaderboardService::new(gateway, cache);

        let entries = service
            .ranked_leaderboard(tournament_id, !no_fallback)
            .await?;
        let rows = view::project_rows(&entries);
        println!("{}", view::render_leaderboard(&rows));
        Ok(())
    })
}
