use anyhow::Result;

use ff_tournament_hub::cli::Command;
use ff_tournament_hub::{handle_leaderboard, handle_tournaments, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Tournaments => handle_tournaments(),
        Command::Leaderboard {
            tournament,
            no_fallback,
        } => handle_leaderboard(tournament, *no_fallback),
    }
}
