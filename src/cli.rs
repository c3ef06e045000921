use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "SMART FF tournament hub client")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// List tournaments from the data service
    Tournaments,
    /// Fetch, rank and display a tournament's leaderboard
    Leaderboard {
        /// Tournament id
        #[arg(short, long)]
        tournament: String,
        /// Fail instead of falling back to the last cached list when the
        /// data service is unreachable
        #[arg(long)]
        no_fallback: bool,
    },
}
