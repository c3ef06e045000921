pub mod leaderboard;
pub mod tournaments;

pub use leaderboard::LeaderboardService;
pub use tournaments::TournamentService;
