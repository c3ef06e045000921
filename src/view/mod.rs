pub mod format;
pub mod leaderboard;
pub mod tournaments;

pub use format::{format_ff_uid, UNKNOWN_PLAYER};
pub use leaderboard::{project_rows, render_leaderboard, LeaderboardRow};
pub use tournaments::render_tournaments;
