use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::ranking::{RankedEntry, Tier};

use super::format::{format_ff_uid, UNKNOWN_PLAYER};

/// One display row of the leaderboard. Plain data, so any front end
/// (terminal here, web or native elsewhere) can render it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardRow {
    pub rank: u32,
    pub tier: Tier,
    pub display_name: String,
    pub formatted_uid: Option<String>,
    pub total_points: u32,
    pub total_kills: u32,
}

/// Project ranked entries into display rows. Deterministic, no network,
/// no mutation; rank and tier are taken from the entries as-is.
pub fn project_rows(entries: &[RankedEntry]) -> Vec<LeaderboardRow> {
    entries.iter().map(project_row).collect()
}

fn project_row(entry: &RankedEntry) -> LeaderboardRow {
    let profile = entry.record.display_profile.as_ref();

    LeaderboardRow {
        rank: entry.rank,
        tier: entry.tier,
        display_name: profile
            .map(|p| p.in_game_name.clone())
            .unwrap_or_else(|| UNKNOWN_PLAYER.to_string()),
        formatted_uid: profile.map(|p| format_ff_uid(&p.ff_uid)),
        total_points: entry.record.total_points,
        total_kills: entry.record.total_kills,
    }
}

/// Render rows for the terminal, one line per entry.
pub fn render_leaderboard(rows: &[LeaderboardRow]) -> String {
    if rows.is_empty() {
        return "No leaderboard entries yet.".to_string();
    }

    rows.iter().map(render_row).collect::<Vec<_>>().join("\n")
}

fn render_row(row: &LeaderboardRow) -> String {
    let uid = row
        .formatted_uid
        .as_deref()
        .map(|uid| format!("UID: {}", uid))
        .unwrap_or_default();

    format!(
        "{}  {:<24} {:<16} {:>6} pts {:>5} kills",
        tier_badge(row),
        row.display_name,
        uid,
        row.total_points,
        row.total_kills
    )
}

fn tier_badge(row: &LeaderboardRow) -> ColoredString {
    // Pad before colorizing: format widths count the escape bytes a
    // ColoredString carries, which would push colored badges out of column.
    let label = format!("{:>8}", format!("#{}", row.rank));
    match row.tier {
        Tier::Gold => label.yellow().bold(),
        Tier::Silver => label.bright_white().bold(),
        Tier::Bronze => label.truecolor(205, 127, 50).bold(),
        Tier::Standard => label.normal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Profile, Role};
    use crate::ranking::AggregateRecord;

    fn entry(rank: u32, profile: Option<Profile>) -> RankedEntry {
        RankedEntry {
            rank,
            tier: Tier::from_rank(rank),
            record: AggregateRecord {
                tournament_id: "t1".to_string(),
                subject_id: "u1".to_string(),
                total_kills: 15,
                total_placement_points: 36,
                total_points: 51,
                matches_played: 3,
                best_placement: Some(1),
                display_profile: profile,
            },
        }
    }

    fn profile() -> Profile {
        Profile {
            id: "u1".to_string(),
            name: "John Doe".to_string(),
            ff_uid: "9988776655".to_string(),
            in_game_name: "KING_FF".to_string(),
            avatar_url: None,
            role: Role::Player,
            is_banned: false,
        }
    }

    #[test]
    fn test_row_projection_with_profile() {
        let rows = project_rows(&[entry(1, Some(profile()))]);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].display_name, "KING_FF");
        assert_eq!(rows[0].formatted_uid.as_deref(), Some("998 877 6655"));
        assert_eq!(rows[0].tier, Tier::Gold);
        assert_eq!(rows[0].total_points, 51);
        assert_eq!(rows[0].total_kills, 15);
    }

    #[test]
    fn test_missing_profile_renders_unknown_player() {
        let rows = project_rows(&[entry(4, None)]);

        assert_eq!(rows[0].display_name, UNKNOWN_PLAYER);
        assert_eq!(rows[0].formatted_uid, None);
        assert_eq!(rows[0].tier, Tier::Standard);
    }

    #[test]
    fn test_colored_badges_stay_in_column() {
        colored::control::set_override(true);
        let gold = render_leaderboard(&project_rows(&[entry(1, Some(profile()))]));
        let standard = render_leaderboard(&project_rows(&[entry(4, Some(profile()))]));
        colored::control::unset_override();

        let escapes = regex::Regex::new(r"\x1b\[[0-9;]*m").unwrap();
        let gold_plain = escapes.replace_all(&gold, "");
        let standard_plain = escapes.replace_all(&standard, "");

        assert_eq!(
            gold_plain.find("KING_FF"),
            standard_plain.find("KING_FF")
        );
    }

    #[test]
    fn test_render_empty_leaderboard() {
        assert_eq!(render_leaderboard(&[]), "No leaderboard entries yet.");
    }

    #[test]
    fn test_rendered_row_carries_the_numbers() {
        let rows = project_rows(&[entry(1, Some(profile()))]);
        let rendered = render_leaderboard(&rows);

        assert!(rendered.contains("KING_FF"));
        assert!(rendered.contains("51 pts"));
        assert!(rendered.contains("15 kills"));
    }
}
