use colored::{ColoredString, Colorize};

use crate::domain::{Tournament, TournamentStatus};

/// Render the tournament listing for the terminal.
pub fn render_tournaments(tournaments: &[Tournament]) -> String {
    if tournaments.is_empty() {
        return "No tournaments found.".to_string();
    }

    tournaments
        .iter()
        .map(render_tournament)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_tournament(tournament: &Tournament) -> String {
    format!(
        "{:>12}  {}  [{}] {} slots, {} matches, starts {}  ({})",
        status_badge(tournament.status),
        tournament.title,
        tournament.tournament_type.as_str(),
        tournament.max_slots,
        tournament.match_count,
        tournament.start_date.format("%Y-%m-%d"),
        tournament.id
    )
}

fn status_badge(status: TournamentStatus) -> ColoredString {
    let label = status.as_str().to_uppercase();
    match status {
        TournamentStatus::Upcoming => label.blue(),
        TournamentStatus::Live => label.red().bold(),
        TournamentStatus::Completed => label.green(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TournamentType;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_render_listing() {
        let tournaments = vec![Tournament {
            id: "t1".to_string(),
            title: "FF Pro League Season 1".to_string(),
            description: "The ultimate battle for the crown.".to_string(),
            tournament_type: TournamentType::Solo,
            status: TournamentStatus::Live,
            max_slots: 48,
            match_count: 5,
            start_date: Utc.with_ymd_and_hms(2026, 8, 1, 18, 0, 0).unwrap(),
        }];

        let rendered = render_tournaments(&tournaments);
        assert!(rendered.contains("FF Pro League Season 1"));
        assert!(rendered.contains("[solo]"));
        assert!(rendered.contains("2026-08-01"));
    }

    #[test]
    fn test_render_empty_listing() {
        assert_eq!(render_tournaments(&[]), "No tournaments found.");
    }
}
