use regex::Regex;
use std::sync::OnceLock;

/// Shown when an aggregate row has no joined profile.
pub const UNKNOWN_PLAYER: &str = "Unknown Player";

static FF_UID_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Format a 10-digit game UID as "XXX XXX XXXX" for display.
///
/// UIDs of any other shape pass through untouched; the data service does
/// not guarantee the field is numeric.
pub fn format_ff_uid(uid: &str) -> String {
    let pattern = FF_UID_PATTERN
        .get_or_init(|| Regex::new(r"^(\d{3})(\d{3})(\d{4})$").expect("UID pattern is valid"));

    match pattern.captures(uid) {
        Some(groups) => format!("{} {} {}", &groups[1], &groups[2], &groups[3]),
        None => uid.to_string(),
    }
}
