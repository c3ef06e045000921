/// Points awarded per confirmed kill.
const KILL_POINTS: u32 = 1;

/// Placement points for finishes 1 through 10, best finish first.
const PLACEMENT_POINTS: [u32; 10] = [12, 9, 8, 7, 6, 5, 4, 3, 2, 1];

/// Placement points for a match finish.
///
/// Placements outside 1..=10 score zero. The source data is permissive, so
/// invalid placements are not rejected, they simply earn nothing.
pub fn placement_points(placement: u32) -> u32 {
    match placement {
        1..=10 => PLACEMENT_POINTS[(placement - 1) as usize],
        _ => 0,
    }
}

pub fn kill_points() -> u32 {
    KILL_POINTS
}
