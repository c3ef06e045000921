pub mod table;

pub use table::{kill_points, placement_points};
