pub mod format;
pub mod ranking;
pub mod table;

pub use format::{format_rankings, points_unit, render};
pub use ranking::assign_ranks;
pub use table::StandingsTable;
