pub mod processing;
pub mod standings;

pub use processing::{process, process_reader};
pub use standings::StandingsService;
