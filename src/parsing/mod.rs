pub mod match_line;

pub use match_line::MatchParser;
