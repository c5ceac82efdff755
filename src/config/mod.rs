pub mod settings;

pub use settings::{AppConfig, OutputFormat, OutputSettings, ParserSettings};
