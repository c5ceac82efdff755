use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub struct ParserSettings {
    /// Only unsigned decimal digits are accepted as a score
    pub strict_scores: bool,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            strict_scores: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `1. Lions, 5 pts` lines
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
}

#[derive(Default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

pub struct AppConfig {
    pub parser: ParserSettings,
    pub output: OutputSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            parser: ParserSettings::default(),
            output: OutputSettings::default(),
        }
    }

    pub fn with_lenient_scores(mut self, lenient: bool) -> Self {
        self.parser.strict_scores = !lenient;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output.format = format;
        self
    }
}
