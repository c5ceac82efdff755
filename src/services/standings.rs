use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use super::processing::process_reader;
use crate::config::settings::AppConfig;
use crate::errors::input_context;
use crate::parsing::MatchParser;
use crate::standings::{StandingsTable, render};

/// Counts reported by a validation-only pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSummary {
    pub matches: usize,
    pub teams: usize,
}

pub struct StandingsService {
    config: AppConfig,
    parser: MatchParser,
}

impl StandingsService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let parser = MatchParser::new(&config.parser)?;
        Ok(Self { config, parser })
    }

    /// Rendered standings for every match in `input` (stdin when `None`)
    pub fn rank(&self, input: Option<&Path>) -> Result<String> {
        info!("=== Computing Standings ===");

        let table = self.load(input)?;
        let rankings = table.rankings();
        info!("  → Ranked {} teams", rankings.len());

        render(&rankings, self.config.output.format)
    }

    pub fn check(&self, input: Option<&Path>) -> Result<CheckSummary> {
        info!("=== Checking Match Results ===");

        let table = self.load(input)?;
        Ok(CheckSummary {
            matches: table.matches_applied(),
            teams: table.len(),
        })
    }

    fn load(&self, input: Option<&Path>) -> Result<StandingsTable> {
        let source = describe_source(input);
        let reader = open_input(input).with_context(|| input_context(&source))?;

        process_reader(&self.parser, reader).with_context(|| input_context(&source))
    }
}

fn open_input(input: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match input {
        Some(path) => {
            let file = File::open(path)?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn describe_source(input: Option<&Path>) -> String {
    input
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "stdin".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::domain::RankingEntry;
    use crate::errors::FormatError;
    use std::path::PathBuf;

    struct TempInput {
        path: PathBuf,
    }

    impl TempInput {
        fn new(name: &str, contents: &str) -> Self {
            let path = std::env::temp_dir().join(format!("league_standings_{}.txt", name));
            std::fs::write(&path, contents).unwrap();
            Self { path }
        }
    }

    impl Drop for TempInput {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.path);
        }
    }

    const SAMPLE: &str = "Lions 3, Snakes 3\n\
                          Tarantulas 1, FC Awesome 0\n\
                          Lions 1, FC Awesome 1\n\
                          Tarantulas 3, Snakes 1\n\
                          Lions 4, Grouches 0\n";

    #[test]
    fn test_rank_text() {
        let input = TempInput::new("rank_text", SAMPLE);
        let service = StandingsService::new(AppConfig::new()).unwrap();

        let output = service.rank(Some(input.path.as_path())).unwrap();

        assert_eq!(
            output,
            "1. Tarantulas, 6 pts\n\
             2. Lions, 5 pts\n\
             3. FC Awesome, 1 pt\n\
             3. Snakes, 1 pt\n\
             5. Grouches, 0 pts"
        );
    }

    #[test]
    fn test_rank_json() {
        let input = TempInput::new("rank_json", SAMPLE);
        let config = AppConfig::new().with_format(OutputFormat::Json);
        let service = StandingsService::new(config).unwrap();

        let output = service.rank(Some(input.path.as_path())).unwrap();
        let rankings: Vec<RankingEntry> = serde_json::from_str(&output).unwrap();

        assert_eq!(rankings.len(), 5);
        assert_eq!(rankings[0], RankingEntry::new(1, "Tarantulas", 6));
        assert_eq!(rankings[4], RankingEntry::new(5, "Grouches", 0));
    }

    #[test]
    fn test_check_counts() {
        let input = TempInput::new("check_counts", SAMPLE);
        let service = StandingsService::new(AppConfig::new()).unwrap();

        let summary = service.check(Some(input.path.as_path())).unwrap();

        assert_eq!(summary, CheckSummary { matches: 5, teams: 5 });
    }

    #[test]
    fn test_lenient_scores() {
        let input = TempInput::new("lenient", "Lions -1, Snakes 0\n");

        let strict = StandingsService::new(AppConfig::new()).unwrap();
        let err = strict.check(Some(input.path.as_path())).unwrap_err();
        assert!(err.downcast_ref::<FormatError>().is_some());

        let lenient = StandingsService::new(AppConfig::new().with_lenient_scores(true)).unwrap();
        let output = lenient.rank(Some(input.path.as_path())).unwrap();
        assert_eq!(output, "1. Snakes, 3 pts\n2. Lions, 0 pts");
    }

    #[test]
    fn test_missing_file() {
        let service = StandingsService::new(AppConfig::new()).unwrap();
        let path = std::env::temp_dir().join("league_standings_does_not_exist.txt");

        let err = service.rank(Some(path.as_path())).unwrap_err();

        assert_eq!(err.to_string(), input_context(&path.display().to_string()));
    }
}
