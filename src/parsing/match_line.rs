use anyhow::{Context, Result};
use regex::Regex;

use crate::config::ParserSettings;
use crate::domain::{MatchResult, Score, TeamScore};
use crate::errors::FormatError;

const SEGMENT_SEPARATOR: &str = ", ";

/// Turns `<Name> <Score>, <Name> <Score>` lines into match results
pub struct MatchParser {
    strict_scores: bool,
    score_regex: Regex,
}

impl MatchParser {
    pub fn new(settings: &ParserSettings) -> Result<Self> {
        Ok(Self {
            strict_scores: settings.strict_scores,
            score_regex: Self::compile_regex()?,
        })
    }

    /// Parse one line; nothing is returned for a line that fails on either side
    pub fn parse_line(&self, line: &str) -> Result<MatchResult, FormatError> {
        let (home, away) = split_segments(line.trim())?;

        let home = self.parse_segment(home)?;
        let away = self.parse_segment(away)?;

        Ok(MatchResult::new(home, away))
    }

    // --- Construction Helpers ---

    fn compile_regex() -> Result<Regex> {
        Regex::new(r"^\d+$").context("Failed to compile score regex")
    }

    // --- Segment Parsing ---

    fn parse_segment(&self, segment: &str) -> Result<TeamScore, FormatError> {
        let (name, token) = split_name_and_score(segment)?;
        let score = self.parse_score(segment, token)?;

        Ok(TeamScore::new(name, score))
    }

    fn parse_score(&self, segment: &str, token: &str) -> Result<Score, FormatError> {
        if self.strict_scores && !self.score_regex.is_match(token) {
            return Err(invalid_score(segment, token));
        }

        token.parse().map_err(|_| invalid_score(segment, token))
    }
}

fn split_segments(line: &str) -> Result<(&str, &str), FormatError> {
    let mut parts = line.split(SEGMENT_SEPARATOR);

    match (parts.next(), parts.next(), parts.next()) {
        (Some(home), Some(away), None) => Ok((home, away)),
        _ => Err(FormatError::MissingSeparator {
            line: line.to_string(),
        }),
    }
}

fn split_name_and_score(segment: &str) -> Result<(&str, &str), FormatError> {
    let trimmed = segment.trim();

    let (name, token) = trimmed
        .rsplit_once(char::is_whitespace)
        .ok_or_else(|| FormatError::MissingScore {
            segment: segment.to_string(),
        })?;

    let name = name.trim();
    if name.is_empty() {
        return Err(FormatError::EmptyTeamName {
            segment: segment.to_string(),
        });
    }

    Ok((name, token))
}

fn invalid_score(segment: &str, token: &str) -> FormatError {
    FormatError::InvalidScore {
        segment: segment.to_string(),
        token: token.to_string(),
    }
}
