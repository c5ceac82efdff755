use thiserror::Error;

/// A match line that does not have the `<Name> <Score>, <Name> <Score>` shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("expected exactly one \", \" separator in line {line:?}")]
    MissingSeparator { line: String },

    #[error("no score after the team name in {segment:?}")]
    MissingScore { segment: String },

    #[error("empty team name in {segment:?}")]
    EmptyTeamName { segment: String },

    #[error("invalid score {token:?} in {segment:?}")]
    InvalidScore { segment: String, token: String },
}

/// Add context to errors raised for a given input line
pub fn line_context(line_no: usize) -> String {
    format!("Malformed match result on line {}", line_no)
}

/// Add context to errors raised while reading an input source
pub fn input_context(source: &str) -> String {
    format!("Failed to read match results from: {}", source)
}
