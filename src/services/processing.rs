use std::io::BufRead;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::errors::{FormatError, line_context};
use crate::parsing::MatchParser;
use crate::standings::StandingsTable;

/// Parse and apply every non-blank line in order; the first malformed line aborts the batch
pub fn process<I, S>(parser: &MatchParser, lines: I) -> Result<StandingsTable, FormatError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table = StandingsTable::new();

    for line in lines {
        apply_line(parser, &mut table, line.as_ref())?;
    }

    Ok(table)
}

/// Same as [`process`] over a reader, reporting the 1-based line number of a bad line
pub fn process_reader<R: BufRead>(parser: &MatchParser, reader: R) -> Result<StandingsTable> {
    let mut table = StandingsTable::new();
    let mut line_count = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read input line")?;
        apply_line(parser, &mut table, &line).with_context(|| line_context(idx + 1))?;
        line_count = idx + 1;
    }

    info!(
        "Processed {} lines: {} matches, {} teams",
        line_count,
        table.matches_applied(),
        table.len()
    );
    Ok(table)
}

fn apply_line(
    parser: &MatchParser,
    table: &mut StandingsTable,
    line: &str,
) -> Result<(), FormatError> {
    if is_blank(line) {
        debug!("Skipping blank line");
        return Ok(());
    }

    let result = parser.parse_line(line)?;
    table.apply(result);
    Ok(())
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
