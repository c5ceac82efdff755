use anyhow::{Context, Result};

use crate::config::OutputFormat;
use crate::domain::{Points, RankingEntry};

pub fn points_unit(points: Points) -> &'static str {
    if points == 1 { "pt" } else { "pts" }
}

/// One `<rank>. <team>, <points> <unit>` line per entry, in the given order
pub fn format_rankings(rankings: &[RankingEntry]) -> String {
    rankings
        .iter()
        .map(format_entry)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render(rankings: &[RankingEntry], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_rankings(rankings)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(rankings).context("Failed to serialize standings")
        }
    }
}

fn format_entry(entry: &RankingEntry) -> String {
    format!(
        "{}. {}, {} {}",
        entry.rank,
        entry.team,
        entry.points,
        points_unit(entry.points)
    )
}
