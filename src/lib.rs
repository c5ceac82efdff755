pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod parsing;
pub mod services;
pub mod standings;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::info;

use crate::cli::Command;
use crate::config::{AppConfig, OutputFormat};
use crate::services::StandingsService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_rank(input: Option<&Path>, format: OutputFormat, lenient_scores: bool) -> Result<()> {
    let config = AppConfig::new()
        .with_format(format)
        .with_lenient_scores(lenient_scores);
    let service = StandingsService::new(config)?;

    let output = service.rank(input)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

pub fn handle_check(input: Option<&Path>, lenient_scores: bool) -> Result<()> {
    let config = AppConfig::new().with_lenient_scores(lenient_scores);
    let service = StandingsService::new(config)?;

    let summary = service.check(input)?;
    info!("=== Check Complete ===");
    println!("{} matches, {} teams", summary.matches, summary.teams);
    Ok(())
}
