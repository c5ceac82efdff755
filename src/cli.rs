use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "League standings from match results")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Print the standings table for a list of match results
    Rank {
        /// File with one match per line (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Accept signed scores
        #[arg(long)]
        lenient_scores: bool,
    },
    /// Validate match results without printing standings
    Check {
        /// File with one match per line (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Accept signed scores
        #[arg(long)]
        lenient_scores: bool,
    },
}
