use anyhow::Result;
use colored::Colorize;

use league_standings::cli::Command;
use league_standings::{handle_check, handle_rank, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("{} {e:#}", "Error:".red().bold());
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Rank {
            input,
            format,
            lenient_scores,
        } => handle_rank(input.as_deref(), *format, *lenient_scores),
        Command::Check {
            input,
            lenient_scores,
        } => handle_check(input.as_deref(), *lenient_scores),
    }
}
