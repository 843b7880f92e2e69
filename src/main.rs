//! Assignment Tracker - Main Entry Point
//!
//! A line-oriented host for the tracker: reads one command per line from
//! stdin and prints the outcome to stdout. Nothing is saved between runs.

use anyhow::{Context, Result};
use assignment_tracker::assignment::local_date_today;
use assignment_tracker::intent::{self, Command, HELP};
use assignment_tracker::logging::{LogConfig, init_logging};
use assignment_tracker::{Filter, TrackerHandler, formatting, validation};
use chrono::NaiveDate;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Assignment Tracker - track assignments by due-date status
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Treat this date (YYYY-MM-DD) as today instead of the local date
    #[arg(long, value_parser = parse_today)]
    today: Option<NaiveDate>,

    /// Initial list filter: all, on_track, late or blocked
    #[arg(long, default_value = "all", value_parser = validation::parse_filter)]
    filter: Filter,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_today(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        format!(
            "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
            value
        )
    })
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&LogConfig::from_verbosity(args.verbose))
        .context("failed to initialise logging")?;

    let mut tracker = TrackerHandler::new();
    tracker.handle_filter_change(args.filter);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read input")?;
        let today = args.today.unwrap_or_else(local_date_today);

        let command = match intent::parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!(%e, "unreadable command");
                writeln!(stdout, "Error: {}", e)?;
                continue;
            }
        };

        match command {
            Command::Intent(intent) => match tracker.dispatch(intent) {
                Ok(message) => writeln!(stdout, "{}", message)?,
                Err(e) if e.is_validation() => writeln!(stdout, "Not saved: {}", e)?,
                Err(e) => writeln!(stdout, "Error: {}", e)?,
            },
            Command::List => {
                writeln!(stdout, "{}", formatting::format_rows(&tracker.rows(today)))?
            }
            Command::Export => {
                let exported = formatting::export_rows(&tracker.rows(today))
                    .context("failed to export assignments")?;
                write!(stdout, "{}", exported)?;
            }
            Command::Help => writeln!(stdout, "{}", HELP)?,
            Command::Quit => break,
        }
        stdout.flush()?;
    }

    Ok(())
}
