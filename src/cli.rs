use crate::input::InputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "garage")]
#[command(about = "Event-log billing for a capacity-bounded parking garage")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Rate flags shared by the billing commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RateArgs {
    /// Price per started hour past the grace period, in cents
    #[arg(long)]
    pub per_hour: Option<u64>,

    /// Free parking period (e.g. 15m, 1h, or bare minutes)
    #[arg(long, value_parser = parse_minutes)]
    pub grace: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Process an event log and print the billing report
    Bill {
        /// Event log (JSON scenario or text); reads stdin when omitted or '-'
        file: Option<PathBuf>,

        /// Maximum number of vehicles inside at once
        #[arg(long, short = 'c')]
        capacity: Option<usize>,

        #[command(flatten)]
        rates: RateArgs,

        /// Input format
        #[arg(long, value_enum, default_value = "auto")]
        format: InputFormat,

        /// Output as JSON
        #[arg(long, conflicts_with = "csv")]
        json: bool,

        /// Output receipts as CSV
        #[arg(long)]
        csv: bool,
    },

    /// Quote the fee for a single stay
    Fee {
        /// Length of the stay (e.g. 95m, 1h35m, or bare minutes)
        #[arg(value_parser = parse_minutes)]
        minutes: u64,

        #[command(flatten)]
        rates: RateArgs,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

/// Parse a duration into whole minutes
fn parse_minutes(s: &str) -> Result<u64, String> {
    // Bare number is minutes
    if let Ok(minutes) = s.parse::<u64>() {
        return Ok(minutes);
    }

    match humantime::parse_duration(s) {
        Ok(d) => whole_minutes(d).ok_or_else(|| format!("Duration '{}' is not whole minutes", s)),
        Err(_) => Err(format!(
            "Invalid duration '{}'. Examples: 15m, 1h, 1h30m, 90",
            s
        )),
    }
}

fn whole_minutes(d: Duration) -> Option<u64> {
    if d.subsec_nanos() != 0 || d.as_secs() % 60 != 0 {
        return None;
    }
    Some(d.as_secs() / 60)
}

impl Cli {
    pub fn validate(&self) -> Result<(), String> {
        // A quote has no input document to fall back on
        if let Command::Fee { rates, .. } = &self.command
            && rates.per_hour.is_none()
        {
            return Err("--per-hour is required to quote a fee".to_string());
        }

        Ok(())
    }
}
