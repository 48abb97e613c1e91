use super::resolve_rates;
use crate::cli::RateArgs;
use crate::error::{Error, Result};
use crate::input::{InputFormat, Scenario, read_scenario};
use crate::ledger::{Report, process_events};
use crate::output::{OutputFormat, write_report};
use std::path::Path;
use tracing::info;

/// Run the bill command
pub fn run(
    file: Option<&Path>,
    capacity: Option<usize>,
    rates: &RateArgs,
    format: InputFormat,
    output: OutputFormat,
) -> Result<()> {
    let path = file.unwrap_or_else(|| Path::new("-"));
    let source = if path == Path::new("-") {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    };

    eprintln!("Reading events from {}", source);
    let scenario = read_scenario(path, format)?;
    info!(events = scenario.events.len(), "event log loaded");

    let report = bill(scenario, capacity, rates)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, output, &source, &report)
}

/// Process a scenario, with command-line settings taking precedence
pub fn bill(scenario: Scenario, capacity: Option<usize>, rates: &RateArgs) -> Result<Report> {
    let capacity = capacity
        .or(scenario.capacity)
        .ok_or(Error::MissingSetting("capacity (--capacity)"))?;
    let rates = resolve_rates(rates, scenario.rates)?;

    info!(
        capacity,
        per_hour = rates.per_hour,
        grace_minutes = rates.grace_minutes,
        "processing"
    );
    Ok(process_events(capacity, rates, scenario.events))
}
