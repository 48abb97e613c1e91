use super::resolve_rates;
use crate::cli::RateArgs;
use crate::error::Result;
use crate::output::format_cents;

/// Run the fee command
pub fn run(minutes: u64, rates: &RateArgs) -> Result<()> {
    println!("{}", quote(minutes, rates)?);
    Ok(())
}

pub fn quote(minutes: u64, rates: &RateArgs) -> Result<String> {
    let rates = resolve_rates(rates, None)?;
    let hours = rates.billed_hours(minutes);
    let fee = rates.fee_for(minutes);

    Ok(format!(
        "{} min ({} min grace): {} hour(s) x {} = {} ({})",
        minutes,
        rates.grace_minutes,
        hours,
        rates.per_hour,
        fee,
        format_cents(fee)
    ))
}
