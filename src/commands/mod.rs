pub mod bill;
pub mod fee;

use crate::cli::RateArgs;
use crate::error::{Error, Result};
use crate::ledger::RateSchedule;

/// Merge rate flags over rates from an input document. Flags win; the grace
/// period defaults to zero when neither source sets it.
pub fn resolve_rates(args: &RateArgs, document: Option<RateSchedule>) -> Result<RateSchedule> {
    let per_hour = args
        .per_hour
        .or(document.map(|r| r.per_hour))
        .ok_or(Error::MissingSetting("hourly rate (--per-hour)"))?;
    let grace_minutes = args
        .grace
        .or(document.map(|r| r.grace_minutes))
        .unwrap_or(0);

    Ok(RateSchedule::new(per_hour, grace_minutes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_document() {
        let args = RateArgs {
            per_hour: Some(400),
            grace: None,
        };
        let rates = resolve_rates(&args, Some(RateSchedule::new(300, 15))).unwrap();
        assert_eq!(rates, RateSchedule::new(400, 15));
    }

    #[test]
    fn test_document_only() {
        let rates = resolve_rates(&RateArgs::default(), Some(RateSchedule::new(300, 15))).unwrap();
        assert_eq!(rates, RateSchedule::new(300, 15));
    }

    #[test]
    fn test_missing_rate() {
        let args = RateArgs {
            per_hour: None,
            grace: Some(15),
        };
        assert!(matches!(
            resolve_rates(&args, None),
            Err(Error::MissingSetting(_))
        ));
    }

    #[test]
    fn test_grace_defaults_to_zero() {
        let args = RateArgs {
            per_hour: Some(100),
            grace: None,
        };
        assert_eq!(resolve_rates(&args, None).unwrap(), RateSchedule::new(100, 0));
    }
}
