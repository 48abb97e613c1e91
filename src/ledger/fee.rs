use serde::{Deserialize, Serialize};

pub const MINUTES_PER_HOUR: u64 = 60;

/// Pricing applied to every completed stay in one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateSchedule {
    /// Currency units (cents) charged per started hour past the grace period
    pub per_hour: u64,
    /// Stays of at most this many minutes are free
    pub grace_minutes: u64,
}

impl RateSchedule {
    pub fn new(per_hour: u64, grace_minutes: u64) -> Self {
        RateSchedule {
            per_hour,
            grace_minutes,
        }
    }

    /// Whole hours billed for a stay; any started hour past the grace period counts
    pub fn billed_hours(&self, minutes: u64) -> u64 {
        if minutes <= self.grace_minutes {
            return 0;
        }
        (minutes - self.grace_minutes).div_ceil(MINUTES_PER_HOUR)
    }

    /// Fee for a stay of `minutes`. Saturates rather than overflowing.
    pub fn fee_for(&self, minutes: u64) -> u64 {
        self.per_hour.saturating_mul(self.billed_hours(minutes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grace_boundary() {
        let rates = RateSchedule::new(400, 15);
        assert_eq!(rates.fee_for(15), 0);
        assert_eq!(rates.fee_for(16), 400);
    }

    #[test]
    fn test_zero_minutes_is_free() {
        assert_eq!(RateSchedule::new(300, 0).fee_for(0), 0);
    }

    #[test]
    fn test_no_grace_bills_first_minute() {
        let rates = RateSchedule::new(300, 0);
        assert_eq!(rates.fee_for(1), 300);
        assert_eq!(rates.fee_for(60), 300);
        assert_eq!(rates.fee_for(61), 600);
    }

    #[test]
    fn test_ceiling_not_rounding() {
        let rates = RateSchedule::new(300, 15);
        // 175 billable minutes -> 3 hours
        assert_eq!(rates.billed_hours(190), 3);
        assert_eq!(rates.fee_for(190), 900);
        // 80 billable minutes -> 2 hours
        assert_eq!(rates.fee_for(95), 600);
        assert_eq!(rates.fee_for(75), 300);
        assert_eq!(rates.fee_for(76), 600);
    }

    #[test]
    fn test_fee_is_monotonic() {
        let rates = RateSchedule::new(250, 15);
        let mut previous = 0;
        for minutes in 0..2_000 {
            let fee = rates.fee_for(minutes);
            assert!(fee >= previous, "fee dropped at {minutes} minutes");
            previous = fee;
        }
    }

    #[test]
    fn test_free_rate() {
        let rates = RateSchedule::new(0, 15);
        assert_eq!(rates.fee_for(10_000), 0);
    }

    #[test]
    fn test_saturates_on_overflow() {
        let rates = RateSchedule::new(u64::MAX, 0);
        assert_eq!(rates.fee_for(u64::MAX), u64::MAX);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let rates: RateSchedule =
            serde_json::from_str(r#"{ "perHour": 300, "graceMinutes": 15 }"#).unwrap();
        assert_eq!(rates, RateSchedule::new(300, 15));
    }
}
