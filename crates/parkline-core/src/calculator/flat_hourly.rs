//! Mall pricing: one flat hourly rate, started hours round up.

use chrono::Duration;

use super::{whole_hours, whole_minutes, FeeCalculator};
use crate::fee::Fee;
use crate::schedule::RateTier;
use crate::types::ChargeModel;

/// Charges the lowest tier's rate per hour.
///
/// Only the first tier (lowest `from`) is read; any further tiers are
/// ignored. A stay with leftover minutes pays one more full hour. Leftover
/// seconds below a minute are free.
///
/// ```text
///  3h30m at rate 10:   3 × 10  +  10 (started hour)  =  40
///  2h00m at rate 10:   2 × 10                        =  20
///  0h00m at rate 10:                                 =   0
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatHourly;

impl FeeCalculator for FlatHourly {
    fn charge_model(&self) -> ChargeModel {
        ChargeModel::PerHour
    }

    fn price(&self, tiers: &[RateTier], parked: Duration) -> Fee {
        let Some(flat) = tiers.first() else {
            return Fee::zero();
        };
        let rate = Fee::from_rate(flat.rate);

        let hours = whole_hours(parked);
        let leftover_minutes = whole_minutes(parked) - hours * 60;

        let mut fee = rate * hours;
        if leftover_minutes > 0 {
            fee += rate;
        }
        fee
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(tiers: &[RateTier], minutes: i64) -> u64 {
        FlatHourly.price(tiers, Duration::minutes(minutes)).amount()
    }

    #[test]
    fn test_partial_hour_rounds_up() {
        let tiers = [RateTier::new(0, 0, 10)];
        assert_eq!(price(&tiers, 210), 40);
        assert_eq!(price(&tiers, 61), 20);
        assert_eq!(price(&tiers, 1), 10);
    }

    #[test]
    fn test_exact_hours_and_zero() {
        let tiers = [RateTier::new(0, 0, 10)];
        assert_eq!(price(&tiers, 120), 20);
        assert_eq!(price(&tiers, 0), 0);
    }

    #[test]
    fn test_sub_minute_remainder_is_free() {
        let tiers = [RateTier::new(0, 0, 10)];
        let parked = Duration::hours(1) + Duration::seconds(45);
        assert_eq!(FlatHourly.price(&tiers, parked).amount(), 10);
    }

    #[test]
    fn test_only_first_tier_counts() {
        let tiers = [RateTier::new(0, 2, 10), RateTier::new(2, 0, 50)];
        assert_eq!(price(&tiers, 300), 50);
    }
}
