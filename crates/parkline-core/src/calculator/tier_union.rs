//! Stadium pricing: qualifying tiers add up, plus overflow past the
//! schedule at the highest rate.

use chrono::Duration;

use super::{whole_hours, FeeCalculator};
use crate::fee::Fee;
use crate::schedule::RateTier;
use crate::types::ChargeModel;

/// Sums every tier that has started, then bills each hour past the largest
/// `till` at the largest rate.
///
/// ```text
///  H = floor(hours parked)
///
///  fee  = Σ rate  for every tier with from <= H
///  fee += (H - max_till) × max_rate     when H >= max_till
/// ```
///
/// `max_rate` and `max_till` are taken over all tiers independently, so the
/// tier with the highest rate can be charged both as a qualifying tier and
/// as the overflow rate. An unbounded tier (`till == 0`) does not raise
/// `max_till`; a schedule made only of unbounded tiers therefore overflows
/// from hour zero. Tier tables for this strategy must be written with the
/// additive semantics in mind.
#[derive(Debug, Clone, Copy, Default)]
pub struct TierUnion;

impl FeeCalculator for TierUnion {
    fn charge_model(&self) -> ChargeModel {
        ChargeModel::PerHour
    }

    fn price(&self, tiers: &[RateTier], parked: Duration) -> Fee {
        let hours = whole_hours(parked);

        let mut fee = tiers
            .iter()
            .filter(|tier| u64::from(tier.from_hours) <= hours)
            .fold(Fee::zero(), |total, tier| total + Fee::from_rate(tier.rate));

        let max_rate = tiers.iter().map(|tier| tier.rate).max().unwrap_or(0);
        let max_till = tiers
            .iter()
            .map(|tier| u64::from(tier.till_hours))
            .max()
            .unwrap_or(0);

        if hours >= max_till {
            fee += Fee::from_rate(max_rate) * (hours - max_till);
        }
        fee
    }
}

/// These pin the additive-plus-overflow behaviour exactly as it bills today,
/// including the cases where one tier is counted twice.
#[cfg(test)]
mod tests {
    use super::*;

    fn price(tiers: &[RateTier], minutes: i64) -> u64 {
        TierUnion.price(tiers, Duration::minutes(minutes)).amount()
    }

    #[test]
    fn test_single_unbounded_tier_119_minutes() {
        // 50 (qualifying) + (1 - 0) × 50 (overflow)
        let tiers = [RateTier::new(0, 0, 50)];
        assert_eq!(price(&tiers, 119), 100);
    }

    #[test]
    fn test_single_unbounded_tier_short_stay_still_pays_tier() {
        let tiers = [RateTier::new(0, 0, 50)];
        assert_eq!(price(&tiers, 0), 50);
        assert_eq!(price(&tiers, 59), 50);
    }

    #[test]
    fn test_tiers_accumulate_inside_schedule() {
        let tiers = [
            RateTier::new(0, 4, 30),
            RateTier::new(4, 12, 60),
            RateTier::new(12, 0, 100),
        ];
        assert_eq!(price(&tiers, 3 * 60 + 59), 30);
        assert_eq!(price(&tiers, 4 * 60), 90);
        assert_eq!(price(&tiers, 11 * 60 + 59), 90);
    }

    #[test]
    fn test_max_rate_tier_double_counted_past_schedule() {
        let tiers = [
            RateTier::new(0, 4, 30),
            RateTier::new(4, 12, 60),
            RateTier::new(12, 0, 100),
        ];
        // At H = 12 every tier qualifies and overflow contributes 0 hours.
        assert_eq!(price(&tiers, 12 * 60), 190);
        // At H = 13 the 100 tier is both qualifying and the overflow rate.
        assert_eq!(price(&tiers, 13 * 60), 190 + 100);
    }

    #[test]
    fn test_max_rate_need_not_be_last_tier() {
        let tiers = [RateTier::new(2, 6, 20), RateTier::new(0, 2, 70)];
        // H = 8: 70 + 20 qualifying, then (8 - 6) × 70 overflow.
        assert_eq!(price(&tiers, 8 * 60), 90 + 140);
    }
}
