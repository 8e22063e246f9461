//! Airport pricing: the highest qualifying tier sets a per-day fee.

use chrono::Duration;

use super::{whole_minutes, FeeCalculator};
use crate::fee::Fee;
use crate::schedule::RateTier;
use crate::types::ChargeModel;

/// Minutes in one billed day.
pub const MINUTES_PER_DAY: u64 = 24 * 60;

/// Picks the last tier whose start has been reached, then multiplies by the
/// number of started days once the stay runs past one day.
///
/// ```text
///  tiers: [0h → 0] [1h → 40] [8h → 60] [24h → 80]
///
///    55m  ──► tier 0h  ──►  0
///  14h59m ──► tier 8h  ──► 60
///  36h00m ──► tier 24h ──► 80 × ceil(2160 / 1440) = 160
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DailyTiered;

impl FeeCalculator for DailyTiered {
    fn charge_model(&self) -> ChargeModel {
        ChargeModel::PerDay
    }

    fn price(&self, tiers: &[RateTier], parked: Duration) -> Fee {
        let minutes = whole_minutes(parked);

        let mut fee = Fee::zero();
        for tier in tiers {
            if minutes >= u64::from(tier.from_hours) * 60 {
                fee = Fee::from_rate(tier.rate);
            }
        }

        if minutes > MINUTES_PER_DAY {
            fee = fee * minutes.div_ceil(MINUTES_PER_DAY);
        }
        fee
    }
}
