//! # Fee Calculators
//!
//! One pricing strategy per facility kind, behind a shared trait.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     FeeCalculator::calculate                            │
//! │                                                                         │
//! │  FeeRequest                                                             │
//! │      │                                                                  │
//! │      ├── action != Exit?            ──► InvalidAction                   │
//! │      ├── exit < entry?              ──► ExitTime                        │
//! │      ├── charge model mismatch?     ──► ChargeNotSupported              │
//! │      ├── no tiers for vehicle?      ──► InvalidTicket                   │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  price(sorted tiers, parked duration) ← strategy specific               │
//! │                                                                         │
//! │  ┌───────────────┐  ┌───────────────┐  ┌───────────────┐                │
//! │  │ FlatHourly    │  │ TierUnion     │  │ DailyTiered   │                │
//! │  │ (Mall)        │  │ (Stadium)     │  │ (Airport)     │                │
//! │  │ PerHour       │  │ PerHour       │  │ PerDay        │                │
//! │  └───────────────┘  └───────────────┘  └───────────────┘                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Calculators are pure: the same request always prices the same.

mod daily;
mod flat_hourly;
mod tier_union;

pub use daily::DailyTiered;
pub use flat_hourly::FlatHourly;
pub use tier_union::TierUnion;

use std::fmt;

use chrono::{DateTime, Duration, Utc};

use crate::error::{CoreResult, ParkingError};
use crate::fee::Fee;
use crate::schedule::{FeeModel, RateTier};
use crate::types::{ActionKind, ChargeModel, FacilityKind, VehicleClass};

/// Everything a calculator needs to price one stay.
#[derive(Debug, Clone, Copy)]
pub struct FeeRequest<'a> {
    pub action: ActionKind,
    pub vehicle: VehicleClass,
    pub model: &'a FeeModel,
    pub entry_time: DateTime<Utc>,
    pub exit_time: DateTime<Utc>,
}

/// A pricing strategy.
///
/// Implementors only provide [`FeeCalculator::price`]; the shared input
/// checks live in the provided [`FeeCalculator::calculate`].
pub trait FeeCalculator: Send + Sync + fmt::Debug {
    /// The charge model this strategy understands.
    fn charge_model(&self) -> ChargeModel;

    /// Prices a stay. `tiers` is non-empty and sorted ascending by
    /// `from_hours`; `parked` is non-negative.
    fn price(&self, tiers: &[RateTier], parked: Duration) -> Fee;

    /// Validates the request and prices it.
    fn calculate(&self, request: &FeeRequest<'_>) -> CoreResult<Fee> {
        let (tiers, parked) = check_request(request, self.charge_model())?;
        Ok(self.price(&tiers, parked))
    }
}

/// Shared preconditions. Returns the sorted tiers and the parked duration.
fn check_request(
    request: &FeeRequest<'_>,
    supported: ChargeModel,
) -> CoreResult<(Vec<RateTier>, Duration)> {
    if request.action != ActionKind::Exit {
        return Err(ParkingError::InvalidAction(request.action.to_string()));
    }

    if request.exit_time < request.entry_time {
        return Err(ParkingError::ExitTime {
            entry: request.entry_time,
            exit: request.exit_time,
        });
    }

    if request.model.charge != supported {
        return Err(ParkingError::ChargeNotSupported {
            configured: request.model.charge,
            supported,
        });
    }

    let tiers = request
        .model
        .schedule
        .sorted_tiers(request.vehicle)
        .ok_or_else(|| {
            ParkingError::invalid_ticket(format!("no rates configured for {}", request.vehicle))
        })?;

    Ok((tiers, request.exit_time - request.entry_time))
}

/// Returns the strategy a facility kind prices with.
pub fn for_kind(kind: FacilityKind) -> Box<dyn FeeCalculator> {
    match kind {
        FacilityKind::Mall => Box::new(FlatHourly),
        FacilityKind::Stadium => Box::new(TierUnion),
        FacilityKind::Airport => Box::new(DailyTiered),
    }
}

/// Whole elapsed hours, floored.
#[inline]
pub(crate) fn whole_hours(parked: Duration) -> u64 {
    parked.num_hours().max(0) as u64
}

/// Whole elapsed minutes, floored.
#[inline]
pub(crate) fn whole_minutes(parked: Duration) -> u64 {
    parked.num_minutes().max(0) as u64
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::RateSchedule;

    fn flat_model(charge: ChargeModel) -> FeeModel {
        FeeModel::new(
            charge,
            RateSchedule::new().with(VehicleClass::TwoWheeler, vec![RateTier::new(0, 0, 10)]),
        )
    }

    fn request(model: &FeeModel, minutes: i64) -> FeeRequest<'_> {
        let entry = crate::clock::ManualClock::from_recent();
        let entry_time = crate::clock::Clock::now(&entry);
        FeeRequest {
            action: ActionKind::Exit,
            vehicle: VehicleClass::TwoWheeler,
            model,
            entry_time,
            exit_time: entry_time + Duration::minutes(minutes),
        }
    }

    #[test]
    fn test_rejects_non_exit_action() {
        let model = flat_model(ChargeModel::PerHour);
        let mut req = request(&model, 30);
        req.action = ActionKind::Enter;

        assert_eq!(
            FlatHourly.calculate(&req),
            Err(ParkingError::InvalidAction("Park".to_string()))
        );
    }

    #[test]
    fn test_rejects_exit_before_entry_for_every_strategy() {
        for kind in [FacilityKind::Mall, FacilityKind::Stadium, FacilityKind::Airport] {
            let model = flat_model(kind.charge_model());
            let req = request(&model, -5);
            assert!(matches!(
                for_kind(kind).calculate(&req),
                Err(ParkingError::ExitTime { .. })
            ));
        }
    }

    #[test]
    fn test_rejects_mismatched_charge_model() {
        let model = flat_model(ChargeModel::PerHour);
        let req = request(&model, 60);

        assert_eq!(
            DailyTiered.calculate(&req),
            Err(ParkingError::ChargeNotSupported {
                configured: ChargeModel::PerHour,
                supported: ChargeModel::PerDay,
            })
        );
    }

    #[test]
    fn test_missing_tiers_is_invalid_ticket() {
        let model = flat_model(ChargeModel::PerHour);
        let mut req = request(&model, 60);
        req.vehicle = VehicleClass::FourWheeler;

        assert!(matches!(
            FlatHourly.calculate(&req),
            Err(ParkingError::InvalidTicket { .. })
        ));
    }

    #[test]
    fn test_charge_model_checked_before_tiers() {
        let model = FeeModel::new(ChargeModel::PerHour, RateSchedule::new());
        let req = request(&model, 60);

        assert!(matches!(
            DailyTiered.calculate(&req),
            Err(ParkingError::ChargeNotSupported { .. })
        ));
    }

    #[test]
    fn test_for_kind_matches_facility_charge_model() {
        for kind in [FacilityKind::Mall, FacilityKind::Stadium, FacilityKind::Airport] {
            assert_eq!(for_kind(kind).charge_model(), kind.charge_model());
        }
    }
}
