//! # Rate Schedules and Fee Models
//!
//! Data-only types describing how a facility prices a stay, plus the parser
//! for the fee model document.
//!
//! ## Document Format
//! ```json
//! [
//!   {
//!     "model": "Airport",
//!     "Fee": {
//!       "charge": "PerDay",
//!       "vehicles": [
//!         {
//!           "kind": "Motorcycle",
//!           "rates": [
//!             { "from": 0,  "till": 1,  "rate": 0  },
//!             { "from": 1,  "till": 8,  "rate": 40 },
//!             { "from": 8,  "till": 24, "rate": 60 },
//!             { "from": 24, "till": 0,  "rate": 80 }
//!           ]
//!         }
//!       ]
//!     }
//!   }
//! ]
//! ```
//!
//! Tiers may appear in any order; [`RateSchedule::sorted_tiers`] orders them
//! by `from` before any calculator sees them.

use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ScheduleError;
use crate::types::{ChargeModel, FacilityKind, VehicleClass};
use crate::validation::validate_rate_tier;

// =============================================================================
// Rate Tier
// =============================================================================

/// One segment of a piecewise fee schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTier {
    /// Elapsed hours at which this tier starts to apply.
    #[serde(rename = "from")]
    pub from_hours: u32,
    /// Elapsed hours at which this tier stops. 0 means unbounded.
    #[serde(rename = "till")]
    pub till_hours: u32,
    /// Charge per billed unit while the tier applies.
    pub rate: u32,
}

impl RateTier {
    pub const fn new(from_hours: u32, till_hours: u32, rate: u32) -> Self {
        RateTier {
            from_hours,
            till_hours,
            rate,
        }
    }

    #[inline]
    pub const fn is_unbounded(&self) -> bool {
        self.till_hours == 0
    }
}

// =============================================================================
// Rate Schedule
// =============================================================================

/// Tier lists keyed by vehicle class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateSchedule(BTreeMap<VehicleClass, Vec<RateTier>>);

impl RateSchedule {
    pub fn new() -> Self {
        RateSchedule(BTreeMap::new())
    }

    /// Builder-style helper: sets the tiers for `vehicle`.
    pub fn with(mut self, vehicle: VehicleClass, tiers: Vec<RateTier>) -> Self {
        self.0.insert(vehicle, tiers);
        self
    }

    /// Raw tiers for `vehicle`, in document order.
    pub fn tiers(&self, vehicle: VehicleClass) -> Option<&[RateTier]> {
        self.0.get(&vehicle).map(Vec::as_slice)
    }

    /// Tiers for `vehicle` sorted ascending by `from_hours`.
    ///
    /// Returns `None` when the vehicle has no tiers at all. The sort is
    /// stable, so tiers sharing a start hour keep their document order.
    pub fn sorted_tiers(&self, vehicle: VehicleClass) -> Option<Vec<RateTier>> {
        let tiers = self.0.get(&vehicle).filter(|tiers| !tiers.is_empty())?;
        let mut sorted = tiers.clone();
        sorted.sort_by_key(|tier| tier.from_hours);
        Some(sorted)
    }
}

// =============================================================================
// Fee Model
// =============================================================================

/// A charge model plus its rate schedule. One per facility kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeModel {
    pub charge: ChargeModel,
    pub schedule: RateSchedule,
}

impl FeeModel {
    pub fn new(charge: ChargeModel, schedule: RateSchedule) -> Self {
        FeeModel { charge, schedule }
    }
}

// =============================================================================
// Fee Models (document)
// =============================================================================

/// Every fee model in a document, keyed by facility kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeeModels(BTreeMap<FacilityKind, FeeModel>);

/// Wire shape of one document entry.
#[derive(Debug, Deserialize)]
struct FeeModelEntry {
    model: FacilityKind,
    #[serde(rename = "Fee")]
    fee: FeeEntry,
}

#[derive(Debug, Deserialize)]
struct FeeEntry {
    charge: ChargeModel,
    #[serde(default)]
    vehicles: Vec<VehicleRates>,
}

#[derive(Debug, Deserialize)]
struct VehicleRates {
    kind: VehicleClass,
    #[serde(default)]
    rates: Vec<RateTier>,
}

impl FeeModels {
    /// Parses a fee model document.
    ///
    /// ## Merge Rules
    /// - A facility kind listed twice: the later entry wins
    /// - A vehicle listed twice within one entry: the first list wins
    pub fn from_json_str(document: &str) -> Result<Self, ScheduleError> {
        let entries: Vec<FeeModelEntry> = serde_json::from_str(document)?;
        Self::from_entries(entries)
    }

    /// Parses a fee model document from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ScheduleError> {
        let entries: Vec<FeeModelEntry> = serde_json::from_reader(reader)?;
        Self::from_entries(entries)
    }

    fn from_entries(entries: Vec<FeeModelEntry>) -> Result<Self, ScheduleError> {
        let mut models = BTreeMap::new();

        for entry in entries {
            let mut schedule = BTreeMap::new();
            for vehicle in entry.fee.vehicles {
                for tier in &vehicle.rates {
                    validate_rate_tier(tier).map_err(|e| ScheduleError::InvalidTier {
                        vehicle: vehicle.kind,
                        reason: e.to_string(),
                    })?;
                }
                schedule.entry(vehicle.kind).or_insert(vehicle.rates);
            }

            debug!(
                facility = %entry.model,
                charge = %entry.fee.charge,
                vehicles = schedule.len(),
                "Loaded fee model"
            );
            models.insert(
                entry.model,
                FeeModel::new(entry.fee.charge, RateSchedule(schedule)),
            );
        }

        Ok(FeeModels(models))
    }

    pub fn get(&self, kind: FacilityKind) -> Option<&FeeModel> {
        self.0.get(&kind)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
