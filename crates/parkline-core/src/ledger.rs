//! # Occupancy Ledger
//!
//! The only mutable state of a facility: which tickets are currently parked
//! and when they entered.
//!
//! ```text
//! ┌──────────────────────────────┬──────────────────────────┐
//! │ LedgerKey                    │ entry time               │
//! ├──────────────────────────────┼──────────────────────────┤
//! │ ("001", Motorcycle)          │ 2025-01-01T08:00:00Z     │
//! │ ("002", Car/Suv)             │ 2025-01-01T08:05:00Z     │
//! └──────────────────────────────┴──────────────────────────┘
//!   len() == current occupancy across every vehicle class
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::types::VehicleClass;

/// Composite identity of a parked vehicle.
///
/// The same ticket number under a different vehicle class is a different
/// key, so a class mismatch on exit looks exactly like an unknown ticket.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LedgerKey {
    pub ticket_number: String,
    pub vehicle: VehicleClass,
}

impl LedgerKey {
    pub fn new(ticket_number: impl Into<String>, vehicle: VehicleClass) -> Self {
        LedgerKey {
            ticket_number: ticket_number.into(),
            vehicle,
        }
    }
}

/// Currently parked vehicles.
#[derive(Debug, Clone, Default)]
pub struct OccupancyLedger {
    records: HashMap<LedgerKey, DateTime<Utc>>,
}

impl OccupancyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of parked vehicles, all classes combined.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of parked vehicles of one class.
    pub fn count_of(&self, vehicle: VehicleClass) -> usize {
        self.records.keys().filter(|key| key.vehicle == vehicle).count()
    }

    pub fn contains(&self, key: &LedgerKey) -> bool {
        self.records.contains_key(key)
    }

    pub fn entry_time(&self, key: &LedgerKey) -> Option<DateTime<Utc>> {
        self.records.get(key).copied()
    }

    /// Records a vehicle as parked. Returns the previous entry time if the
    /// key was already present.
    pub fn admit(&mut self, key: LedgerKey, entry_time: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.records.insert(key, entry_time)
    }

    /// Removes a parked vehicle, returning its entry time.
    pub fn release(&mut self, key: &LedgerKey) -> Option<DateTime<Utc>> {
        self.records.remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_admit_and_release() {
        let mut ledger = OccupancyLedger::new();
        let key = LedgerKey::new("001", VehicleClass::TwoWheeler);

        assert!(ledger.admit(key.clone(), at(8)).is_none());
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.entry_time(&key), Some(at(8)));

        assert_eq!(ledger.release(&key), Some(at(8)));
        assert!(ledger.is_empty());
        assert_eq!(ledger.release(&key), None);
    }

    #[test]
    fn test_key_includes_vehicle_class() {
        let mut ledger = OccupancyLedger::new();
        ledger.admit(LedgerKey::new("001", VehicleClass::TwoWheeler), at(8));

        assert!(!ledger.contains(&LedgerKey::new("001", VehicleClass::FourWheeler)));
        assert!(ledger.contains(&LedgerKey::new("001", VehicleClass::TwoWheeler)));
    }

    #[test]
    fn test_count_of() {
        let mut ledger = OccupancyLedger::new();
        ledger.admit(LedgerKey::new("001", VehicleClass::TwoWheeler), at(8));
        ledger.admit(LedgerKey::new("002", VehicleClass::FourWheeler), at(9));
        ledger.admit(LedgerKey::new("003", VehicleClass::FourWheeler), at(10));

        assert_eq!(ledger.count_of(VehicleClass::FourWheeler), 2);
        assert_eq!(ledger.count_of(VehicleClass::HeavyVehicle), 0);
        assert_eq!(ledger.len(), 3);
    }
}
