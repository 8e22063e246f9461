//! # Error Types
//!
//! Domain-specific error types for parkline-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  parkline-core errors (this file)                                      │
//! │  ├── ParkingError   - Enter/Exit and fee failures (recoverable)        │
//! │  ├── ConfigError    - Facility construction failures (fatal)           │
//! │  └── ScheduleError  - Fee model document failures                      │
//! │                                                                         │
//! │  CLI errors (apps/cli)                                                 │
//! │  └── anyhow::Error  - What the operator sees                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (vehicle, ticket, timestamps)
//! 3. Errors are enum variants, never sentinel values
//! 4. A failed exit never touches the ledger, so every `ParkingError` is
//!    safe to retry once the cause is fixed

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::types::{ChargeModel, FacilityKind, VehicleClass};

// =============================================================================
// Parking Error
// =============================================================================

/// Errors returned by facility operations and fee calculators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParkingError {
    /// No free spot for the requested vehicle class.
    ///
    /// ## When This Occurs
    /// - Occupancy has reached the class's inventory cap
    #[error("No space available for {vehicle} (capacity {capacity})")]
    NoSpace { vehicle: VehicleClass, capacity: u32 },

    /// The vehicle class has no inventory at this facility.
    #[error("{vehicle} is not allowed to be parked at {facility}")]
    VehicleNotAllowed {
        vehicle: VehicleClass,
        facility: FacilityKind,
    },

    /// The action tag is neither park nor unpark.
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// The vehicle tag names no known vehicle class.
    #[error("Unknown vehicle: {0}")]
    UnknownVehicle(String),

    /// Ticket number missing on exit, or no rate data for the vehicle.
    ///
    /// ## When This Occurs
    /// - `exit` called with an empty ticket number
    /// - The fee model has no tiers for the vehicle class
    #[error("Invalid ticket: {reason}")]
    InvalidTicket { reason: String },

    /// The (ticket, vehicle) pair is not in the ledger.
    ///
    /// ## When This Occurs
    /// - The ticket was never issued
    /// - The ticket was issued to a different vehicle class
    /// - The vehicle already exited
    #[error("Ticket {ticket_number} does not belong to a parked {vehicle}")]
    VehicleMismatch {
        ticket_number: String,
        vehicle: VehicleClass,
    },

    /// Exit timestamp precedes the entry timestamp.
    #[error("Invalid exit time: {exit} is before entry {entry}")]
    ExitTime {
        entry: DateTime<Utc>,
        exit: DateTime<Utc>,
    },

    /// The fee model's charge model is not the one this calculator implements.
    #[error("Charge model {configured} not supported (expected {supported})")]
    ChargeNotSupported {
        configured: ChargeModel,
        supported: ChargeModel,
    },
}

impl ParkingError {
    /// Creates an InvalidTicket error with the given reason.
    pub fn invalid_ticket(reason: impl Into<String>) -> Self {
        ParkingError::InvalidTicket {
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Config Error
// =============================================================================

/// Facility construction errors.
///
/// A facility that fails here has the wrong shape and cannot be used at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The inventory lists a vehicle class the facility kind forbids.
    #[error("{vehicle} can not be parked at {facility}")]
    DisallowedVehicle {
        vehicle: VehicleClass,
        facility: FacilityKind,
    },

    /// The facility tag names no known facility kind.
    #[error("Unknown facility kind: {0}")]
    UnknownFacility(String),

    /// No fee model was supplied for the facility kind.
    #[error("No fee model configured for {0}")]
    MissingFeeModel(FacilityKind),
}

// =============================================================================
// Schedule Error
// =============================================================================

/// Fee model document errors.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The document is not valid fee model JSON.
    #[error("Invalid fee model document: {0}")]
    Json(#[from] serde_json::Error),

    /// A rate tier is malformed.
    #[error("Invalid rate tier for {vehicle}: {reason}")]
    InvalidTier {
        vehicle: VehicleClass,
        reason: String,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the [`crate::validation`] checks before any ledger or fee logic
/// runs; callers translate them into the matching domain error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: u64, max: u64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ParkingError.
pub type CoreResult<T> = Result<T, ParkingError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ParkingError::NoSpace {
            vehicle: VehicleClass::TwoWheeler,
            capacity: 2,
        };
        assert_eq!(
            err.to_string(),
            "No space available for Motorcycle (capacity 2)"
        );

        let err = ParkingError::VehicleMismatch {
            ticket_number: "001".to_string(),
            vehicle: VehicleClass::FourWheeler,
        };
        assert_eq!(
            err.to_string(),
            "Ticket 001 does not belong to a parked Car/Suv"
        );
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::DisallowedVehicle {
            vehicle: VehicleClass::HeavyVehicle,
            facility: FacilityKind::Airport,
        };
        assert_eq!(err.to_string(), "Bus/Truck can not be parked at Airport");
    }

    #[test]
    fn test_invalid_ticket_helper() {
        let err = ParkingError::invalid_ticket("ticket number is required");
        assert!(matches!(err, ParkingError::InvalidTicket { .. }));
        assert_eq!(err.to_string(), "Invalid ticket: ticket number is required");
    }
}
