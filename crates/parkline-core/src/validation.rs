//! # Validation Module
//!
//! Input and configuration checks for Parkline.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Fee model load                                               │
//! │  └── validate_rate_tier: reject inverted tier ranges                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Facility construction (fatal)                                │
//! │  └── validate_inventory: reject vehicles the kind forbids              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Exit request (recoverable)                                   │
//! │  └── validate_ticket_number: reject empty ticket numbers               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use parkline_core::validation::validate_ticket_number;
//!
//! assert!(validate_ticket_number("001").is_ok());
//! assert!(validate_ticket_number("").is_err());
//! ```

use crate::error::{ConfigError, ValidationError};
use crate::schedule::RateTier;
use crate::types::{FacilityKind, InventoryCap};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Ticket Validators
// =============================================================================

/// Validates a ticket number surrendered on exit.
///
/// Only a missing (empty) number is rejected. Any other number, however
/// odd, is looked up in the ledger and fails there if it was never issued.
/// The number is not trimmed or reformatted: `"1"` and `"001"` are different
/// tickets.
pub fn validate_ticket_number(ticket_number: &str) -> ValidationResult<()> {
    if ticket_number.is_empty() {
        return Err(ValidationError::Required {
            field: "ticket number".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Schedule Validators
// =============================================================================

/// Validates a single rate tier.
///
/// ## Rules
/// - `till == 0` means unbounded and is always valid
/// - Otherwise `till` must not be below `from`
pub fn validate_rate_tier(tier: &RateTier) -> ValidationResult<()> {
    if !tier.is_unbounded() && tier.till_hours < tier.from_hours {
        return Err(ValidationError::OutOfRange {
            field: "till".to_string(),
            min: tier.from_hours as u64,
            max: u32::MAX as u64,
        });
    }

    Ok(())
}

// =============================================================================
// Facility Validators
// =============================================================================

/// Validates an inventory against what a facility kind may hold.
///
/// ## User Workflow
/// ```text
/// Facility::new(Airport, inventory{Bus/Truck: 5})
///      │
///      ▼
/// validate_inventory ← THIS FUNCTION
///      │
///      ▼
/// DisallowedVehicle { Bus/Truck, Airport }  (facility is never built)
/// ```
pub fn validate_inventory(kind: FacilityKind, inventory: &InventoryCap) -> Result<(), ConfigError> {
    match inventory.vehicles().find(|vehicle| !kind.allows(*vehicle)) {
        Some(vehicle) => Err(ConfigError::DisallowedVehicle {
            vehicle,
            facility: kind,
        }),
        None => Ok(()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VehicleClass;

    #[test]
    fn test_validate_ticket_number() {
        assert!(validate_ticket_number("001").is_ok());
        assert!(validate_ticket_number("0042").is_ok());

        // Unusual but present numbers are left to the ledger lookup.
        assert!(validate_ticket_number("   ").is_ok());
        assert!(validate_ticket_number(&"9".repeat(40)).is_ok());

        assert_eq!(
            validate_ticket_number(""),
            Err(ValidationError::Required {
                field: "ticket number".to_string()
            })
        );
    }

    #[test]
    fn test_validate_rate_tier() {
        assert!(validate_rate_tier(&RateTier::new(0, 0, 10)).is_ok());
        assert!(validate_rate_tier(&RateTier::new(24, 0, 80)).is_ok());
        assert!(validate_rate_tier(&RateTier::new(1, 8, 40)).is_ok());
        assert!(validate_rate_tier(&RateTier::new(4, 4, 40)).is_ok());

        assert!(validate_rate_tier(&RateTier::new(8, 4, 40)).is_err());
    }

    #[test]
    fn test_validate_inventory() {
        let cars_and_trucks = InventoryCap::new()
            .with(VehicleClass::FourWheeler, 10)
            .with(VehicleClass::HeavyVehicle, 2);

        assert!(validate_inventory(FacilityKind::Mall, &cars_and_trucks).is_ok());
        assert_eq!(
            validate_inventory(FacilityKind::Stadium, &cars_and_trucks),
            Err(ConfigError::DisallowedVehicle {
                vehicle: VehicleClass::HeavyVehicle,
                facility: FacilityKind::Stadium,
            })
        );

        let cars = InventoryCap::new().with(VehicleClass::FourWheeler, 10);
        assert!(validate_inventory(FacilityKind::Airport, &cars).is_ok());
    }
}
