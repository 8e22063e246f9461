//! # parkline-core: Pure Parking Engine
//!
//! Ticket lifecycle and fee calculation for mall, stadium and airport
//! parking facilities, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Parkline Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli (parkline)                          │   │
//! │  │    config ──► fee model file ──► stdin commands ──► stdout      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ parkline-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ selector  │─►│ facility  │─►│ calculator│  │ schedule  │  │   │
//! │  │   │           │  │ ledger    │  │ FlatHourly│  │ FeeModels │  │   │
//! │  │   │           │  │ issuer    │  │ TierUnion │  │ RateTier  │  │   │
//! │  │   │           │  │ clock     │  │ Daily     │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO FILES • NO NETWORK • TIME ONLY THROUGH Clock              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Vehicle classes, facility kinds, tickets, receipts
//! - [`fee`] - Fee amount type
//! - [`schedule`] - Rate tiers, fee models and the document parser
//! - [`calculator`] - The three pricing strategies
//! - [`ledger`] - Occupancy ledger
//! - [`issuer`] - Ticket and receipt numbering
//! - [`facility`] - Enter / exit lifecycle
//! - [`selector`] - Facility kind tag to facility
//! - [`clock`] - Injectable time source
//! - [`error`] - Domain error types
//! - [`validation`] - Input and configuration checks
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use parkline_core::clock::ManualClock;
//! use parkline_core::schedule::{FeeModel, RateSchedule, RateTier};
//! use parkline_core::{ChargeModel, Facility, FacilityKind, InventoryCap, VehicleClass};
//!
//! let clock = ManualClock::from_recent();
//! let model = FeeModel::new(
//!     ChargeModel::PerHour,
//!     RateSchedule::new().with(VehicleClass::TwoWheeler, vec![RateTier::new(0, 0, 10)]),
//! );
//! let inventory = InventoryCap::new().with(VehicleClass::TwoWheeler, 2);
//! let mut mall = Facility::new(FacilityKind::Mall, model, inventory, Arc::new(clock.clone())).unwrap();
//!
//! let ticket = mall.enter(VehicleClass::TwoWheeler).unwrap();
//! assert_eq!(ticket.ticket_number, "001");
//!
//! clock.advance_minutes(210);
//! let receipt = mall.exit(&ticket.ticket_number, VehicleClass::TwoWheeler).unwrap();
//! assert_eq!(receipt.fee.amount(), 40);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod clock;
pub mod error;
pub mod facility;
pub mod fee;
pub mod issuer;
pub mod ledger;
pub mod schedule;
pub mod selector;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ConfigError, CoreResult, ParkingError, ScheduleError, ValidationError};
pub use facility::{Facility, SharedFacility};
pub use fee::Fee;
pub use schedule::{FeeModel, FeeModels, RateSchedule, RateTier};
pub use types::*;
