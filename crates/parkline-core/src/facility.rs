//! # Facility
//!
//! One parking site. Mall, stadium and airport share this type; they differ
//! only in the [`FacilityKind`] constants and the injected [`FeeCalculator`].
//!
//! ## Ticket Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  enter(vehicle)                                                         │
//! │      ├── vehicle not stocked?           ──► VehicleNotAllowed           │
//! │      ├── occupancy >= capacity?         ──► NoSpace                     │
//! │      └── ledger.admit(ticket, now)      ──► Ticket { "001", spot 1 }    │
//! │                                                                         │
//! │  exit(ticket, vehicle)                                                  │
//! │      ├── empty ticket?                  ──► InvalidTicket               │
//! │      ├── (ticket, vehicle) not parked?  ──► VehicleMismatch             │
//! │      ├── calculator error?              ──► error, ledger untouched     │
//! │      └── receipt counter + 1, ledger.release ──► Receipt { "R-001" }    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! Operations take `&mut self`; a facility has a single writer. Share one
//! across threads as a [`SharedFacility`].

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::calculator::{self, FeeCalculator, FeeRequest};
use crate::clock::Clock;
use crate::error::{ConfigError, CoreResult, ParkingError};
use crate::issuer::Issuer;
use crate::ledger::{LedgerKey, OccupancyLedger};
use crate::schedule::FeeModel;
use crate::types::{
    Action, ActionKind, FacilityKind, InventoryCap, Outcome, Receipt, Ticket, VehicleClass,
};
use crate::validation::{validate_inventory, validate_ticket_number};

/// A facility behind a mutex, for callers that share it across threads.
pub type SharedFacility = Arc<Mutex<Facility>>;

/// A parking site: inventory, fee model, ledger and numbering.
#[derive(Debug)]
pub struct Facility {
    kind: FacilityKind,
    inventory: InventoryCap,
    fee_model: FeeModel,
    calculator: Box<dyn FeeCalculator>,
    clock: Arc<dyn Clock>,
    ledger: OccupancyLedger,
    issuer: Issuer,
}

impl Facility {
    /// Builds a facility priced by the kind's own calculator.
    ///
    /// ## Errors
    /// [`ConfigError::DisallowedVehicle`] when the inventory stocks a
    /// vehicle class the kind forbids. The charge model is NOT checked
    /// here; a mismatch surfaces on the first exit.
    pub fn new(
        kind: FacilityKind,
        fee_model: FeeModel,
        inventory: InventoryCap,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ConfigError> {
        Self::with_calculator(kind, fee_model, inventory, calculator::for_kind(kind), clock)
    }

    /// Builds a facility with an explicit pricing strategy.
    pub fn with_calculator(
        kind: FacilityKind,
        fee_model: FeeModel,
        inventory: InventoryCap,
        calculator: Box<dyn FeeCalculator>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ConfigError> {
        validate_inventory(kind, &inventory)?;

        debug!(
            facility = %kind,
            charge = %fee_model.charge,
            vehicles = inventory.vehicles().count(),
            "Facility created"
        );

        Ok(Facility {
            kind,
            inventory,
            fee_model,
            calculator,
            clock,
            ledger: OccupancyLedger::new(),
            issuer: Issuer::new(kind.pad_width()),
        })
    }

    pub fn kind(&self) -> FacilityKind {
        self.kind
    }

    pub fn inventory(&self) -> &InventoryCap {
        &self.inventory
    }

    pub fn fee_model(&self) -> &FeeModel {
        &self.fee_model
    }

    pub fn ledger(&self) -> &OccupancyLedger {
        &self.ledger
    }

    /// Number of vehicles currently parked.
    pub fn occupancy(&self) -> usize {
        self.ledger.len()
    }

    pub fn receipts_issued(&self) -> u64 {
        self.issuer.receipts_issued()
    }

    /// Admits a vehicle and issues a ticket.
    ///
    /// The capacity gate compares the whole ledger (every class) against
    /// the requested class's cap.
    pub fn enter(&mut self, vehicle: VehicleClass) -> CoreResult<Ticket> {
        let capacity = self
            .inventory
            .capacity(vehicle)
            .ok_or(ParkingError::VehicleNotAllowed {
                vehicle,
                facility: self.kind,
            })?;

        if self.ledger.len() >= capacity as usize {
            warn!(facility = %self.kind, %vehicle, capacity, "No space available");
            return Err(ParkingError::NoSpace { vehicle, capacity });
        }

        let ticket_number = self.issuer.ticket_number(&self.ledger, vehicle);
        let entry_time = self.clock.now();
        self.ledger
            .admit(LedgerKey::new(ticket_number.clone(), vehicle), entry_time);
        let spot_number = self.ledger.len() as u32;

        debug!(
            facility = %self.kind,
            %vehicle,
            ticket_number = %ticket_number,
            spot_number,
            "Ticket issued"
        );

        Ok(Ticket {
            ticket_number,
            spot_number,
            entry_time,
        })
    }

    /// Prices a stay, issues a receipt and frees the spot.
    ///
    /// Any error leaves the ledger exactly as it was, so the exit can be
    /// retried.
    pub fn exit(&mut self, ticket_number: &str, vehicle: VehicleClass) -> CoreResult<Receipt> {
        validate_ticket_number(ticket_number)
            .map_err(|e| ParkingError::invalid_ticket(e.to_string()))?;

        let key = LedgerKey::new(ticket_number, vehicle);
        let entry_time =
            self.ledger
                .entry_time(&key)
                .ok_or_else(|| ParkingError::VehicleMismatch {
                    ticket_number: ticket_number.to_string(),
                    vehicle,
                })?;

        let exit_time = self.clock.now();
        let fee = self.calculator.calculate(&FeeRequest {
            action: ActionKind::Exit,
            vehicle,
            model: &self.fee_model,
            entry_time,
            exit_time,
        })?;

        let receipt_number = self.issuer.next_receipt_number();
        self.ledger.release(&key);

        debug!(
            facility = %self.kind,
            %vehicle,
            ticket_number,
            receipt_number = %receipt_number,
            fee = %fee,
            "Receipt issued"
        );

        Ok(Receipt {
            receipt_number,
            entry_time,
            exit_time,
            fee,
        })
    }

    /// Dispatches a request envelope to [`Facility::enter`] or
    /// [`Facility::exit`].
    pub fn handle(&mut self, action: &Action) -> CoreResult<Outcome> {
        match action.kind {
            ActionKind::Enter => self.enter(action.vehicle).map(Outcome::Ticket),
            ActionKind::Exit => {
                let ticket_number = action.ticket_number.as_deref().unwrap_or_default();
                self.exit(ticket_number, action.vehicle).map(Outcome::Receipt)
            }
        }
    }

    /// Wraps the facility for shared use.
    pub fn into_shared(self) -> SharedFacility {
        Arc::new(Mutex::new(self))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
