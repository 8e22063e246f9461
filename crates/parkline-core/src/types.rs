//! # Domain Types
//!
//! Core domain types used throughout Parkline.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  VehicleClass   │   │  FacilityKind   │   │  ChargeModel    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  TwoWheeler     │   │  Mall           │   │  PerHour        │       │
//! │  │  FourWheeler    │   │  Stadium        │   │  PerDay         │       │
//! │  │  HeavyVehicle   │   │  Airport        │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Ticket       │   │    Receipt      │   │    Action       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  ticket_number  │   │  receipt_number │   │  kind           │       │
//! │  │  spot_number    │   │  entry / exit   │   │  vehicle        │       │
//! │  │  entry_time     │   │  fee            │   │  ticket_number? │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Names
//! Enum serde names match the fee model document (`"Car/Suv"`, `"PerDay"`,
//! `"UnPark"`), so the same types parse documents and print results.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ParkingError};
use crate::fee::Fee;

// =============================================================================
// Vehicle Class
// =============================================================================

/// The class of a vehicle. Selects both the inventory bucket and the rate
/// tiers used to price a stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VehicleClass {
    /// Motorcycles and scooters.
    #[serde(rename = "Motorcycle")]
    TwoWheeler,
    /// Cars and SUVs.
    #[serde(rename = "Car/Suv")]
    FourWheeler,
    /// Buses and trucks.
    #[serde(rename = "Bus/Truck")]
    HeavyVehicle,
}

impl VehicleClass {
    /// All vehicle classes, in display order.
    pub const ALL: [VehicleClass; 3] = [
        VehicleClass::TwoWheeler,
        VehicleClass::FourWheeler,
        VehicleClass::HeavyVehicle,
    ];

    /// Returns the display name used on tickets and in fee model documents.
    pub const fn as_str(&self) -> &'static str {
        match self {
            VehicleClass::TwoWheeler => "Motorcycle",
            VehicleClass::FourWheeler => "Car/Suv",
            VehicleClass::HeavyVehicle => "Bus/Truck",
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for VehicleClass {
    type Err = ParkingError;

    /// Accepts the document names plus lowercase shorthands
    /// (`motorcycle`, `car`, `suv`, `car_suv`, `bus`, `truck`, `bus_truck`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "motorcycle" | "two_wheeler" => Ok(VehicleClass::TwoWheeler),
            "car/suv" | "car_suv" | "car" | "suv" | "four_wheeler" => {
                Ok(VehicleClass::FourWheeler)
            }
            "bus/truck" | "bus_truck" | "bus" | "truck" | "heavy_vehicle" => {
                Ok(VehicleClass::HeavyVehicle)
            }
            _ => Err(ParkingError::UnknownVehicle(s.to_string())),
        }
    }
}

// =============================================================================
// Action Kind
// =============================================================================

/// Which operation a request represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    /// A vehicle arrives and asks for a ticket.
    #[serde(rename = "Park")]
    Enter,
    /// A vehicle leaves and surrenders its ticket.
    #[serde(rename = "UnPark")]
    Exit,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Enter => f.write_str("Park"),
            ActionKind::Exit => f.write_str("UnPark"),
        }
    }
}

impl FromStr for ActionKind {
    type Err = ParkingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "park" | "enter" => Ok(ActionKind::Enter),
            "unpark" | "exit" => Ok(ActionKind::Exit),
            _ => Err(ParkingError::InvalidAction(s.to_string())),
        }
    }
}

// =============================================================================
// Charge Model
// =============================================================================

/// How a fee model's tiers are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChargeModel {
    /// Thresholds are hours, rates are charged per hour.
    PerHour,
    /// Thresholds are hours, rates are charged per started day.
    PerDay,
}

impl fmt::Display for ChargeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChargeModel::PerHour => f.write_str("PerHour"),
            ChargeModel::PerDay => f.write_str("PerDay"),
        }
    }
}

// =============================================================================
// Facility Kind
// =============================================================================

/// The closed set of parking sites the engine knows how to run.
///
/// ## Per-Site Constants
/// ```text
/// ┌───────────┬───────────┬──────────────┬─────────────────────────────┐
/// │ Kind      │ Pad width │ Charge model │ Disallowed vehicles         │
/// ├───────────┼───────────┼──────────────┼─────────────────────────────┤
/// │ Mall      │ 3         │ PerHour      │ -                           │
/// │ Stadium   │ 4         │ PerHour      │ Bus/Truck                   │
/// │ Airport   │ 3         │ PerDay       │ Bus/Truck                   │
/// └───────────┴───────────┴──────────────┴─────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FacilityKind {
    Mall,
    Stadium,
    Airport,
}

impl FacilityKind {
    /// Width ticket and receipt numbers are zero-padded to.
    pub const fn pad_width(&self) -> usize {
        match self {
            FacilityKind::Stadium => 4,
            FacilityKind::Mall | FacilityKind::Airport => 3,
        }
    }

    /// The only charge model this kind's fee calculator accepts.
    pub const fn charge_model(&self) -> ChargeModel {
        match self {
            FacilityKind::Mall | FacilityKind::Stadium => ChargeModel::PerHour,
            FacilityKind::Airport => ChargeModel::PerDay,
        }
    }

    /// Whether this kind may hold inventory for `vehicle` at all.
    pub const fn allows(&self, vehicle: VehicleClass) -> bool {
        match self {
            FacilityKind::Mall => true,
            FacilityKind::Stadium | FacilityKind::Airport => {
                !matches!(vehicle, VehicleClass::HeavyVehicle)
            }
        }
    }
}

impl fmt::Display for FacilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacilityKind::Mall => f.write_str("Mall"),
            FacilityKind::Stadium => f.write_str("Stadium"),
            FacilityKind::Airport => f.write_str("Airport"),
        }
    }
}

impl FromStr for FacilityKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mall" => Ok(FacilityKind::Mall),
            "stadium" => Ok(FacilityKind::Stadium),
            "airport" => Ok(FacilityKind::Airport),
            _ => Err(ConfigError::UnknownFacility(s.to_string())),
        }
    }
}

// =============================================================================
// Inventory Cap
// =============================================================================

/// Total spots per vehicle class. Classes without an entry are not allowed
/// to enter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryCap(BTreeMap<VehicleClass, u32>);

impl InventoryCap {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        InventoryCap(BTreeMap::new())
    }

    /// Builder-style helper: sets the spot count for `vehicle`.
    pub fn with(mut self, vehicle: VehicleClass, total: u32) -> Self {
        self.0.insert(vehicle, total);
        self
    }

    /// Returns the spot count for `vehicle`, if it is stocked.
    #[inline]
    pub fn capacity(&self, vehicle: VehicleClass) -> Option<u32> {
        self.0.get(&vehicle).copied()
    }

    /// Iterates over the stocked vehicle classes.
    pub fn vehicles(&self) -> impl Iterator<Item = VehicleClass> + '_ {
        self.0.keys().copied()
    }
}

impl FromIterator<(VehicleClass, u32)> for InventoryCap {
    fn from_iter<I: IntoIterator<Item = (VehicleClass, u32)>>(iter: I) -> Self {
        InventoryCap(iter.into_iter().collect())
    }
}

// =============================================================================
// Ticket
// =============================================================================

/// Issued on entry. The ticket number is unique among currently parked
/// vehicles only and is reused after exits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub ticket_number: String,
    /// 1-based; equals the occupancy count right after issuance.
    pub spot_number: u32,
    pub entry_time: DateTime<Utc>,
}

// =============================================================================
// Receipt
// =============================================================================

/// Issued on a successful exit. Receipt numbers are monotonic and never
/// reused for the lifetime of the facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub receipt_number: String,
    pub entry_time: DateTime<Utc>,
    pub exit_time: DateTime<Utc>,
    pub fee: Fee,
}

// =============================================================================
// Action / Outcome
// =============================================================================

/// A single request against a facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub kind: ActionKind,
    pub vehicle: VehicleClass,
    /// Required for `Exit`, ignored for `Enter`.
    pub ticket_number: Option<String>,
}

impl Action {
    pub fn enter(vehicle: VehicleClass) -> Self {
        Action {
            kind: ActionKind::Enter,
            vehicle,
            ticket_number: None,
        }
    }

    pub fn exit(ticket_number: impl Into<String>, vehicle: VehicleClass) -> Self {
        Action {
            kind: ActionKind::Exit,
            vehicle,
            ticket_number: Some(ticket_number.into()),
        }
    }
}

/// The successful result of an [`Action`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Ticket(Ticket),
    Receipt(Receipt),
}

// =============================================================================
// Unit Tests
// =============================================================================
