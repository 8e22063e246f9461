//! Facility selection: facility tag in, ready-to-use [`Facility`] out.

use std::sync::Arc;

use crate::clock::Clock;
use crate::error::ConfigError;
use crate::facility::Facility;
use crate::schedule::{FeeModel, FeeModels};
use crate::types::{FacilityKind, InventoryCap};

/// Builds the facility named by `tag` (`"Mall"`, `"stadium"`, ...).
///
/// ## Errors
/// - [`ConfigError::UnknownFacility`] for an unrecognised tag
/// - [`ConfigError::DisallowedVehicle`] from construction
pub fn select(
    tag: &str,
    fee_model: FeeModel,
    inventory: InventoryCap,
    clock: Arc<dyn Clock>,
) -> Result<Facility, ConfigError> {
    let kind: FacilityKind = tag.parse()?;
    Facility::new(kind, fee_model, inventory, clock)
}

/// Builds a facility of `kind` using its entry from a loaded document.
pub fn select_from_models(
    kind: FacilityKind,
    models: &FeeModels,
    inventory: InventoryCap,
    clock: Arc<dyn Clock>,
) -> Result<Facility, ConfigError> {
    let fee_model = models
        .get(kind)
        .cloned()
        .ok_or(ConfigError::MissingFeeModel(kind))?;
    Facility::new(kind, fee_model, inventory, clock)
}
