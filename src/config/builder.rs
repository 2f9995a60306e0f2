//! Builder API for assembling a fleet.

use super::{ConfigError, FleetConfig};
use crate::core::{Category, FacilityConfig, FacilityId, Vehicle};
use crate::store::BoardStore;

/// Builder for creating a validated [`BoardStore`].
///
/// # Example
///
/// ```rust
/// use fleetboard::config::FleetBuilder;
/// use fleetboard::core::{Category, Vehicle};
///
/// let store = FleetBuilder::new()
///     .facility("MOB2", "MOB2", vec![1, 2])
///     .vehicle("MOB2", Category::Storage, Vehicle::new("bus-109", "Bus 109", "--"))
///     .build()
///     .unwrap();
///
/// assert_eq!(store.total_vehicles(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FleetBuilder {
    config: FleetConfig,
}

impl FleetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a facility with its allowed bay numbers
    pub fn facility(
        mut self,
        id: impl Into<FacilityId>,
        name: impl Into<String>,
        bays: Vec<u32>,
    ) -> Self {
        self.config
            .facilities
            .push(FacilityConfig::new(id, name, bays));
        self
    }

    /// Append a vehicle to the end of a category list
    pub fn vehicle(
        mut self,
        facility: impl Into<FacilityId>,
        category: Category,
        vehicle: Vehicle,
    ) -> Self {
        self.config
            .boards
            .entry(facility.into())
            .or_default()
            .entry(category)
            .or_default()
            .push(vehicle);
        self
    }

    /// Unvalidated configuration assembled so far
    pub fn into_config(self) -> FleetConfig {
        self.config
    }

    /// Validate and build the store
    pub fn build(self) -> Result<BoardStore, ConfigError> {
        self.config.into_store()
    }
}
