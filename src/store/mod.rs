//! Board store.
//!
//! The store owns every facility board and every vehicle record. Reads hand
//! out borrows of live state; placement changes go through the transition
//! engine (`BoardStore::move_vehicle` and friends), and the only write
//! exposed here is the free-text `update_bus`.

mod merged;

pub use merged::{MergedBoard, MergedEntry};

use crate::bays;
use crate::core::{Board, Category, FacilityConfig, FacilityId, VehiclePatch};
use crate::engine::FleetError;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Process-local owner of all facility boards.
///
/// Built from seed data via [`FleetBuilder`](crate::config::FleetBuilder),
/// [`FleetConfig`](crate::config::FleetConfig) or a
/// [`FleetSnapshot`](crate::snapshot::FleetSnapshot). The caller owns the
/// store and passes it by reference; there is no global instance.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BoardStore {
    facilities: Vec<FacilityConfig>,
    boards: BTreeMap<FacilityId, Board>,
}

impl BoardStore {
    /// Assemble a store from already-validated parts.
    pub(crate) fn from_parts(
        facilities: Vec<FacilityConfig>,
        boards: BTreeMap<FacilityId, Board>,
    ) -> Self {
        Self { facilities, boards }
    }

    /// Facility configurations, in configured order.
    pub fn facilities(&self) -> &[FacilityConfig] {
        &self.facilities
    }

    /// Facility ids, in configured order.
    pub fn facility_ids(&self) -> Vec<FacilityId> {
        self.facilities.iter().map(|f| f.id.clone()).collect()
    }

    pub fn facility(&self, facility: &FacilityId) -> Result<&FacilityConfig, FleetError> {
        self.facilities
            .iter()
            .find(|f| &f.id == facility)
            .ok_or_else(|| FleetError::UnknownFacility(facility.clone()))
    }

    /// Live board of one facility.
    pub fn board(&self, facility: &FacilityId) -> Result<&Board, FleetError> {
        self.boards
            .get(facility)
            .ok_or_else(|| FleetError::UnknownFacility(facility.clone()))
    }

    pub(crate) fn board_mut(&mut self, facility: &FacilityId) -> Result<&mut Board, FleetError> {
        self.boards
            .get_mut(facility)
            .ok_or_else(|| FleetError::UnknownFacility(facility.clone()))
    }

    pub(crate) fn boards(&self) -> impl Iterator<Item = &Board> + '_ {
        self.facilities
            .iter()
            .filter_map(|f| self.boards.get(&f.id))
    }

    /// Concatenate each category across `facilities`, in the given order.
    ///
    /// Derived on every call; the result does not track later changes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fleetboard::config::FleetConfig;
    /// use fleetboard::core::Category;
    ///
    /// let store = FleetConfig::reference().into_store().unwrap();
    /// let merged = store.merged_board(&store.facility_ids()).unwrap();
    ///
    /// let in_service: Vec<_> = merged.vehicles(Category::InService).map(|v| v.id.as_str()).collect();
    /// assert_eq!(in_service[0], "bus-104");
    /// assert_eq!(merged.len(), store.total_vehicles());
    /// ```
    pub fn merged_board(&self, facilities: &[FacilityId]) -> Result<MergedBoard, FleetError> {
        let mut merged = MergedBoard::new(facilities.to_vec());
        for facility in facilities {
            let board = self.board(facility)?;
            for (category, list) in board.iter() {
                for vehicle in list {
                    merged.push(category, facility, vehicle);
                }
            }
        }
        Ok(merged)
    }

    /// Merge `patch` into a vehicle's free-text fields.
    ///
    /// Returns `Ok(false)` when the vehicle is not in `category`; that is a
    /// no-op, not an error.
    pub fn update_bus(
        &mut self,
        facility: &FacilityId,
        category: Category,
        bus_id: &str,
        patch: VehiclePatch,
    ) -> Result<bool, FleetError> {
        let board = self.board_mut(facility)?;
        let Some(vehicle) = board.get_mut(category, bus_id) else {
            debug!(facility = %facility, category = %category, bus = bus_id, "Patch target not found");
            return Ok(false);
        };

        vehicle.apply(patch);
        debug!(facility = %facility, category = %category, bus = bus_id, "Patched vehicle");
        Ok(true)
    }

    /// Bays held in bay-requiring categories of `facility`.
    pub fn taken_bays(
        &self,
        facility: &FacilityId,
        exclude_bus_id: Option<&str>,
    ) -> Result<BTreeSet<u32>, FleetError> {
        Ok(bays::taken_bays(self.board(facility)?, exclude_bus_id))
    }

    /// Allowed bays of `facility` that are free, in configured order.
    pub fn available_bays(
        &self,
        facility: &FacilityId,
        exclude_bus_id: Option<&str>,
    ) -> Result<Vec<u32>, FleetError> {
        let config = self.facility(facility)?;
        Ok(bays::available_bays(
            config,
            self.board(facility)?,
            exclude_bus_id,
        ))
    }

    /// Number of vehicles across all facilities.
    pub fn total_vehicles(&self) -> usize {
        self.boards.values().map(Board::len).sum()
    }
}
