//! Saving an edit sheet: field changes plus an optional category change.

use crate::core::{Category, FacilityId, VehiclePatch};
use crate::engine::error::FleetError;
use crate::engine::transition::{MoveOutcome, MoveRequest, Unchanged};
use crate::store::BoardStore;
use tracing::debug;

/// Edits made to one vehicle in an edit form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditRequest {
    pub facility: FacilityId,
    /// Category the vehicle was opened from
    pub from: Category,
    /// Category selected in the form
    pub to: Category,
    pub bus_id: String,
    pub patch: VehiclePatch,
    pub requested_bay: Option<i64>,
}

impl EditRequest {
    pub fn new(
        facility: impl Into<FacilityId>,
        from: Category,
        to: Category,
        bus_id: impl Into<String>,
        patch: VehiclePatch,
    ) -> Self {
        Self {
            facility: facility.into(),
            from,
            to,
            bus_id: bus_id.into(),
            patch,
            requested_bay: None,
        }
    }

    pub fn bay(mut self, bay: i64) -> Self {
        self.requested_bay = Some(bay);
        self
    }
}

impl BoardStore {
    /// Apply an edit: move to the selected category, then merge the
    /// field changes with `status` set to that category's label.
    ///
    /// The move runs first. If it is rejected the patch is not applied,
    /// so a refused edit changes nothing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fleetboard::config::FleetConfig;
    /// use fleetboard::core::{Category, VehiclePatch};
    /// use fleetboard::engine::EditRequest;
    ///
    /// let mut store = FleetConfig::reference().into_store().unwrap();
    /// let edit = EditRequest::new(
    ///     "Miller BRT",
    ///     Category::Storage,
    ///     Category::OutOfService,
    ///     "bus-103",
    ///     VehiclePatch::new().notes("Cracked windshield"),
    /// );
    /// store.apply_edit(edit).unwrap();
    ///
    /// let board = store.board(&"Miller BRT".into()).unwrap();
    /// let bus = board.get(Category::OutOfService, "bus-103").unwrap();
    /// assert_eq!(bus.status, "Out of service");
    /// ```
    pub fn apply_edit(&mut self, edit: EditRequest) -> Result<MoveOutcome, FleetError> {
        let EditRequest {
            facility,
            from,
            to,
            bus_id,
            patch,
            requested_bay,
        } = edit;

        let request = MoveRequest {
            facility: facility.clone(),
            from,
            to,
            bus_id: bus_id.clone(),
            requested_bay,
            target_index: None,
        };
        let outcome = self.move_vehicle(request)?;

        let current = match outcome {
            MoveOutcome::Moved { .. } => to,
            MoveOutcome::Unchanged(Unchanged::SameCategory) => from,
            MoveOutcome::Unchanged(Unchanged::NotFound) => {
                debug!(facility = %facility, bus = %bus_id, "Edit target not found");
                return Ok(outcome);
            }
        };

        self.update_bus(&facility, current, &bus_id, patch.status(to.label()))?;
        Ok(outcome)
    }
}
