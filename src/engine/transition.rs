//! Moving vehicles between categories.

use crate::bays;
use crate::core::{Bay, Board, Category, FacilityConfig, FacilityId};
use crate::engine::error::{FleetError, MoveRejection};
use crate::store::BoardStore;
use tracing::{debug, info, warn};

/// A request to move one vehicle between categories of one facility.
///
/// # Example
///
/// ```rust
/// use fleetboard::core::Category;
/// use fleetboard::engine::MoveRequest;
///
/// let request = MoveRequest::new("MOB1", Category::Storage, Category::Maintenance, "bus-107")
///     .bay(2)
///     .at(0);
///
/// assert_eq!(request.requested_bay, Some(2));
/// assert_eq!(request.target_index, Some(0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRequest {
    pub facility: FacilityId,
    pub from: Category,
    pub to: Category,
    pub bus_id: String,
    /// Bay to assign; falls back to the vehicle's current bay when unset
    pub requested_bay: Option<i64>,
    /// Drop position in the destination list; appends when unset
    pub target_index: Option<usize>,
}

impl MoveRequest {
    pub fn new(
        facility: impl Into<FacilityId>,
        from: Category,
        to: Category,
        bus_id: impl Into<String>,
    ) -> Self {
        Self {
            facility: facility.into(),
            from,
            to,
            bus_id: bus_id.into(),
            requested_bay: None,
            target_index: None,
        }
    }

    /// Request a specific bay.
    pub fn bay(mut self, bay: i64) -> Self {
        self.requested_bay = Some(bay);
        self
    }

    /// Insert at `index` in the destination list (clamped to its length).
    pub fn at(mut self, index: usize) -> Self {
        self.target_index = Some(index);
        self
    }
}

/// Why a successful move changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unchanged {
    /// Source and destination are the same category
    SameCategory,
    /// The vehicle was not in the source list (already moved)
    NotFound,
}

/// Successful result of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The vehicle now sits at `index` of the destination list holding `bay`
    Moved { index: usize, bay: Bay },

    Unchanged(Unchanged),
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Decide the bay a vehicle holds after entering `to` (pure).
fn resolve_bay(
    facility: &FacilityConfig,
    board: &Board,
    bus_id: &str,
    to: Category,
    requested: Option<i64>,
    current: Bay,
) -> Result<Bay, MoveRejection> {
    if !to.requires_bay() {
        return Ok(Bay::None);
    }

    let candidate = requested
        .or_else(|| current.number().map(i64::from))
        .ok_or(MoveRejection::BayRequired)?;

    let bay = u32::try_from(candidate)
        .ok()
        .filter(|n| *n > 0 && facility.allows_bay(*n))
        .ok_or(MoveRejection::BayInvalid { bay: candidate })?;

    if bays::taken_bays(board, Some(bus_id)).contains(&bay) {
        return Err(MoveRejection::BayTaken { bay });
    }

    Ok(Bay::Assigned(bay))
}

impl BoardStore {
    /// Move a vehicle between categories of one facility.
    ///
    /// Entering a bay-requiring category needs a bay that is positive,
    /// allowed by the facility and not held by another vehicle; any other
    /// category clears the bay. Validation happens before the lists are
    /// touched, so a rejected move leaves the board unchanged.
    ///
    /// A vehicle missing from `from` is not an error: the move reports
    /// [`Unchanged::NotFound`] and does nothing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fleetboard::config::FleetBuilder;
    /// use fleetboard::core::{Bay, Category, Vehicle};
    /// use fleetboard::engine::{MoveOutcome, MoveRejection, MoveRequest};
    ///
    /// let mut store = FleetBuilder::new()
    ///     .facility("F1", "Facility 1", vec![1, 2, 3])
    ///     .vehicle("F1", Category::Storage, Vehicle::new("V1", "Bus 1", "Stored"))
    ///     .build()
    ///     .unwrap();
    ///
    /// let refused = store
    ///     .move_vehicle(MoveRequest::new("F1", Category::Storage, Category::Maintenance, "V1"))
    ///     .unwrap_err();
    /// assert_eq!(refused.rejection(), Some(MoveRejection::BayRequired));
    ///
    /// let outcome = store
    ///     .move_vehicle(MoveRequest::new("F1", Category::Storage, Category::Maintenance, "V1").bay(1))
    ///     .unwrap();
    /// assert_eq!(outcome, MoveOutcome::Moved { index: 0, bay: Bay::Assigned(1) });
    /// ```
    pub fn move_vehicle(&mut self, request: MoveRequest) -> Result<MoveOutcome, FleetError> {
        let MoveRequest {
            facility,
            from,
            to,
            bus_id,
            requested_bay,
            target_index,
        } = request;

        debug!(
            facility = %facility,
            bus = %bus_id,
            from = %from,
            to = %to,
            bay = ?requested_bay,
            "Moving vehicle"
        );

        if from == to {
            return Ok(MoveOutcome::Unchanged(Unchanged::SameCategory));
        }

        let config = self.facility(&facility)?;
        let board = self.board(&facility)?;

        let Some(source_index) = board.position(from, &bus_id) else {
            debug!(facility = %facility, bus = %bus_id, from = %from, "Vehicle not in source list");
            return Ok(MoveOutcome::Unchanged(Unchanged::NotFound));
        };
        let current = board.list(from)[source_index].bay;

        let bay = match resolve_bay(config, board, &bus_id, to, requested_bay, current) {
            Ok(bay) => bay,
            Err(rejection) => {
                warn!(
                    facility = %facility,
                    bus = %bus_id,
                    to = %to,
                    reason = rejection.reason(),
                    "Move rejected"
                );
                return Err(rejection.into());
            }
        };

        let board = self.board_mut(&facility)?;
        let mut vehicle = board.list_mut(from).remove(source_index);
        vehicle.bay = bay;

        let destination = board.list_mut(to);
        let index = target_index.map_or(destination.len(), |i| i.min(destination.len()));
        destination.insert(index, vehicle);

        info!(
            facility = %facility,
            bus = %bus_id,
            from = %from,
            to = %to,
            index,
            bay = ?bay.number(),
            "Moved vehicle"
        );
        Ok(MoveOutcome::Moved { index, bay })
    }

    /// Reorder a vehicle within one category list.
    ///
    /// Both indices are clamped to the list. Bays are untouched. Returns
    /// whether the order changed.
    pub fn reorder(
        &mut self,
        facility: &FacilityId,
        category: Category,
        from_index: usize,
        to_index: usize,
    ) -> Result<bool, FleetError> {
        let list = self.board_mut(facility)?.list_mut(category);
        let Some(last) = list.len().checked_sub(1) else {
            return Ok(false);
        };

        let from = from_index.min(last);
        let to = to_index.min(last);
        if from == to {
            return Ok(false);
        }

        let vehicle = list.remove(from);
        debug!(facility = %facility, category = %category, bus = %vehicle.id, from, to, "Reordered vehicle");
        list.insert(to, vehicle);
        Ok(true)
    }
}
