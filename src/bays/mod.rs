//! Bay registry.
//!
//! Bays are derived state: a bay is taken when some vehicle in a
//! bay-requiring category of the same facility carries its number. These
//! functions are pure over a board and never mutate it.

use crate::core::{Board, Category, FacilityConfig};
use std::collections::BTreeSet;

/// Bays held by vehicles in bay-requiring categories of `board`.
///
/// `exclude_bus_id` skips one vehicle, so a vehicle re-validating its own
/// bay does not collide with itself.
///
/// # Example
///
/// ```rust
/// use fleetboard::bays::taken_bays;
/// use fleetboard::config::FleetBuilder;
/// use fleetboard::core::{Category, Vehicle};
///
/// let store = FleetBuilder::new()
///     .facility("F1", "Facility 1", vec![1, 2, 3])
///     .vehicle("F1", Category::Maintenance, Vehicle::new("V2", "Bus 2", "Repair").with_bay(2))
///     .build()
///     .unwrap();
/// let board = store.board(&"F1".into()).unwrap();
///
/// assert!(taken_bays(board, None).contains(&2));
/// assert!(taken_bays(board, Some("V2")).is_empty());
/// ```
pub fn taken_bays(board: &Board, exclude_bus_id: Option<&str>) -> BTreeSet<u32> {
    Category::ALL
        .into_iter()
        .filter(Category::requires_bay)
        .flat_map(|category| board.list(category))
        .filter(|vehicle| exclude_bus_id != Some(vehicle.id.as_str()))
        .filter_map(|vehicle| vehicle.bay.number())
        .collect()
}

/// Allowed bays of `facility` not currently taken on `board`.
///
/// Preserves the facility's configured bay order.
pub fn available_bays(
    facility: &FacilityConfig,
    board: &Board,
    exclude_bus_id: Option<&str>,
) -> Vec<u32> {
    let taken = taken_bays(board, exclude_bus_id);
    facility
        .bays
        .iter()
        .copied()
        .filter(|bay| !taken.contains(bay))
        .collect()
}
