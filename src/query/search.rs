//! Text search across a board view.

use super::view::BoardView;
use crate::core::{Category, FacilityId, Vehicle};
use crate::engine::MoveRequest;

/// A vehicle matched by [`search`], with its true origin.
///
/// Results are shown outside their normal column, so a hit keeps the
/// owning facility and category; dropping it elsewhere must start the move
/// from there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchHit {
    pub facility: FacilityId,
    pub category: Category,
    pub vehicle: Vehicle,
}

impl SearchHit {
    /// Start a move of this vehicle from where it actually lives.
    pub fn move_to(&self, to: Category) -> MoveRequest {
        MoveRequest::new(
            self.facility.clone(),
            self.category,
            to,
            self.vehicle.id.clone(),
        )
    }
}

/// Case-insensitive search by label, bay number or `bay N`.
///
/// Hits come in category declaration order, then list order. A blank query
/// matches nothing.
///
/// # Example
///
/// ```rust
/// use fleetboard::config::FleetConfig;
/// use fleetboard::core::Category;
/// use fleetboard::query::search;
///
/// let store = FleetConfig::reference().into_store().unwrap();
/// let board = store.board(&"Miller BRT".into()).unwrap();
///
/// let hits = search(board, "Bay 4");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].vehicle.id, "bus-113");
/// assert_eq!(hits[0].category, Category::LongTerm);
/// ```
pub fn search<V: BoardView + ?Sized>(view: &V, query: &str) -> Vec<SearchHit> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    view.placements()
        .into_iter()
        .filter(|p| matches(p.vehicle, &needle))
        .map(|p| SearchHit {
            facility: p.facility.clone(),
            category: p.category,
            vehicle: p.vehicle.clone(),
        })
        .collect()
}

fn matches(vehicle: &Vehicle, needle: &str) -> bool {
    vehicle.label.to_lowercase().contains(needle) || matches_bay(vehicle, needle)
}

fn matches_bay(vehicle: &Vehicle, needle: &str) -> bool {
    let Some(bay) = vehicle.bay.number() else {
        return false;
    };
    let bay = bay.to_string();

    needle == bay
        || needle
            .strip_prefix("bay")
            .map(str::trim_start)
            .is_some_and(|rest| rest == bay)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FleetBuilder;
    use crate::store::BoardStore;

    fn store() -> BoardStore {
        FleetBuilder::new()
            .facility("A", "Depot A", vec![1, 2, 3, 12])
            .facility("B", "Depot B", vec![1, 2])
            .vehicle("A", Category::Maintenance, Vehicle::new("a1", "Bus 101", "Repair").with_bay(12))
            .vehicle("A", Category::Storage, Vehicle::new("a2", "Coach 7", "Stored"))
            .vehicle("A", Category::InService, Vehicle::new("a3", "Bus 130", "On route"))
            .vehicle("B", Category::Maintenance, Vehicle::new("b1", "Shuttle", "Repair").with_bay(1))
            .vehicle("B", Category::Storage, Vehicle::new("b2", "bus 150", "Stored"))
            .build()
            .unwrap()
    }

    fn hit_ids(hits: &[SearchHit]) -> Vec<&str> {
        hits.iter().map(|h| h.vehicle.id.as_str()).collect()
    }

    #[test]
    fn label_match_is_case_insensitive() {
        let store = store();
        let board = store.board(&"A".into()).unwrap();

        assert_eq!(hit_ids(&search(board, "BUS")), vec!["a1", "a3"]);
        assert_eq!(hit_ids(&search(board, "coach")), vec!["a2"]);
    }

    #[test]
    fn bay_number_and_bay_phrase_match() {
        let store = store();
        let board = store.board(&"A".into()).unwrap();

        assert_eq!(hit_ids(&search(board, "12")), vec!["a1"]);
        assert_eq!(hit_ids(&search(board, "bay 12")), vec!["a1"]);
        assert_eq!(hit_ids(&search(board, "  BAY12 ")), vec!["a1"]);
        assert!(search(board, "bay 2").is_empty());
    }

    #[test]
    fn bay_phrase_needs_exact_number() {
        let store = store();
        let board = store.board(&"B".into()).unwrap();

        assert_eq!(hit_ids(&search(board, "bay 1")), vec!["b1"]);
        assert!(search(board, "bay 15").is_empty());
    }

    #[test]
    fn blank_query_matches_nothing() {
        let store = store();
        let board = store.board(&"A".into()).unwrap();

        assert!(search(board, "").is_empty());
        assert!(search(board, "   ").is_empty());
    }

    #[test]
    fn merged_search_keeps_origin() {
        let store = store();
        let merged = store.merged_board(&store.facility_ids()).unwrap();

        let hits = search(&merged, "bus 1");
        assert_eq!(hit_ids(&hits), vec!["a1", "b2", "a3"]);
        assert_eq!(hits[1].facility.as_str(), "B");
        assert_eq!(hits[1].category, Category::Storage);
    }

    #[test]
    fn results_follow_category_order() {
        let store = store();
        let merged = store.merged_board(&["B".into(), "A".into()]).unwrap();

        let categories: Vec<_> = search(&merged, "s").iter().map(|h| h.category).collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
    }

    #[test]
    fn hit_moves_from_true_origin() {
        let mut store = store();
        let merged = store.merged_board(&store.facility_ids()).unwrap();
        let hit = search(&merged, "bus 150").remove(0);

        let request = hit.move_to(Category::InService);
        assert_eq!(request.facility.as_str(), "B");
        assert_eq!(request.from, Category::Storage);

        assert!(store.move_vehicle(request).unwrap().is_moved());
        let board = store.board(&"B".into()).unwrap();
        assert!(board.get(Category::InService, "b2").is_some());
    }
}
