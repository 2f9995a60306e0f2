//! Common read interface over single and merged boards.

use crate::core::{Board, Category, FacilityId, Vehicle};
use crate::store::MergedBoard;

/// A vehicle together with where it lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement<'a> {
    pub facility: &'a FacilityId,
    pub category: Category,
    pub vehicle: &'a Vehicle,
}

/// Read-only board view that queries run against.
pub trait BoardView {
    /// Every vehicle in category declaration order, then list order.
    fn placements(&self) -> Vec<Placement<'_>>;

    /// Number of vehicles in `category`.
    fn count(&self, category: Category) -> usize {
        self.placements()
            .iter()
            .filter(|p| p.category == category)
            .count()
    }

    /// Number of vehicles across all categories.
    fn total(&self) -> usize {
        self.placements().len()
    }
}

impl BoardView for Board {
    fn placements(&self) -> Vec<Placement<'_>> {
        let facility = self.facility();
        self.iter()
            .flat_map(move |(category, list)| {
                list.iter().map(move |vehicle| Placement {
                    facility,
                    category,
                    vehicle,
                })
            })
            .collect()
    }

    fn count(&self, category: Category) -> usize {
        self.list(category).len()
    }

    fn total(&self) -> usize {
        self.len()
    }
}

impl BoardView for MergedBoard {
    fn placements(&self) -> Vec<Placement<'_>> {
        self.iter()
            .flat_map(|(category, list)| {
                list.iter().map(move |entry| Placement {
                    facility: &entry.facility,
                    category,
                    vehicle: &entry.vehicle,
                })
            })
            .collect()
    }

    fn count(&self, category: Category) -> usize {
        self.list(category).len()
    }

    fn total(&self) -> usize {
        self.len()
    }
}
