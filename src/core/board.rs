//! Per-facility board: one ordered vehicle list per category.

use super::category::Category;
use super::facility::FacilityId;
use super::vehicle::Vehicle;
use std::collections::BTreeMap;
use std::ops::Index;

/// Ordered category lists for one facility.
///
/// Every category in [`Category::ALL`] has a list, possibly empty. List
/// order is display and drop position. A vehicle id appears in at most one
/// list.
///
/// # Example
///
/// ```rust
/// use fleetboard::core::{Board, Category};
///
/// let board = Board::new("MOB2");
/// assert!(board[Category::Storage].is_empty());
/// assert_eq!(board.len(), 0);
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    facility: FacilityId,
    lists: BTreeMap<Category, Vec<Vehicle>>,
}

impl Board {
    /// Create a board with an empty list for every category.
    pub fn new(facility: impl Into<FacilityId>) -> Self {
        Self {
            facility: facility.into(),
            lists: Category::ALL.into_iter().map(|c| (c, Vec::new())).collect(),
        }
    }

    /// Build a board from seeded lists; missing categories start empty.
    pub(crate) fn from_lists(
        facility: FacilityId,
        seeded: BTreeMap<Category, Vec<Vehicle>>,
    ) -> Self {
        let mut board = Self::new(facility);
        board.lists.extend(seeded);
        board
    }

    pub fn facility(&self) -> &FacilityId {
        &self.facility
    }

    /// Vehicles in `category`, in display order.
    pub fn list(&self, category: Category) -> &[Vehicle] {
        self.lists.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn list_mut(&mut self, category: Category) -> &mut Vec<Vehicle> {
        self.lists.entry(category).or_default()
    }

    /// Category lists in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Vehicle])> + '_ {
        self.lists.iter().map(|(c, list)| (*c, list.as_slice()))
    }

    /// Index of `bus_id` within `category`, if present.
    pub fn position(&self, category: Category, bus_id: &str) -> Option<usize> {
        self.list(category).iter().position(|v| v.id == bus_id)
    }

    /// Find which category holds `bus_id`, and where.
    pub fn locate(&self, bus_id: &str) -> Option<(Category, usize)> {
        self.iter().find_map(|(category, list)| {
            list.iter()
                .position(|v| v.id == bus_id)
                .map(|index| (category, index))
        })
    }

    pub fn get(&self, category: Category, bus_id: &str) -> Option<&Vehicle> {
        self.list(category).iter().find(|v| v.id == bus_id)
    }

    pub(crate) fn get_mut(&mut self, category: Category, bus_id: &str) -> Option<&mut Vehicle> {
        self.list_mut(category).iter_mut().find(|v| v.id == bus_id)
    }

    /// Total number of vehicles across all categories.
    pub fn len(&self) -> usize {
        self.lists.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn to_lists(&self) -> BTreeMap<Category, Vec<Vehicle>> {
        self.lists.clone()
    }
}

impl Index<Category> for Board {
    type Output = [Vehicle];

    fn index(&self, category: Category) -> &Self::Output {
        self.list(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_board() -> Board {
        let mut board = Board::new("Miller SE");
        board
            .list_mut(Category::Maintenance)
            .push(Vehicle::new("bus-105", "Bus 105", "Waiting Parts").with_bay(1));
        board
            .list_mut(Category::Storage)
            .push(Vehicle::new("bus-115", "Bus 115", "Stored"));
        board
            .list_mut(Category::InService)
            .push(Vehicle::new("bus-106", "Bus 106", "--"));
        board
    }

    #[test]
    fn new_board_has_every_category() {
        let board = Board::new("MOB1");
        let categories: Vec<_> = board.iter().map(|(c, _)| c).collect();

        assert_eq!(categories, Category::ALL.to_vec());
        assert!(board.is_empty());
    }

    #[test]
    fn locate_finds_category_and_index() {
        let board = sample_board();

        assert_eq!(board.locate("bus-106"), Some((Category::InService, 0)));
        assert_eq!(board.locate("bus-999"), None);
    }

    #[test]
    fn position_is_scoped_to_category() {
        let board = sample_board();

        assert_eq!(board.position(Category::Storage, "bus-115"), Some(0));
        assert_eq!(board.position(Category::Maintenance, "bus-115"), None);
    }

    #[test]
    fn from_lists_fills_missing_categories() {
        let seeded = BTreeMap::from([(
            Category::Storage,
            vec![Vehicle::new("bus-109", "Bus 109", "--")],
        )]);
        let board = Board::from_lists(FacilityId::new("MOB2"), seeded);

        assert_eq!(board.iter().count(), Category::ALL.len());
        assert_eq!(board[Category::Storage].len(), 1);
        assert!(board[Category::ThirdParty].is_empty());
    }

    #[test]
    fn len_counts_all_lists() {
        assert_eq!(sample_board().len(), 3);
    }
}
