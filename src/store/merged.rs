//! Read-only board merged across several facilities.

use crate::core::{Category, FacilityId, Vehicle};
use std::collections::BTreeMap;

/// A vehicle in a merged view, tagged with the facility that owns it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MergedEntry {
    pub facility: FacilityId,
    pub vehicle: Vehicle,
}

/// Synthetic board whose category lists concatenate the same category
/// across facilities, in the requested facility order.
///
/// Built fresh by [`BoardStore::merged_board`](crate::store::BoardStore::merged_board)
/// and detached from the store: there is nothing to mutate through it.
/// To move a vehicle seen here, use the entry's `facility`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MergedBoard {
    facilities: Vec<FacilityId>,
    lists: BTreeMap<Category, Vec<MergedEntry>>,
}

impl MergedBoard {
    pub(crate) fn new(facilities: Vec<FacilityId>) -> Self {
        Self {
            facilities,
            lists: Category::ALL.into_iter().map(|c| (c, Vec::new())).collect(),
        }
    }

    pub(crate) fn push(&mut self, category: Category, facility: &FacilityId, vehicle: &Vehicle) {
        self.lists.entry(category).or_default().push(MergedEntry {
            facility: facility.clone(),
            vehicle: vehicle.clone(),
        });
    }

    /// Facilities merged into this view, in concatenation order.
    pub fn facilities(&self) -> &[FacilityId] {
        &self.facilities
    }

    pub fn list(&self, category: Category) -> &[MergedEntry] {
        self.lists.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Vehicles of one category without their facility tags.
    pub fn vehicles(&self, category: Category) -> impl Iterator<Item = &Vehicle> + '_ {
        self.list(category).iter().map(|entry| &entry.vehicle)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[MergedEntry])> + '_ {
        self.lists.iter().map(|(c, list)| (*c, list.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.lists.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
