//! Property-based tests for board invariants.
//!
//! These tests use proptest to drive the reference fleet through random
//! sequences of moves, reorders and edits, checking after every step that
//! placement and bay invariants still hold.

use fleetboard::config::FleetConfig;
use fleetboard::core::{Bay, Category, FacilityId, VehiclePatch};
use fleetboard::engine::{EditRequest, MoveOutcome, MoveRequest};
use fleetboard::query::search;
use fleetboard::BoardStore;
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Debug)]
enum Op {
    Move {
        vehicle: usize,
        to: Category,
        bay: Option<i64>,
        index: Option<usize>,
        true_origin: bool,
        wrong_from: Category,
    },
    Reorder {
        facility: usize,
        category: Category,
        from: usize,
        to: usize,
    },
    Edit {
        vehicle: usize,
        to: Category,
        bay: Option<i64>,
    },
}

prop_compose! {
    fn arbitrary_category()(variant in 0..Category::ALL.len()) -> Category {
        Category::ALL[variant]
    }
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (
            0..32usize,
            arbitrary_category(),
            prop::option::of(-1i64..8),
            prop::option::of(0..6usize),
            prop::bool::weighted(0.85),
            arbitrary_category(),
        )
            .prop_map(|(vehicle, to, bay, index, true_origin, wrong_from)| Op::Move {
                vehicle,
                to,
                bay,
                index,
                true_origin,
                wrong_from,
            }),
        1 => (0..6usize, arbitrary_category(), 0..5usize, 0..5usize)
            .prop_map(|(facility, category, from, to)| Op::Reorder {
                facility,
                category,
                from,
                to,
            }),
        1 => (0..32usize, arbitrary_category(), prop::option::of(0i64..7))
            .prop_map(|(vehicle, to, bay)| Op::Edit { vehicle, to, bay }),
    ]
}

fn all_vehicle_ids(store: &BoardStore) -> Vec<String> {
    let merged = store.merged_board(&store.facility_ids()).unwrap();
    let mut ids: Vec<_> = merged
        .iter()
        .flat_map(|(_, list)| list.iter().map(|e| e.vehicle.id.clone()))
        .collect();
    ids.sort();
    ids
}

/// Where a vehicle currently sits, across all facilities.
fn locate(store: &BoardStore, bus_id: &str) -> Option<(FacilityId, Category)> {
    store.facility_ids().into_iter().find_map(|facility| {
        let board = store.board(&facility).unwrap();
        board
            .locate(bus_id)
            .map(|(category, _)| (facility.clone(), category))
    })
}

fn check_invariants(
    store: &BoardStore,
    expected_ids: &[String],
    home: &BTreeMap<String, FacilityId>,
) -> Result<(), TestCaseError> {
    // Every vehicle is placed exactly once, and never changes facility
    prop_assert_eq!(&all_vehicle_ids(store), expected_ids);

    for facility in store.facilities() {
        let board = store.board(&facility.id).unwrap();
        let mut seen_bays = BTreeSet::new();

        for (category, list) in board.iter() {
            for vehicle in list {
                prop_assert_eq!(&home[&vehicle.id], &facility.id);

                match vehicle.bay {
                    Bay::Assigned(bay) => {
                        prop_assert!(category.requires_bay(), "stray bay on {}", vehicle.id);
                        prop_assert!(facility.allows_bay(bay), "bay {} outside facility", bay);
                        prop_assert!(seen_bays.insert(bay), "bay {} held twice", bay);
                    }
                    Bay::None => {
                        prop_assert!(!category.requires_bay(), "{} lacks a bay", vehicle.id);
                    }
                }
            }
        }
    }

    Ok(())
}

proptest! {
    #[test]
    fn invariants_survive_random_operations(ops in prop::collection::vec(arbitrary_op(), 1..40)) {
        let mut store = FleetConfig::reference().into_store().unwrap();
        let ids = all_vehicle_ids(&store);
        let home: BTreeMap<_, _> = ids
            .iter()
            .map(|id| (id.clone(), locate(&store, id).unwrap().0))
            .collect();
        let facilities = store.facility_ids();

        for op in ops {
            let before = store.clone();

            match op {
                Op::Move { vehicle, to, bay, index, true_origin, wrong_from } => {
                    let bus_id = &ids[vehicle % ids.len()];
                    let (facility, origin) = locate(&store, bus_id).unwrap();
                    let from = if true_origin { origin } else { wrong_from };

                    let mut request = MoveRequest::new(facility.clone(), from, to, bus_id.clone());
                    request.requested_bay = bay;
                    request.target_index = index;

                    match store.move_vehicle(request) {
                        Ok(MoveOutcome::Moved { bay: assigned, .. }) => {
                            let board = store.board(&facility).unwrap();
                            let moved = board.get(to, bus_id).unwrap();
                            prop_assert_eq!(moved.bay, assigned);
                            if !to.requires_bay() {
                                prop_assert_eq!(moved.bay, Bay::None);
                            }
                        }
                        Ok(MoveOutcome::Unchanged(_)) => prop_assert_eq!(&store, &before),
                        Err(_) => prop_assert_eq!(&store, &before),
                    }
                }
                Op::Reorder { facility, category, from, to } => {
                    let facility = &facilities[facility % facilities.len()];
                    store.reorder(facility, category, from, to).unwrap();
                }
                Op::Edit { vehicle, to, bay } => {
                    let bus_id = &ids[vehicle % ids.len()];
                    let (facility, from) = locate(&store, bus_id).unwrap();

                    let mut edit = EditRequest::new(
                        facility,
                        from,
                        to,
                        bus_id.clone(),
                        VehiclePatch::new().notes("edited"),
                    );
                    edit.requested_bay = bay;

                    if store.apply_edit(edit).is_err() {
                        prop_assert_eq!(&store, &before);
                    }
                }
            }

            check_invariants(&store, &ids, &home)?;
        }
    }

    #[test]
    fn available_bays_are_exactly_the_free_allowed_bays(
        ops in prop::collection::vec((0..32usize, arbitrary_category(), 1i64..7), 0..20)
    ) {
        let mut store = FleetConfig::reference().into_store().unwrap();
        let ids = all_vehicle_ids(&store);

        for (vehicle, to, bay) in ops {
            let bus_id = &ids[vehicle % ids.len()];
            let (facility, from) = locate(&store, bus_id).unwrap();
            let _ = store.move_vehicle(MoveRequest::new(facility, from, to, bus_id.clone()).bay(bay));
        }

        for facility in store.facilities() {
            let available = store.available_bays(&facility.id, None).unwrap();
            let taken = store.taken_bays(&facility.id, None).unwrap();

            for bay in &facility.bays {
                prop_assert_ne!(available.contains(bay), taken.contains(bay));
            }
            prop_assert!(available.iter().all(|b| facility.allows_bay(*b)));
        }
    }

    #[test]
    fn merged_view_is_concatenation(
        order in Just((0..6usize).collect::<Vec<_>>()).prop_shuffle()
    ) {
        let store = FleetConfig::reference().into_store().unwrap();
        let all = store.facility_ids();
        let facilities: Vec<_> = order.iter().map(|i| all[*i].clone()).collect();
        let merged = store.merged_board(&facilities).unwrap();

        for category in Category::ALL {
            let expected: Vec<_> = facilities
                .iter()
                .flat_map(|f| store.board(f).unwrap()[category].to_vec())
                .collect();
            let actual: Vec<_> = merged.vehicles(category).cloned().collect();
            prop_assert_eq!(actual, expected);
        }
    }

    #[test]
    fn search_hits_point_at_real_placements(query in "[a-zA-Z0-9 ]{0,8}") {
        let store = FleetConfig::reference().into_store().unwrap();
        let merged = store.merged_board(&store.facility_ids()).unwrap();

        for hit in search(&merged, &query) {
            let board = store.board(&hit.facility).unwrap();
            prop_assert_eq!(board.get(hit.category, &hit.vehicle.id), Some(&hit.vehicle));
        }
    }
}
