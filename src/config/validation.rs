//! Seed validation using Validation.
//!
//! Seed data is checked against the same invariants the engine maintains.
//! All checks run and every violation is reported together, so a broken
//! seed file can be fixed in one pass.

use super::error::SeedViolation;
use super::FleetConfig;
use crate::core::{Category, FacilityConfig, FacilityId, Vehicle};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<SeedViolation>>;

fn check(ok: bool, violation: impl FnOnce() -> SeedViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

fn facility_checks(facilities: &[FacilityConfig]) -> Vec<Check> {
    let mut checks = Vec::new();
    let mut seen = HashSet::new();

    for facility in facilities {
        checks.push(check(seen.insert(&facility.id), || {
            SeedViolation::DuplicateFacility {
                facility: facility.id.clone(),
            }
        }));

        checks.push(check(!facility.bays.contains(&0), || {
            SeedViolation::NonPositiveBay {
                facility: facility.id.clone(),
            }
        }));

        let mut bays = BTreeSet::new();
        for bay in &facility.bays {
            checks.push(check(bays.insert(*bay), || SeedViolation::DuplicateAllowedBay {
                facility: facility.id.clone(),
                bay: *bay,
            }));
        }
    }

    checks
}

fn vehicle_checks(
    facility: &FacilityId,
    allowed: &FacilityConfig,
    category: Category,
    vehicle: &Vehicle,
    holders: &mut BTreeMap<u32, String>,
) -> Vec<Check> {
    let mut checks = Vec::new();
    let bay = vehicle.bay.number();

    if !category.requires_bay() {
        if let Some(bay) = bay {
            checks.push(Validation::fail(SeedViolation::StrayBay {
                facility: facility.clone(),
                category,
                bus_id: vehicle.id.clone(),
                bay,
            }));
        }
        return checks;
    }

    let Some(bay) = bay else {
        checks.push(Validation::fail(SeedViolation::MissingBay {
            facility: facility.clone(),
            category,
            bus_id: vehicle.id.clone(),
        }));
        return checks;
    };

    checks.push(check(allowed.allows_bay(bay), || SeedViolation::BayNotAllowed {
        facility: facility.clone(),
        bus_id: vehicle.id.clone(),
        bay,
    }));

    if let Some(first) = holders.get(&bay) {
        checks.push(Validation::fail(SeedViolation::BayConflict {
            facility: facility.clone(),
            bay,
            first: first.clone(),
            second: vehicle.id.clone(),
        }));
    } else {
        holders.insert(bay, vehicle.id.clone());
    }

    checks
}

/// Validate a fleet configuration, accumulating ALL violations.
pub(crate) fn validate(config: &FleetConfig) -> Check {
    let mut checks = facility_checks(&config.facilities);
    let mut vehicle_ids = HashSet::new();

    for (facility, lists) in &config.boards {
        let Some(allowed) = config.facilities.iter().find(|f| &f.id == facility) else {
            checks.push(Validation::fail(SeedViolation::UnknownFacility {
                facility: facility.clone(),
            }));
            continue;
        };

        let mut holders = BTreeMap::new();
        for (category, vehicles) in lists {
            for vehicle in vehicles {
                checks.push(check(vehicle_ids.insert(vehicle.id.as_str()), || {
                    SeedViolation::DuplicateVehicle {
                        bus_id: vehicle.id.clone(),
                    }
                }));
                checks.extend(vehicle_checks(
                    facility,
                    allowed,
                    *category,
                    vehicle,
                    &mut holders,
                ));
            }
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FleetBuilder;

    fn violations(config: &FleetConfig) -> Vec<SeedViolation> {
        match validate(config) {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }

    #[test]
    fn reference_seed_is_valid() {
        assert!(validate(&FleetConfig::reference()).is_success());
    }

    #[test]
    fn empty_config_is_valid() {
        assert!(validate(&FleetConfig::default()).is_success());
    }

    #[test]
    fn accumulates_all_violations() {
        let config = FleetBuilder::new()
            .facility("F1", "Facility 1", vec![1, 2])
            .vehicle("F1", Category::Maintenance, Vehicle::new("a", "A", "x"))
            .vehicle("F1", Category::LongTerm, Vehicle::new("b", "B", "x").with_bay(7))
            .vehicle("F1", Category::Storage, Vehicle::new("c", "C", "x").with_bay(1))
            .vehicle("F9", Category::Storage, Vehicle::new("d", "D", "x"))
            .into_config();

        let found = violations(&config);

        assert_eq!(found.len(), 4);
        assert!(found
            .iter()
            .any(|v| matches!(v, SeedViolation::MissingBay { bus_id, .. } if bus_id == "a")));
        assert!(found
            .iter()
            .any(|v| matches!(v, SeedViolation::BayNotAllowed { bay: 7, .. })));
        assert!(found
            .iter()
            .any(|v| matches!(v, SeedViolation::StrayBay { bay: 1, .. })));
        assert!(found
            .iter()
            .any(|v| matches!(v, SeedViolation::UnknownFacility { .. })));
    }

    #[test]
    fn detects_shared_bay_across_repair_columns() {
        let config = FleetBuilder::new()
            .facility("F1", "Facility 1", vec![1, 2, 3])
            .vehicle("F1", Category::Maintenance, Vehicle::new("a", "A", "x").with_bay(2))
            .vehicle("F1", Category::LongTerm, Vehicle::new("b", "B", "x").with_bay(2))
            .into_config();

        assert_eq!(
            violations(&config),
            vec![SeedViolation::BayConflict {
                facility: FacilityId::new("F1"),
                bay: 2,
                first: "a".to_string(),
                second: "b".to_string(),
            }]
        );
    }

    #[test]
    fn same_bay_in_different_facilities_is_fine() {
        let config = FleetBuilder::new()
            .facility("F1", "Facility 1", vec![1])
            .facility("F2", "Facility 2", vec![1])
            .vehicle("F1", Category::Maintenance, Vehicle::new("a", "A", "x").with_bay(1))
            .vehicle("F2", Category::Maintenance, Vehicle::new("b", "B", "x").with_bay(1))
            .into_config();

        assert!(validate(&config).is_success());
    }

    #[test]
    fn vehicle_ids_are_unique_across_facilities() {
        let config = FleetBuilder::new()
            .facility("F1", "Facility 1", vec![1])
            .facility("F2", "Facility 2", vec![1])
            .vehicle("F1", Category::Storage, Vehicle::new("dup", "A", "x"))
            .vehicle("F2", Category::InService, Vehicle::new("dup", "B", "x"))
            .into_config();

        assert_eq!(
            violations(&config),
            vec![SeedViolation::DuplicateVehicle {
                bus_id: "dup".to_string()
            }]
        );
    }

    #[test]
    fn facility_bay_sets_are_checked() {
        let config = FleetBuilder::new()
            .facility("F1", "Facility 1", vec![0, 1, 1])
            .facility("F1", "Facility 1 again", vec![1])
            .into_config();

        let found = violations(&config);

        assert_eq!(found.len(), 3);
        assert!(found
            .iter()
            .any(|v| matches!(v, SeedViolation::DuplicateFacility { .. })));
        assert!(found
            .iter()
            .any(|v| matches!(v, SeedViolation::NonPositiveBay { .. })));
        assert!(found
            .iter()
            .any(|v| matches!(v, SeedViolation::DuplicateAllowedBay { bay: 1, .. })));
    }
}
