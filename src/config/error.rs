//! Configuration errors and seed violations.

use crate::core::{Category, FacilityId};
use thiserror::Error;

/// A single broken invariant in seed data
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SeedViolation {
    #[error("Facility '{facility}' is configured more than once")]
    DuplicateFacility { facility: FacilityId },

    #[error("Facility '{facility}' lists bay 0; bay numbers start at 1")]
    NonPositiveBay { facility: FacilityId },

    #[error("Facility '{facility}' lists bay {bay} more than once")]
    DuplicateAllowedBay { facility: FacilityId, bay: u32 },

    #[error("Board seeded for unknown facility '{facility}'")]
    UnknownFacility { facility: FacilityId },

    #[error("Vehicle '{bus_id}' appears more than once")]
    DuplicateVehicle { bus_id: String },

    #[error("Vehicle '{bus_id}' in {category} at '{facility}' has no bay")]
    MissingBay {
        facility: FacilityId,
        category: Category,
        bus_id: String,
    },

    #[error("Vehicle '{bus_id}' at '{facility}' holds bay {bay}, which the facility does not have")]
    BayNotAllowed {
        facility: FacilityId,
        bus_id: String,
        bay: u32,
    },

    #[error("Bay {bay} at '{facility}' is held by both '{first}' and '{second}'")]
    BayConflict {
        facility: FacilityId,
        bay: u32,
        first: String,
        second: String,
    },

    #[error("Vehicle '{bus_id}' in {category} at '{facility}' holds bay {bay}, but {category} has no bays")]
    StrayBay {
        facility: FacilityId,
        category: Category,
        bus_id: String,
        bay: u32,
    },
}

/// Errors that can occur when loading fleet configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse fleet configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Every violation found, not just the first
    #[error("Fleet configuration is invalid ({} violation(s))", .violations.len())]
    Invalid { violations: Vec<SeedViolation> },
}
