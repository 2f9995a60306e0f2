//! Fleet configuration and seed data.
//!
//! A [`FleetConfig`] describes the facilities (with their allowed bays) and
//! the initial placement of every vehicle. It is plain serde data, so it can
//! be written inline with [`FleetBuilder`], loaded from JSON, or taken from
//! the built-in [`FleetConfig::reference`] seed.
//!
//! Turning a config into a [`BoardStore`] validates it first, reporting
//! every violated invariant at once:
//!
//! ```rust
//! use fleetboard::config::{ConfigError, FleetConfig};
//!
//! let json = r#"{
//!     "facilities": [{ "id": "F1", "name": "Facility 1", "bays": [1, 2] }],
//!     "boards": {
//!         "F1": {
//!             "maintenance": [{ "id": "a", "label": "A", "status": "x" }],
//!             "storage": [{ "id": "b", "label": "B", "status": "x", "bay": 9 }]
//!         }
//!     }
//! }"#;
//!
//! let config = FleetConfig::from_json(json).unwrap();
//! match config.into_store() {
//!     Err(ConfigError::Invalid { violations }) => assert_eq!(violations.len(), 2),
//!     other => panic!("expected violations, got {other:?}"),
//! }
//! ```

mod builder;
mod error;
mod seed;
mod validation;

pub use builder::FleetBuilder;
pub use error::{ConfigError, SeedViolation};

use crate::core::{Board, Category, FacilityConfig, FacilityId, Vehicle};
use crate::store::BoardStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use stillwater::validation::Validation;
use tracing::{info, warn};

/// Seed lists for one facility board.
pub type BoardSeed = BTreeMap<Category, Vec<Vehicle>>;

/// Facilities plus the initial placement of every vehicle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetConfig {
    pub facilities: Vec<FacilityConfig>,
    #[serde(default)]
    pub boards: BTreeMap<FacilityId, BoardSeed>,
}

impl FleetConfig {
    /// Parse a configuration from JSON. Does not validate.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every seed invariant, collecting all violations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match validation::validate(self) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => Err(ConfigError::Invalid {
                violations: errors.iter().cloned().collect(),
            }),
        }
    }

    /// Validate and build the store.
    ///
    /// Facilities without seeded vehicles get an empty board.
    pub fn into_store(mut self) -> Result<BoardStore, ConfigError> {
        if let Err(error) = self.validate() {
            warn!(%error, "Rejected fleet configuration");
            return Err(error);
        }

        let boards: BTreeMap<FacilityId, Board> = self
            .facilities
            .iter()
            .map(|facility| {
                let seeded = self.boards.remove(&facility.id).unwrap_or_default();
                (
                    facility.id.clone(),
                    Board::from_lists(facility.id.clone(), seeded),
                )
            })
            .collect();

        let store = BoardStore::from_parts(self.facilities, boards);
        info!(
            facilities = store.facilities().len(),
            vehicles = store.total_vehicles(),
            "Built board store"
        );
        Ok(store)
    }
}

impl BoardStore {
    /// Current state as a configuration that rebuilds an equal store.
    pub fn to_config(&self) -> FleetConfig {
        FleetConfig {
            facilities: self.facilities().to_vec(),
            boards: self
                .boards()
                .map(|board| (board.facility().clone(), board.to_lists()))
                .collect(),
        }
    }
}
