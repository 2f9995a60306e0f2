//! Point-in-time export of a whole fleet.
//!
//! A snapshot is a detached, serializable copy of every board, used to hand
//! state to display code or to seed a fresh store. Nothing is written to
//! disk by this crate.

use crate::config::FleetConfig;
use crate::store::BoardStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable copy of all facilities and boards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FleetSnapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// Facilities and board contents
    pub fleet: FleetConfig,
}

impl FleetSnapshot {
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }
}

impl BoardStore {
    /// Capture the current state of every board.
    pub fn snapshot(&self) -> FleetSnapshot {
        let snapshot = FleetSnapshot {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            taken_at: Utc::now(),
            fleet: self.to_config(),
        };
        debug!(id = %snapshot.id, vehicles = self.total_vehicles(), "Took fleet snapshot");
        snapshot
    }

    /// Build a store from a snapshot, re-checking every board invariant.
    pub fn from_snapshot(snapshot: FleetSnapshot) -> Result<Self, SnapshotError> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        Ok(snapshot.fleet.into_store()?)
    }
}
