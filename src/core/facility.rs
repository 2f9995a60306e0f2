//! Facility identity and bay configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a physical facility (garage, depot).
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacilityId(String);

impl FacilityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FacilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FacilityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for FacilityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Static configuration of one facility.
///
/// `bays` lists the bay numbers vehicles may occupy, in the order bay
/// pickers should present them. Numbers need not be contiguous.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct FacilityConfig {
    pub id: FacilityId,
    pub name: String,
    pub bays: Vec<u32>,
}

impl FacilityConfig {
    pub fn new(id: impl Into<FacilityId>, name: impl Into<String>, bays: Vec<u32>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            bays,
        }
    }

    /// Whether `bay` belongs to this facility's allowed set.
    pub fn allows_bay(&self, bay: u32) -> bool {
        self.bays.contains(&bay)
    }
}
