//! Vehicle records and their bay slot.

use serde::{Deserialize, Serialize};

/// Bay held by a vehicle.
///
/// A bay only has meaning while the vehicle sits in a bay-requiring
/// category; leaving such a category resets it to `Bay::None`.
/// Serializes as an optional integer.
///
/// # Example
///
/// ```rust
/// use fleetboard::core::Bay;
///
/// assert_eq!(Bay::Assigned(3).number(), Some(3));
/// assert!(Bay::None.is_none());
/// assert_eq!(Bay::from(Some(2)), Bay::Assigned(2));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(from = "Option<u32>", into = "Option<u32>")]
pub enum Bay {
    #[default]
    None,
    Assigned(u32),
}

impl Bay {
    pub fn number(&self) -> Option<u32> {
        match self {
            Self::None => None,
            Self::Assigned(n) => Some(*n),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl From<Option<u32>> for Bay {
    fn from(bay: Option<u32>) -> Self {
        bay.map_or(Bay::None, Bay::Assigned)
    }
}

impl From<Bay> for Option<u32> {
    fn from(bay: Bay) -> Self {
        bay.number()
    }
}

/// A bus tracked on a facility board.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Globally unique identifier
    pub id: String,
    /// Display name
    pub label: String,
    /// Free-text status shown on the card
    pub status: String,
    #[serde(default)]
    pub bay: Bay,
    #[serde(default)]
    pub last_service: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Vehicle {
    pub fn new(id: impl Into<String>, label: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            status: status.into(),
            bay: Bay::None,
            last_service: None,
            notes: None,
        }
    }

    pub fn with_bay(mut self, bay: u32) -> Self {
        self.bay = Bay::Assigned(bay);
        self
    }

    pub fn with_last_service(mut self, date: impl Into<String>) -> Self {
        self.last_service = Some(date.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Merge the set fields of `patch` into this record.
    pub(crate) fn apply(&mut self, patch: VehiclePatch) {
        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(last_service) = patch.last_service {
            self.last_service = Some(last_service);
        }
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }
    }
}

/// Partial update of a vehicle's free-text fields.
///
/// There is deliberately no bay or category field: placement only changes
/// through a move.
///
/// # Example
///
/// ```rust
/// use fleetboard::core::VehiclePatch;
///
/// let patch = VehiclePatch::new()
///     .status("Waiting Parts")
///     .notes("Brake pads on order");
/// assert!(!patch.is_empty());
/// assert!(VehiclePatch::new().is_empty());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehiclePatch {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub last_service: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl VehiclePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn last_service(mut self, date: impl Into<String>) -> Self {
        self.last_service = Some(date.into());
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.status.is_none()
            && self.last_service.is_none()
            && self.notes.is_none()
    }
}
