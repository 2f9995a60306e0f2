//! Board categories.
//!
//! Categories are static configuration: a closed set of columns that every
//! facility board carries, each tagged with whether it requires a bay.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operational category a vehicle is placed in.
///
/// Declaration order is display order and search order. `Ord` follows it,
/// so a `BTreeMap<Category, _>` iterates columns left to right.
///
/// # Example
///
/// ```rust
/// use fleetboard::core::Category;
///
/// assert!(Category::Maintenance.requires_bay());
/// assert!(!Category::Storage.requires_bay());
/// assert_eq!(Category::InService.id(), "in_service");
/// assert_eq!(Category::LongTerm.label(), "Long-term Maintenance");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Maintenance,
    Storage,
    InService,
    LongTerm,
    OutOfService,
    ThirdParty,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 6] = [
        Category::Maintenance,
        Category::Storage,
        Category::InService,
        Category::LongTerm,
        Category::OutOfService,
        Category::ThirdParty,
    ];

    /// Stable identifier, matching the serialized form.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Maintenance => "maintenance",
            Self::Storage => "storage",
            Self::InService => "in_service",
            Self::LongTerm => "long_term",
            Self::OutOfService => "out_of_service",
            Self::ThirdParty => "third_party",
        }
    }

    /// Human-readable column title.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Maintenance => "Maintenance",
            Self::Storage => "Storage",
            Self::InService => "In-Service",
            Self::LongTerm => "Long-term Maintenance",
            Self::OutOfService => "Out of service",
            Self::ThirdParty => "Third party",
        }
    }

    /// Whether a vehicle in this category must hold a valid, unique bay.
    ///
    /// Only the internal repair columns occupy physical bays; third-party
    /// work happens off site.
    pub fn requires_bay(&self) -> bool {
        matches!(self, Self::Maintenance | Self::LongTerm)
    }

    /// Look a category up by its stable identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
