//! Fleetboard: a board state-transition engine for bus fleets
//!
//! Buses sit on per-facility boards, one ordered list per operational
//! category (maintenance, storage, in-service, long-term, out-of-service,
//! third-party). Maintenance and long-term work occupy physical bays, and
//! the engine guarantees that within a facility no two vehicles share a bay
//! and every bay is one the facility actually has.
//!
//! # Core Concepts
//!
//! - **Board Store**: owns every board; reads borrow live state
//! - **Transition Engine**: the only writer of placement, enforcing bay rules
//! - **Bay Registry**: pure taken/available bay computations
//! - **Query Layer**: search and statistics over single or merged boards
//!
//! # Example
//!
//! ```rust
//! use fleetboard::config::FleetBuilder;
//! use fleetboard::core::{Bay, Category, Vehicle};
//! use fleetboard::engine::{MoveRejection, MoveRequest};
//!
//! let mut store = FleetBuilder::new()
//!     .facility("F1", "Facility 1", vec![1, 2, 3])
//!     .vehicle("F1", Category::Storage, Vehicle::new("V1", "Bus 1", "Stored"))
//!     .vehicle("F1", Category::Maintenance, Vehicle::new("V2", "Bus 2", "Repair").with_bay(2))
//!     .build()
//!     .unwrap();
//!
//! // Bay 2 is held by V2
//! let refused = store
//!     .move_vehicle(MoveRequest::new("F1", Category::Storage, Category::Maintenance, "V1").bay(2))
//!     .unwrap_err();
//! assert_eq!(refused.rejection(), Some(MoveRejection::BayTaken { bay: 2 }));
//!
//! // Offer the free ones instead
//! let free = store.available_bays(&"F1".into(), None).unwrap();
//! assert_eq!(free, vec![1, 3]);
//!
//! store
//!     .move_vehicle(MoveRequest::new("F1", Category::Storage, Category::Maintenance, "V1").bay(1))
//!     .unwrap();
//! let board = store.board(&"F1".into()).unwrap();
//! assert_eq!(board.get(Category::Maintenance, "V1").unwrap().bay, Bay::Assigned(1));
//! ```

pub mod bays;
pub mod config;
pub mod core;
pub mod engine;
pub mod query;
pub mod snapshot;
pub mod store;

// Re-export commonly used types
pub use config::{FleetBuilder, FleetConfig};
pub use crate::core::{Bay, Board, Category, FacilityConfig, FacilityId, Vehicle, VehiclePatch};
pub use engine::{FleetError, MoveOutcome, MoveRejection, MoveRequest};
pub use query::search;
pub use store::BoardStore;
