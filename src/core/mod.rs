//! Core board types.
//!
//! This module contains the plain data the engine works over:
//! - `Category`: the closed set of board columns and their bay rule
//! - `FacilityId` / `FacilityConfig`: facility identity and allowed bays
//! - `Vehicle`, `Bay`, `VehiclePatch`: vehicle records and partial updates
//! - `Board`: one facility's ordered category lists
//!
//! Nothing here enforces cross-vehicle invariants; that is the job of the
//! bay registry and the transition engine.

mod board;
mod category;
mod facility;
mod vehicle;

pub use board::Board;
pub use category::Category;
pub use facility::{FacilityConfig, FacilityId};
pub use vehicle::{Bay, Vehicle, VehiclePatch};
