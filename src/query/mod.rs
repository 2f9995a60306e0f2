//! Read-only queries over boards.
//!
//! Queries take any [`BoardView`] (a single facility [`Board`](crate::core::Board)
//! or a [`MergedBoard`](crate::store::MergedBoard)) and never mutate it.

mod search;
mod stats;
mod view;

pub use search::{search, SearchHit};
pub use stats::{count, status_breakdown, vehicles_assigned, StatusSegment};
pub use view::{BoardView, Placement};
