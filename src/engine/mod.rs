//! Transition engine.
//!
//! Every placement change funnels through here: cross-category moves with
//! bay enforcement, same-column reordering, and edit-sheet saves. The
//! engine consults the bay registry before committing, and a rejected move
//! never leaves a visible trace.
//!
//! # Bay rules
//!
//! - Entering a bay-requiring category (maintenance, long-term) needs a bay
//!   that is positive, allowed by the facility and not held by any other
//!   vehicle in a bay-requiring category of that facility.
//! - Entering any other category clears the vehicle's bay.
//!
//! Rejections are ordinary values ([`MoveRejection`]) carried in
//! [`FleetError::Rejected`].

mod edit;
mod error;
mod transition;

pub use edit::EditRequest;
pub use error::{FleetError, MoveRejection};
pub use transition::{MoveOutcome, MoveRequest, Unchanged};
