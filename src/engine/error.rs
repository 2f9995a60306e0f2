//! Move rejections and store errors.

use crate::core::FacilityId;
use thiserror::Error;

/// Why a move into a bay-requiring category was refused.
///
/// Rejections are expected outcomes of user input; the board is left
/// exactly as it was.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MoveRejection {
    #[error("A bay is required for this category, but none was supplied or held")]
    BayRequired,

    #[error("Bay {bay} is not an allowed bay for this facility")]
    BayInvalid { bay: i64 },

    #[error("Bay {bay} is already taken")]
    BayTaken { bay: u32 },
}

impl MoveRejection {
    /// Stable machine-readable reason code.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::BayRequired => "bay_required",
            Self::BayInvalid { .. } => "bay_invalid",
            Self::BayTaken { .. } => "bay_taken",
        }
    }
}

/// Errors returned by store and engine operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FleetError {
    /// The caller named a facility the store was not built with
    #[error("Unknown facility '{0}'")]
    UnknownFacility(FacilityId),

    #[error("Move rejected: {0}")]
    Rejected(#[from] MoveRejection),
}

impl FleetError {
    /// The bay rejection carried by this error, if any.
    pub fn rejection(&self) -> Option<MoveRejection> {
        match self {
            Self::Rejected(rejection) => Some(*rejection),
            Self::UnknownFacility(_) => None,
        }
    }
}
