//! Snapshot error types.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when exporting or importing snapshots
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Encoding to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Decoding from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The captured fleet breaks a board invariant
    #[error("Snapshot contents are invalid: {0}")]
    Config(#[from] ConfigError),
}
