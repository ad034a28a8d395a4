//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur while saving or restoring a session
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Encoding the session as JSON or bincode failed
    #[error("Could not encode checkpoint: {0}")]
    SerializationFailed(String),

    /// The stored bytes are not a readable checkpoint
    #[error("Could not decode checkpoint: {0}")]
    DeserializationFailed(String),

    /// Written by a newer or older format revision
    #[error("Checkpoint format {found} is not supported (expected {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Decoded fine but the engine state breaks an invariant
    #[error("Checkpoint state is inconsistent: {0}")]
    ValidationFailed(String),
}
