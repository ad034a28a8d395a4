//! Checkpoint and resume functionality for calculator sessions.
//!
//! A checkpoint captures the engine state together with the history so a
//! host can persist a session and restore it after a restart. Where the
//! bytes end up is the host's concern; this module only defines the
//! versioned format and its JSON and binary encodings.

use crate::builder::EngineConfig;
use crate::core::{EngineState, History};
use crate::engine::CalculatorEngine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a calculator session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Engine state at capture time
    pub state: EngineState,

    /// Completed calculations, newest first
    pub history: History,
}

impl Checkpoint {
    pub fn new(state: EngineState, history: History) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            state,
            history,
        }
    }

    /// Check the format version and the state invariants.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        self.state
            .validate()
            .map_err(CheckpointError::ValidationFailed)
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }
}

impl CalculatorEngine<History> {
    /// Capture the current session.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::new(self.state.clone(), self.sink.clone())
    }

    /// Restore a session, re-applying the configured history capacity.
    /// An out-of-range `config` is rejected like a corrupt checkpoint.
    ///
    /// # Example
    ///
    /// ```rust
    /// use abacus::builder::EngineConfig;
    /// use abacus::checkpoint::Checkpoint;
    /// use abacus::core::Operator;
    /// use abacus::engine::{CalculatorEngine, Command};
    ///
    /// let mut engine = CalculatorEngine::default();
    /// engine.apply_all([Command::Digit(7), Command::Operator(Operator::Add)]);
    ///
    /// let json = engine.checkpoint().to_json().unwrap();
    /// let restored = Checkpoint::from_json(&json).unwrap();
    /// let mut engine = CalculatorEngine::resume(restored, EngineConfig::default()).unwrap();
    ///
    /// engine.apply_all([Command::Digit(3), Command::Equals]);
    /// assert_eq!(engine.state().display, "10");
    /// ```
    pub fn resume(checkpoint: Checkpoint, config: EngineConfig) -> Result<Self, CheckpointError> {
        checkpoint.validate()?;
        config
            .validate()
            .map_err(|e| CheckpointError::ValidationFailed(e.to_string()))?;
        debug!(
            id = %checkpoint.id,
            entries = checkpoint.history.len(),
            phase = checkpoint.state.phase().name(),
            "resuming from checkpoint"
        );

        let mut history = checkpoint.history;
        history.set_capacity(config.history_capacity);

        Ok(Self {
            state: checkpoint.state,
            config,
            sink: history,
        })
    }
}
