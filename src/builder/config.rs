//! Engine configuration.

use crate::builder::error::BuildError;
use crate::core::{DEFAULT_HISTORY_CAPACITY, DEFAULT_MAX_CHARS, MAX_PLACES};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Configuration out of range: {0}")]
    OutOfRange(#[from] BuildError),
}

/// Tunable limits of the engine. Missing fields fall back to defaults.
///
/// # Example
///
/// ```rust
/// use abacus::builder::EngineConfig;
///
/// let config = EngineConfig::from_json(r#"{"max_chars": 16}"#).unwrap();
/// assert_eq!(config.max_chars, 16);
/// assert_eq!(config.history_capacity, 50);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Longest operand that may be typed
    pub max_chars: usize,
    /// Decimal places kept by `Equals` results
    pub result_places: u32,
    /// Decimal places kept by scientific functions
    pub scientific_places: u32,
    /// Entries retained by the default history
    pub history_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            result_places: 10,
            scientific_places: 8,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl EngineConfig {
    /// Parse and range-check a configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every limit is within the range the engine supports.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.max_chars < 2 {
            return Err(BuildError::DisplayTooNarrow(self.max_chars));
        }
        if self.history_capacity == 0 {
            return Err(BuildError::EmptyHistory);
        }
        if self.result_places > MAX_PLACES {
            return Err(BuildError::PrecisionTooHigh {
                field: "result_places",
                places: self.result_places,
            });
        }
        if self.scientific_places > MAX_PLACES {
            return Err(BuildError::PrecisionTooHigh {
                field: "scientific_places",
                places: self.scientific_places,
            });
        }
        Ok(())
    }
}
