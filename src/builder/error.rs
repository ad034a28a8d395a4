//! Build errors for the engine builder.

use thiserror::Error;

/// Errors that can occur when building an engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Display width {0} is too small. Use at least 2 characters")]
    DisplayTooNarrow(usize),

    #[error("History capacity must be at least 1")]
    EmptyHistory,

    #[error("{field} of {places} exceeds the 15 decimal places an f64 can hold")]
    PrecisionTooHigh { field: &'static str, places: u32 },

    #[error("History sink not specified. Call .sink(sink) or use EngineBuilder::with_history()")]
    MissingSink,
}
