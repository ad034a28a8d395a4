//! Configuration and builder API for engine construction.
//!
//! This module provides a serde-backed [`EngineConfig`] and a fluent
//! [`EngineBuilder`] that validates it before producing an engine.
//!
//! # Example
//!
//! ```
//! use abacus::builder::EngineBuilder;
//! use abacus::engine::Command;
//!
//! let mut engine = EngineBuilder::with_history()
//!     .max_chars(16)
//!     .history_capacity(10)
//!     .build()
//!     .unwrap();
//!
//! engine.apply(Command::Digit(4));
//! assert_eq!(engine.state().display, "4");
//! assert_eq!(engine.sink().capacity(), 10);
//! ```

pub mod config;
pub mod engine;
pub mod error;

pub use config::{ConfigError, EngineConfig};
pub use engine::EngineBuilder;
pub use error::BuildError;
