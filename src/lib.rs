//! Abacus: a keypad-driven calculator engine
//!
//! Abacus turns a stream of key presses into a running computation, a
//! readable expression trail and a history of completed calculations.
//! The core is a pure state machine; rendering, storage and input capture
//! belong to the host and only call into it.
//!
//! # Core Concepts
//!
//! - **Commands**: digits, operators, scientific functions, equals, clear
//! - **Chains**: operators fire immediately, left to right, with no precedence
//! - **Repeat-equals**: `=` with nothing pending re-applies the last operation
//! - **Errors**: division by zero and domain errors travel as an error token
//!   and only become text when rendered
//! - **History**: every completed calculation is handed to a `HistorySink`
//!
//! # Example
//!
//! ```rust
//! use abacus::core::{Formatter, Operator};
//! use abacus::engine::{CalculatorEngine, Command};
//!
//! let mut engine = CalculatorEngine::default();
//! engine.apply_all([
//!     Command::Digit(5),
//!     Command::Operator(Operator::Add),
//!     Command::Digit(3),
//!     Command::Equals,
//!     Command::Equals,
//! ]);
//!
//! let view = engine.view(&Formatter::default());
//! assert_eq!(view.display_text, "11");
//! assert_eq!(view.expression_text(), "8 + 3 =");
//! assert_eq!(engine.sink().len(), 2);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::{EngineBuilder, EngineConfig};
pub use crate::core::{Formatter, History, HistoryEntry, HistorySink, Operator, ScientificFn};
pub use engine::{CalculatorEngine, Command, StepResult, View};
