//! The calculator engine: the stateful shell around the pure core.
//!
//! # Key Concepts
//!
//! - **Commands**: discrete keypad inputs, including a keyboard adapter
//! - **Engine**: applies commands in order and notifies the history sink
//! - **View**: render-ready text recomputed after every command
//!
//! Commands are applied one at a time and synchronously. The engine never
//! fails: arithmetic errors travel as the error token, and inputs that make
//! no sense in the current state are absorbed and reported as ignored.

mod command;
mod machine;
mod view;

pub use command::Command;
pub use machine::{CalculatorEngine, StepResult};
pub use view::View;
