//! Pure calculator core.
//!
//! This module contains everything the engine computes with:
//! - Operators and scientific functions
//! - Engine state and its derived phase
//! - Input policy checks
//! - Display formatting
//! - Completed-calculation history
//!
//! Nothing in here performs I/O or logging; the engine in
//! [`crate::engine`] is the only caller that mutates state.

mod format;
mod history;
mod operator;
mod policy;
mod state;

pub use format::{
    literal, parse_literal, round_to, Formatter, Language, RenderConfig, DEFAULT_MAX_CHARS,
    ERROR_TOKEN, MAX_PLACES,
};
pub use history::{History, HistoryEntry, HistorySink, DEFAULT_HISTORY_CAPACITY};
pub use operator::{Operator, ScientificFn};
pub use policy::{
    admit_backspace, admit_decimal, admit_digit, admit_entry, admit_equals, erase_last,
    Admission, InputViolation,
};
pub use state::{EngineState, Phase};
