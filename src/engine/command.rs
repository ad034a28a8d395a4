//! Input commands accepted by the engine.

use crate::core::{HistoryEntry, Operator, ScientificFn};
use serde::{Deserialize, Serialize};

/// A single discrete input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    Digit(u8),
    Decimal,
    Backspace,
    Negate,
    Percent,
    Operator(Operator),
    Equals,
    Scientific(ScientificFn),
    Clear,
    /// Show a past result as if `Equals` had just produced it.
    LoadFromHistory(HistoryEntry),
}

impl Command {
    /// Translate a keyboard key name into a command.
    ///
    /// Digits, `.`, `Enter`/`=`, `Backspace`, `Escape` and the operator
    /// symbols are recognized; every other key yields `None`.
    ///
    /// ```rust
    /// use abacus::core::Operator;
    /// use abacus::engine::Command;
    ///
    /// assert_eq!(Command::from_key("7"), Some(Command::Digit(7)));
    /// assert_eq!(Command::from_key("*"), Some(Command::Operator(Operator::Multiply)));
    /// assert_eq!(Command::from_key("Enter"), Some(Command::Equals));
    /// assert_eq!(Command::from_key("Tab"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "." => Some(Self::Decimal),
            "Enter" | "=" => Some(Self::Equals),
            "Backspace" => Some(Self::Backspace),
            "Escape" => Some(Self::Clear),
            _ => {
                if let Some(op) = Operator::from_symbol(key) {
                    return Some(Self::Operator(op));
                }
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c.to_digit(10).map(|d| Self::Digit(d as u8)),
                    _ => None,
                }
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Digit(_) => "Digit",
            Self::Decimal => "Decimal",
            Self::Backspace => "Backspace",
            Self::Negate => "Negate",
            Self::Percent => "Percent",
            Self::Operator(_) => "Operator",
            Self::Equals => "Equals",
            Self::Scientific(_) => "Scientific",
            Self::Clear => "Clear",
            Self::LoadFromHistory(_) => "LoadFromHistory",
        }
    }
}
