//! Engine state and its derived phase.
//!
//! `EngineState` is a plain value: the engine owns exactly one and mutates
//! it only while applying a command. Everything else about the calculator
//! (what the display shows, which branch an operator press takes) is a
//! pure function of this struct.

use super::format::{literal, parse_literal, ERROR_TOKEN};
use super::operator::Operator;
use serde::{Deserialize, Serialize};

/// Coarse position of the engine within a computation.
///
/// # Example
///
/// ```rust
/// use abacus::core::{EngineState, Phase};
///
/// let state = EngineState::new();
/// assert_eq!(state.phase(), Phase::Entering);
/// assert_eq!(state.phase().name(), "Entering");
/// assert!(!state.phase().is_final());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Typing an operand with no operator pending.
    Entering,
    /// An operator is pending and waits for its right operand.
    AwaitingOperand,
    /// A result is frozen on screen.
    ShowingResult,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Entering => "Entering",
            Self::AwaitingOperand => "AwaitingOperand",
            Self::ShowingResult => "ShowingResult",
        }
    }

    /// A result is on screen and the next digit starts over.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::ShowingResult)
    }
}

/// Complete calculator state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    /// Canonical literal currently shown, or [`ERROR_TOKEN`].
    pub display: String,
    /// Left operand pending an operation.
    #[serde(with = "operand_literal")]
    pub accumulator: Option<f64>,
    pub pending_operator: Option<Operator>,
    /// The next digit replaces the display instead of appending to it.
    pub reset_on_next_digit: bool,
    /// Right operand of the last completed operation, for repeat-equals.
    #[serde(with = "operand_literal")]
    pub last_operand: Option<f64>,
    pub last_operator: Option<Operator>,
    /// Growing trail of the in-progress chain, e.g. `"12 + 4 "`.
    pub live_expression: String,
    /// Frozen trail of the last result, e.g. `"12 + 4 ="`.
    pub finished_expression: String,
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineState {
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            accumulator: None,
            pending_operator: None,
            reset_on_next_digit: false,
            last_operand: None,
            last_operator: None,
            live_expression: String::new(),
            finished_expression: String::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        if !self.finished_expression.is_empty() {
            Phase::ShowingResult
        } else if self.pending_operator.is_some() {
            Phase::AwaitingOperand
        } else {
            Phase::Entering
        }
    }

    /// Numeric value of the display. The error token reads as NaN.
    pub fn display_value(&self) -> f64 {
        parse_literal(&self.display)
    }

    pub fn is_error(&self) -> bool {
        self.display == ERROR_TOKEN
    }

    /// Trail shown above the display: the frozen one wins over the live one.
    pub fn expression(&self) -> &str {
        if self.finished_expression.is_empty() {
            &self.live_expression
        } else {
            &self.finished_expression
        }
    }

    /// The repeat-equals pair, if both halves are present.
    pub fn repeat_pair(&self) -> Option<(Operator, f64)> {
        self.last_operator.zip(self.last_operand)
    }

    /// Check structural invariants, returning a description of the first
    /// one that does not hold.
    pub fn validate(&self) -> Result<(), String> {
        if self.accumulator.is_some() && self.pending_operator.is_none() {
            return Err("accumulator is set without a pending operator".to_string());
        }
        if self.pending_operator.is_some() && self.accumulator.is_none() {
            return Err("operator is pending without an accumulator".to_string());
        }
        if self.is_error() {
            return Ok(());
        }
        if self.display.is_empty() || self.display_value().is_nan() {
            return Err(format!("display '{}' is not a numeric literal", self.display));
        }
        if self.display_value().is_infinite() {
            return Err(format!("display '{}' is not finite", self.display));
        }
        Ok(())
    }
}

/// Operands travel as display literals so an error operand (NaN) survives
/// formats such as JSON that have no encoding for it.
mod operand_literal {
    use super::{literal, parse_literal};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        value.map(literal).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        let text = Option::<String>::deserialize(deserializer)?;
        Ok(text.as_deref().map(parse_literal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_blank() {
        let state = EngineState::new();
        assert_eq!(state.display, "0");
        assert_eq!(state.accumulator, None);
        assert_eq!(state.pending_operator, None);
        assert!(!state.reset_on_next_digit);
        assert_eq!(state.repeat_pair(), None);
        assert_eq!(state.expression(), "");
        assert_eq!(state, EngineState::default());
    }

    #[test]
    fn phase_follows_state() {
        let mut state = EngineState::new();
        assert_eq!(state.phase(), Phase::Entering);

        state.accumulator = Some(2.0);
        state.pending_operator = Some(Operator::Add);
        assert_eq!(state.phase(), Phase::AwaitingOperand);

        state.accumulator = None;
        state.pending_operator = None;
        state.finished_expression = "2 + 2 =".to_string();
        assert_eq!(state.phase(), Phase::ShowingResult);
        assert!(state.phase().is_final());
    }

    #[test]
    fn finished_expression_takes_precedence() {
        let mut state = EngineState::new();
        state.live_expression = "1 + ".to_string();
        assert_eq!(state.expression(), "1 + ");
        state.finished_expression = "1 + 1 =".to_string();
        assert_eq!(state.expression(), "1 + 1 =");
    }

    #[test]
    fn error_display_reads_as_nan() {
        let mut state = EngineState::new();
        state.display = ERROR_TOKEN.to_string();
        assert!(state.is_error());
        assert!(state.display_value().is_nan());
        assert!(state.validate().is_ok());
    }

    #[test]
    fn validate_rejects_broken_states() {
        let mut state = EngineState::new();
        state.accumulator = Some(1.0);
        assert!(state.validate().is_err());

        let mut state = EngineState::new();
        state.pending_operator = Some(Operator::Add);
        assert!(state.validate().is_err());

        let mut state = EngineState::new();
        state.display = "NaN".to_string();
        assert!(state.validate().is_err());

        let mut state = EngineState::new();
        state.display = "12.".to_string();
        assert!(state.validate().is_ok());
    }

    #[test]
    fn state_serializes_correctly() {
        let mut state = EngineState::new();
        state.display = "4".to_string();
        state.accumulator = Some(12.0);
        state.pending_operator = Some(Operator::Add);
        state.live_expression = "12 + ".to_string();

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: EngineState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn error_operands_survive_json() {
        let mut state = EngineState::new();
        state.display = ERROR_TOKEN.to_string();
        state.accumulator = Some(f64::NAN);
        state.pending_operator = Some(Operator::Add);
        state.last_operand = Some(0.1 + 0.2);
        state.last_operator = Some(Operator::Divide);

        let json = serde_json::to_string(&state).unwrap();
        let restored: EngineState = serde_json::from_str(&json).unwrap();

        assert!(restored.accumulator.is_some_and(f64::is_nan));
        assert_eq!(restored.last_operand, Some(0.1 + 0.2));
        assert!(restored.validate().is_ok());
    }
}
