//! Input policy checks.
//!
//! Each check is a pure function of the current state and the incoming
//! input. A failed check is not an error for the caller: the engine turns
//! it into a no-op and reports the [`InputViolation`] back for diagnostics.

use super::format::ERROR_TOKEN;
use super::state::EngineState;
use thiserror::Error;

/// Reasons an input is absorbed without changing the state.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InputViolation {
    #[error("Display already holds the maximum of {cap} characters")]
    DigitCapReached { cap: usize },

    #[error("Display already contains a decimal point")]
    DuplicateDecimal,

    #[error("Digit {0} is outside 0-9")]
    InvalidDigit(u8),

    #[error("Nothing to erase while a result is shown")]
    NothingToErase,

    #[error("No pending operator or previous operation to evaluate")]
    NothingToEvaluate,
}

/// Outcome of a policy check.
pub type Admission = Result<(), InputViolation>;

/// A digit or decimal point may be typed.
///
/// The cap only applies when the keystroke would append; a pending reset
/// replaces the display and is always admitted.
pub fn admit_entry(state: &EngineState, max_chars: usize) -> Admission {
    if !state.reset_on_next_digit && state.display.chars().count() >= max_chars {
        return Err(InputViolation::DigitCapReached { cap: max_chars });
    }
    Ok(())
}

pub fn admit_digit(state: &EngineState, digit: u8, max_chars: usize) -> Admission {
    if digit > 9 {
        return Err(InputViolation::InvalidDigit(digit));
    }
    admit_entry(state, max_chars)
}

/// A decimal point may be appended only once.
pub fn admit_decimal(state: &EngineState, max_chars: usize) -> Admission {
    admit_entry(state, max_chars)?;
    let replaces = state.reset_on_next_digit || state.display == "0";
    if !replaces && state.display.contains('.') {
        return Err(InputViolation::DuplicateDecimal);
    }
    Ok(())
}

/// Backspace only edits an operand that is still being typed.
pub fn admit_backspace(state: &EngineState) -> Admission {
    if state.reset_on_next_digit {
        return Err(InputViolation::NothingToErase);
    }
    Ok(())
}

/// Equals needs either a pending operator or a repeatable previous one.
pub fn admit_equals(state: &EngineState) -> Admission {
    let pending = state.pending_operator.is_some() && state.accumulator.is_some();
    if pending || state.repeat_pair().is_some() {
        Ok(())
    } else {
        Err(InputViolation::NothingToEvaluate)
    }
}

/// Remove the last typed character, collapsing to `"0"` when nothing
/// meaningful would remain.
pub fn erase_last(display: &str) -> String {
    let mut chars = display.chars();
    let len = chars.clone().count();
    let single_digit = len == 1 || (len == 2 && display.starts_with('-'));
    if single_digit || display == ERROR_TOKEN {
        return "0".to_string();
    }
    chars.next_back();
    chars.as_str().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    fn typed(display: &str) -> EngineState {
        EngineState {
            display: display.to_string(),
            ..EngineState::new()
        }
    }

    #[test]
    fn digit_cap_blocks_appending() {
        let state = typed("123456789012");
        assert_eq!(
            admit_digit(&state, 3, 12),
            Err(InputViolation::DigitCapReached { cap: 12 })
        );
        assert_eq!(admit_digit(&typed("12345678901"), 3, 12), Ok(()));
    }

    #[test]
    fn digit_cap_ignored_when_replacing() {
        let mut state = typed("123456789012");
        state.reset_on_next_digit = true;
        assert_eq!(admit_digit(&state, 3, 12), Ok(()));
    }

    #[test]
    fn invalid_digit_rejected() {
        assert_eq!(
            admit_digit(&EngineState::new(), 10, 12),
            Err(InputViolation::InvalidDigit(10))
        );
    }

    #[test]
    fn second_decimal_rejected() {
        assert_eq!(
            admit_decimal(&typed("3.1"), 12),
            Err(InputViolation::DuplicateDecimal)
        );
        assert_eq!(admit_decimal(&typed("31"), 12), Ok(()));

        let mut state = typed("3.1");
        state.reset_on_next_digit = true;
        assert_eq!(admit_decimal(&state, 12), Ok(()));
    }

    #[test]
    fn backspace_after_result_rejected() {
        let mut state = typed("8");
        state.reset_on_next_digit = true;
        assert_eq!(admit_backspace(&state), Err(InputViolation::NothingToErase));
        assert_eq!(admit_backspace(&typed("8")), Ok(()));
    }

    #[test]
    fn equals_needs_something_to_evaluate() {
        assert_eq!(
            admit_equals(&EngineState::new()),
            Err(InputViolation::NothingToEvaluate)
        );

        let mut pending = typed("3");
        pending.accumulator = Some(5.0);
        pending.pending_operator = Some(Operator::Add);
        assert_eq!(admit_equals(&pending), Ok(()));

        let mut repeat = typed("8");
        repeat.last_operator = Some(Operator::Add);
        repeat.last_operand = Some(3.0);
        assert_eq!(admit_equals(&repeat), Ok(()));
    }

    #[test]
    fn erase_last_collapses_short_values() {
        assert_eq!(erase_last("0"), "0");
        assert_eq!(erase_last("7"), "0");
        assert_eq!(erase_last("-5"), "0");
        assert_eq!(erase_last("-52"), "-5");
        assert_eq!(erase_last("12.5"), "12.");
        assert_eq!(erase_last(ERROR_TOKEN), "0");
    }

    #[test]
    fn violations_have_messages() {
        let message = InputViolation::DigitCapReached { cap: 12 }.to_string();
        assert!(message.contains("12"));
        assert!(InputViolation::InvalidDigit(42).to_string().contains("42"));
    }
}
