//! Calculator engine that applies commands to its state.

use crate::builder::EngineConfig;
use crate::core::{
    admit_backspace, admit_decimal, admit_digit, admit_equals, erase_last, literal,
    parse_literal, round_to, EngineState, Formatter, History, HistoryEntry, HistorySink,
    InputViolation, Operator, Phase, ScientificFn,
};
use crate::engine::command::Command;
use crate::engine::view::View;
use tracing::{debug, info, trace};

/// Result of applying a single command
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult {
    /// State updated, nothing completed
    Applied,

    /// A calculation finished; the entry was handed to the sink
    Completed(HistoryEntry),

    /// Command absorbed without changing state
    Ignored(InputViolation),
}

impl StepResult {
    pub fn entry(&self) -> Option<&HistoryEntry> {
        match self {
            Self::Completed(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored(_))
    }
}

/// Keypad-driven calculator.
///
/// Operators fire immediately against the running accumulator, so
/// `2 + 3 * 4 =` evaluates strictly left to right to `20`.
///
/// # Example
///
/// ```rust
/// use abacus::core::{Formatter, Operator};
/// use abacus::engine::{CalculatorEngine, Command};
///
/// let mut engine = CalculatorEngine::default();
/// engine.apply_all([
///     Command::Digit(2),
///     Command::Operator(Operator::Add),
///     Command::Digit(3),
///     Command::Operator(Operator::Multiply),
///     Command::Digit(4),
///     Command::Equals,
/// ]);
///
/// let view = engine.view(&Formatter::default());
/// assert_eq!(view.display_text, "20");
/// assert_eq!(view.finished_expression_text, "2 + 3 * 4 =");
/// assert_eq!(engine.sink().len(), 1);
/// ```
#[derive(Debug)]
pub struct CalculatorEngine<H: HistorySink = History> {
    pub(crate) state: EngineState,
    pub(crate) config: EngineConfig,
    pub(crate) sink: H,
}

impl Default for CalculatorEngine<History> {
    fn default() -> Self {
        let config = EngineConfig::default();
        let history = History::with_capacity(config.history_capacity);
        Self::new(config, history)
    }
}

impl<H: HistorySink> CalculatorEngine<H> {
    /// Create an engine in the initial state.
    pub fn new(config: EngineConfig, sink: H) -> Self {
        Self {
            state: EngineState::new(),
            config,
            sink,
        }
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn sink(&self) -> &H {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut H {
        &mut self.sink
    }

    pub fn into_sink(self) -> H {
        self.sink
    }

    /// Render the current state for display.
    pub fn view(&self, formatter: &Formatter) -> View {
        View::render(&self.state, formatter)
    }

    /// Apply one command. Every command is defined for every state; inputs
    /// that make no sense right now come back as [`StepResult::Ignored`].
    pub fn apply(&mut self, command: Command) -> StepResult {
        let name = command.name();
        let from = self.state.phase();

        let result = match command {
            Command::Digit(digit) => match admit_digit(&self.state, digit, self.config.max_chars) {
                Ok(()) => self.enter(&digit.to_string()),
                Err(violation) => StepResult::Ignored(violation),
            },
            Command::Decimal => match admit_decimal(&self.state, self.config.max_chars) {
                Ok(()) => self.enter("."),
                Err(violation) => StepResult::Ignored(violation),
            },
            Command::Backspace => match admit_backspace(&self.state) {
                Ok(()) => {
                    self.state.display = erase_last(&self.state.display);
                    StepResult::Applied
                }
                Err(violation) => StepResult::Ignored(violation),
            },
            Command::Negate => {
                self.state.display = literal(self.state.display_value() * -1.0);
                StepResult::Applied
            }
            Command::Percent => {
                self.state.display = literal(self.state.display_value() / 100.0);
                StepResult::Applied
            }
            Command::Operator(op) => self.press_operator(op),
            Command::Equals => match admit_equals(&self.state) {
                Ok(()) => self.evaluate(),
                Err(violation) => StepResult::Ignored(violation),
            },
            Command::Scientific(kind) => self.scientific(kind),
            Command::Clear => {
                self.state = EngineState::new();
                StepResult::Applied
            }
            Command::LoadFromHistory(entry) => self.load(&entry),
        };

        match &result {
            StepResult::Applied => debug!(
                command = name,
                from = from.name(),
                to = self.state.phase().name(),
                display = %self.state.display,
                "command applied"
            ),
            StepResult::Completed(entry) => {
                info!(
                    command = name,
                    expression = %entry.expression,
                    result = %entry.result,
                    "calculation completed"
                );
                self.sink.append(entry.clone());
            }
            StepResult::Ignored(violation) => {
                debug!(command = name, phase = from.name(), %violation, "command ignored")
            }
        }

        result
    }

    /// Apply commands in order, returning the entries they completed.
    pub fn apply_all<I>(&mut self, commands: I) -> Vec<HistoryEntry>
    where
        I: IntoIterator<Item = Command>,
    {
        commands
            .into_iter()
            .filter_map(|command| match self.apply(command) {
                StepResult::Completed(entry) => Some(entry),
                _ => None,
            })
            .collect()
    }

    fn enter(&mut self, text: &str) -> StepResult {
        let state = &mut self.state;

        if state.display == "0" || state.is_error() || state.reset_on_next_digit {
            state.display = if text == "." {
                "0.".to_string()
            } else {
                text.to_string()
            };
            state.reset_on_next_digit = false;

            if !state.finished_expression.is_empty() {
                state.finished_expression.clear();
                state.live_expression.clear();
                state.accumulator = None;
                state.pending_operator = None;
            }
        } else {
            state.display.push_str(text);
        }

        StepResult::Applied
    }

    fn press_operator(&mut self, op: Operator) -> StepResult {
        let state = &mut self.state;
        let value = state.display_value();

        if !state.finished_expression.is_empty() {
            // Continue from the result on screen.
            state.finished_expression.clear();
            state.live_expression = format!("{} {} ", literal(value), op);
            state.accumulator = Some(value);
        } else {
            match (state.accumulator, state.pending_operator) {
                (Some(acc), Some(pending)) if !state.reset_on_next_digit => {
                    let folded = pending.compute(acc, value);
                    trace!(%pending, acc, value, folded, "folding pending operator");
                    state.accumulator = Some(folded);
                    state.display = literal(folded);
                    state
                        .live_expression
                        .push_str(&format!("{} {} ", literal(value), op));
                }
                (Some(_), Some(_)) => {
                    // Operator pressed twice: the last one wins.
                    let trimmed = state.live_expression.trim_end();
                    let mut chars = trimmed.chars();
                    chars.next_back();
                    state.live_expression = format!("{} {} ", chars.as_str().trim_end(), op);
                }
                _ => {
                    state.accumulator = Some(value);
                    state.live_expression = format!("{} {} ", literal(value), op);
                }
            }
        }

        state.pending_operator = Some(op);
        state.reset_on_next_digit = true;
        state.last_operand = None;
        state.last_operator = None;
        StepResult::Applied
    }

    fn evaluate(&mut self) -> StepResult {
        let places = self.config.result_places;
        let state = &mut self.state;
        let value = state.display_value();

        if state.pending_operator.is_none() {
            let Some((op, operand)) = state.repeat_pair() else {
                return StepResult::Ignored(InputViolation::NothingToEvaluate);
            };
            let result = round_to(op.compute(value, operand), places);
            let expression = format!("{} {} {}", literal(value), op, literal(operand));

            state.finished_expression = format!("{expression} =");
            state.display = literal(result);
            state.reset_on_next_digit = true;
            return StepResult::Completed(HistoryEntry::new(expression, state.display.clone()));
        }

        let (Some(acc), Some(op)) = (state.accumulator, state.pending_operator) else {
            return StepResult::Ignored(InputViolation::NothingToEvaluate);
        };
        let result = round_to(op.compute(acc, value), places);
        let expression = format!("{}{}", state.live_expression, literal(value));

        state.finished_expression = format!("{expression} =");
        state.display = literal(result);
        state.last_operand = Some(value);
        state.last_operator = Some(op);
        state.accumulator = None;
        state.pending_operator = None;
        state.live_expression.clear();
        state.reset_on_next_digit = true;

        StepResult::Completed(HistoryEntry::new(expression, state.display.clone()))
    }

    fn scientific(&mut self, kind: ScientificFn) -> StepResult {
        let places = self.config.scientific_places;
        let state = &mut self.state;
        let value = state.display_value();
        let result = round_to(kind.apply(value), places);
        let label = kind.label(value);

        state.display = literal(result);
        state.finished_expression = format!("{label} =");
        state.live_expression.clear();
        state.accumulator = None;
        state.pending_operator = None;
        state.last_operand = None;
        state.last_operator = None;
        state.reset_on_next_digit = true;

        StepResult::Completed(HistoryEntry::new(label, state.display.clone()))
    }

    fn load(&mut self, entry: &HistoryEntry) -> StepResult {
        self.state = EngineState {
            display: literal(parse_literal(&entry.result)),
            finished_expression: format!("{} =", entry.expression),
            reset_on_next_digit: true,
            ..EngineState::new()
        };
        StepResult::Applied
    }
}
