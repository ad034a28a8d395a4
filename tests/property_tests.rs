//! Property-based tests for the calculator engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated command streams and values.

use abacus::core::{
    literal, parse_literal, round_to, Formatter, History, HistoryEntry, Operator, ScientificFn,
    ERROR_TOKEN,
};
use abacus::engine::{CalculatorEngine, Command, StepResult};
use abacus::EngineConfig;
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_operator()(variant in 0..5usize) -> Operator {
        Operator::ALL[variant]
    }
}

prop_compose! {
    fn arbitrary_scientific()(variant in 0..9usize) -> ScientificFn {
        ScientificFn::ALL[variant]
    }
}

fn arbitrary_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => (0u8..=9).prop_map(Command::Digit),
        1 => Just(Command::Decimal),
        1 => Just(Command::Backspace),
        1 => Just(Command::Negate),
        1 => Just(Command::Percent),
        3 => arbitrary_operator().prop_map(Command::Operator),
        2 => Just(Command::Equals),
        1 => arbitrary_scientific().prop_map(Command::Scientific),
        1 => Just(Command::Clear),
    ]
}

fn engine() -> CalculatorEngine<Vec<HistoryEntry>> {
    CalculatorEngine::new(EngineConfig::default(), Vec::new())
}

proptest! {
    #[test]
    fn every_command_stream_keeps_invariants(
        commands in prop::collection::vec(arbitrary_command(), 0..60)
    ) {
        let mut engine = engine();
        let formatter = Formatter::default();

        for command in commands {
            engine.apply(command);
            let state = engine.state();

            prop_assert!(state.validate().is_ok(), "invalid state: {:?}", state);
            prop_assert_ne!(state.display.as_str(), "NaN");
            prop_assert!(!state.display.contains("inf"));

            let view = engine.view(&formatter);
            prop_assert!(!view.display_text.is_empty());
            if !view.finished_expression_text.is_empty() {
                prop_assert_eq!(view.expression_text(), view.finished_expression_text.as_str());
            }
        }
    }

    #[test]
    fn completions_match_sink(
        commands in prop::collection::vec(arbitrary_command(), 0..60)
    ) {
        let mut engine = engine();
        let mut completed = Vec::new();

        for command in commands {
            if let StepResult::Completed(entry) = engine.apply(command) {
                completed.push(entry);
            }
        }

        prop_assert_eq!(engine.sink(), &completed);
    }

    #[test]
    fn typed_operands_respect_digit_cap(digits in prop::collection::vec(0u8..=9, 0..40)) {
        let mut engine = engine();
        for d in digits {
            engine.apply(Command::Digit(d));
        }
        prop_assert!(engine.state().display.chars().count() <= 12);
    }

    #[test]
    fn chain_matches_iterative_fold(
        first in 1u32..1000,
        steps in prop::collection::vec((arbitrary_operator(), 1u32..1000), 1..6)
    ) {
        let mut engine = engine();
        let mut expected = f64::from(first);
        type_number(&mut engine, first);

        for (op, operand) in &steps {
            engine.apply(Command::Operator(*op));
            type_number(&mut engine, *operand);
        }
        engine.apply(Command::Equals);

        for (op, operand) in &steps {
            expected = op.compute(expected, f64::from(*operand));
        }
        let expected = literal(round_to(expected, 10));
        prop_assert_eq!(&engine.state().display, &expected);
    }

    #[test]
    fn divide_by_zero_is_always_error(numerator in 0u32..1_000_000) {
        let mut engine = engine();
        type_number(&mut engine, numerator);
        engine.apply(Command::Operator(Operator::Divide));
        engine.apply(Command::Digit(0));
        engine.apply(Command::Equals);

        prop_assert_eq!(engine.state().display.as_str(), ERROR_TOKEN);
        engine.apply(Command::Clear);
        prop_assert_eq!(engine.state().display.as_str(), "0");
    }

    #[test]
    fn formatter_is_idempotent_for_integers(value in -99_999_999_999i64..99_999_999_999i64) {
        let formatter = Formatter::default();
        let rendered = formatter.render_value(value as f64);
        let reparsed = parse_literal(&rendered.replace(',', ""));
        prop_assert_eq!(formatter.render_value(reparsed), rendered);
    }

    #[test]
    fn formatter_is_idempotent_for_decimals(cents in -999_999_999i64..999_999_999i64) {
        let formatter = Formatter::default();
        let rendered = formatter.render_value(cents as f64 / 100.0);
        let reparsed = parse_literal(&rendered.replace(',', ""));
        prop_assert_eq!(formatter.render_value(reparsed), rendered);
    }

    #[test]
    fn history_never_exceeds_capacity(
        capacity in 1usize..20,
        appends in 0usize..60
    ) {
        let mut engine = CalculatorEngine::new(
            EngineConfig { history_capacity: capacity, ..EngineConfig::default() },
            History::with_capacity(capacity),
        );
        engine.apply(Command::Digit(1));
        engine.apply(Command::Operator(Operator::Add));
        engine.apply(Command::Digit(1));
        for _ in 0..appends {
            engine.apply(Command::Equals);
        }

        prop_assert_eq!(engine.sink().len(), appends.min(capacity));
        if appends > 0 {
            let newest = literal(2.0 + (appends as f64 - 1.0));
            prop_assert_eq!(&engine.sink().latest().unwrap().result, &newest);
        }
    }

    #[test]
    fn command_roundtrip_serialization(command in arbitrary_command()) {
        let json = serde_json::to_string(&command).unwrap();
        let deserialized: Command = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(command, deserialized);
    }
}

fn type_number(engine: &mut CalculatorEngine<Vec<HistoryEntry>>, value: u32) {
    for c in value.to_string().chars() {
        if let Some(command) = Command::from_key(&c.to_string()) {
            engine.apply(command);
        }
    }
}
