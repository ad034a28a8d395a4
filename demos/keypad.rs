//! Keypad
//!
//! Feeds whitespace-separated key names from stdin into the engine and
//! prints what a display would show after each key.
//!
//! Key names: digits, `.`, `+ - * / ^`, `=` or `Enter`, `Backspace`,
//! `Escape`, plus `neg`, `%`, `sqrt`, `sqr`, `sin`, `cos`, `tan`, `log`,
//! `ln`, `pi` and `e` for the buttons without a keyboard key.
//!
//! Run with: echo "2 + 3 * 4 = =" | RUST_LOG=abacus=debug cargo run --example keypad

use abacus::builder::EngineBuilder;
use abacus::core::{Formatter, Language, RenderConfig, ScientificFn};
use abacus::engine::{Command, StepResult};
use std::io::{self, BufRead};
use tracing_subscriber::EnvFilter;

fn button(key: &str) -> Option<Command> {
    let command = match key {
        "neg" => Command::Negate,
        "%" => Command::Percent,
        "sqrt" => Command::Scientific(ScientificFn::Sqrt),
        "sqr" => Command::Scientific(ScientificFn::Square),
        "sin" => Command::Scientific(ScientificFn::Sin),
        "cos" => Command::Scientific(ScientificFn::Cos),
        "tan" => Command::Scientific(ScientificFn::Tan),
        "log" => Command::Scientific(ScientificFn::Log10),
        "ln" => Command::Scientific(ScientificFn::Ln),
        "pi" => Command::Scientific(ScientificFn::Pi),
        "e" => Command::Scientific(ScientificFn::E),
        _ => return Command::from_key(key),
    };
    Some(command)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let language = match std::env::var("ABACUS_LANG").as_deref() {
        Ok("tr") => Language::Tr,
        _ => Language::En,
    };
    let formatter = Formatter::new(RenderConfig {
        language,
        ..RenderConfig::default()
    });
    let mut engine = EngineBuilder::with_history().build()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        for key in line.split_whitespace() {
            let Some(command) = button(key) else {
                eprintln!("unknown key: {key}");
                continue;
            };

            let marker = match engine.apply(command) {
                StepResult::Completed(_) => " *",
                StepResult::Ignored(_) => " (ignored)",
                StepResult::Applied => "",
            };
            let view = engine.view(&formatter);
            println!(
                "{key:>9} | {:>24} | {:>14}{marker}",
                view.expression_text(),
                view.display_text
            );
        }
    }

    println!("\n=== History (newest first) ===");
    for entry in engine.sink().iter() {
        println!("{}", entry.display());
    }

    Ok(())
}
