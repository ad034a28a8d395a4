//! Builder for constructing calculator engines.

use crate::builder::config::EngineConfig;
use crate::builder::error::BuildError;
use crate::core::{History, HistorySink};
use crate::engine::CalculatorEngine;

type SinkFactory<H> = Box<dyn FnOnce(&EngineConfig) -> H + Send>;

/// Builder for constructing engines with a fluent API.
pub struct EngineBuilder<H: HistorySink> {
    config: EngineConfig,
    sink: Option<SinkFactory<H>>,
}

impl<H: HistorySink + Send + 'static> EngineBuilder<H> {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            sink: None,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn max_chars(mut self, max_chars: usize) -> Self {
        self.config.max_chars = max_chars;
        self
    }

    pub fn result_places(mut self, places: u32) -> Self {
        self.config.result_places = places;
        self
    }

    pub fn scientific_places(mut self, places: u32) -> Self {
        self.config.scientific_places = places;
        self
    }

    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    /// Set the history sink (required unless built via `with_history`).
    pub fn sink(mut self, sink: H) -> Self {
        self.sink = Some(Box::new(move |_: &EngineConfig| sink));
        self
    }

    /// Build the engine.
    /// Returns an error if the configuration is out of range or no sink was given.
    pub fn build(self) -> Result<CalculatorEngine<H>, BuildError> {
        self.config.validate()?;
        let make_sink = self.sink.ok_or(BuildError::MissingSink)?;
        let sink = make_sink(&self.config);
        Ok(CalculatorEngine::new(self.config, sink))
    }
}

impl EngineBuilder<History> {
    /// Builder whose sink is a [`History`] sized by `history_capacity`.
    pub fn with_history() -> Self {
        Self {
            config: EngineConfig::default(),
            sink: Some(Box::new(|config: &EngineConfig| {
                History::with_capacity(config.history_capacity)
            })),
        }
    }
}

impl<H: HistorySink + Send + 'static> Default for EngineBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{HistoryEntry, Operator};
    use crate::engine::Command;

    #[test]
    fn builder_requires_sink() {
        let result = EngineBuilder::<Vec<HistoryEntry>>::new().build();
        assert!(matches!(result, Err(BuildError::MissingSink)));
    }

    #[test]
    fn builder_validates_display_width() {
        let result = EngineBuilder::with_history().max_chars(1).build();
        assert!(matches!(result, Err(BuildError::DisplayTooNarrow(1))));
    }

    #[test]
    fn builder_validates_history_capacity() {
        let result = EngineBuilder::with_history().history_capacity(0).build();
        assert!(matches!(result, Err(BuildError::EmptyHistory)));
    }

    #[test]
    fn builder_validates_precision() {
        let result = EngineBuilder::with_history().scientific_places(20).build();
        assert!(matches!(
            result,
            Err(BuildError::PrecisionTooHigh {
                field: "scientific_places",
                places: 20
            })
        ));
    }

    #[test]
    fn with_history_sizes_history_from_config() {
        let engine = EngineBuilder::with_history()
            .history_capacity(3)
            .build()
            .unwrap();
        assert_eq!(engine.sink().capacity(), 3);
    }

    #[test]
    fn fluent_api_builds_engine() {
        let mut engine = EngineBuilder::new()
            .max_chars(4)
            .sink(Vec::<HistoryEntry>::new())
            .build()
            .unwrap();

        for d in [1, 2, 3, 4, 5] {
            engine.apply(Command::Digit(d));
        }
        assert_eq!(engine.state().display, "1234");

        engine.apply(Command::Operator(Operator::Add));
        engine.apply(Command::Digit(1));
        engine.apply(Command::Equals);
        assert_eq!(engine.sink().len(), 1);
        assert_eq!(engine.sink()[0].result, "1235");
    }
}
