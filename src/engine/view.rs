//! Render-ready snapshot of the engine.

use crate::core::{EngineState, Formatter};
use serde::{Deserialize, Serialize};

/// What the host UI draws after every command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    pub display_text: String,
    pub live_expression_text: String,
    pub finished_expression_text: String,
}

impl View {
    pub fn render(state: &EngineState, formatter: &Formatter) -> Self {
        Self {
            display_text: formatter.render(&state.display),
            live_expression_text: state.live_expression.clone(),
            finished_expression_text: state.finished_expression.clone(),
        }
    }

    /// Trail above the display; the finished one wins until new entry starts.
    pub fn expression_text(&self) -> &str {
        if self.finished_expression_text.is_empty() {
            &self.live_expression_text
        } else {
            &self.finished_expression_text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Language, RenderConfig, ERROR_TOKEN};

    #[test]
    fn renders_display_through_formatter() {
        let state = EngineState {
            display: "1234567".to_string(),
            live_expression: "1234567 + ".to_string(),
            ..EngineState::new()
        };

        let view = View::render(&state, &Formatter::default());
        assert_eq!(view.display_text, "1,234,567");
        assert_eq!(view.expression_text(), "1234567 + ");
    }

    #[test]
    fn finished_expression_is_preferred() {
        let state = EngineState {
            display: ERROR_TOKEN.to_string(),
            finished_expression: "5 / 0 =".to_string(),
            ..EngineState::new()
        };
        let formatter = Formatter::new(RenderConfig {
            language: Language::Tr,
            ..RenderConfig::default()
        });

        let view = View::render(&state, &formatter);
        assert_eq!(view.display_text, "Hata");
        assert_eq!(view.expression_text(), "5 / 0 =");
    }
}
