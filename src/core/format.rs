//! Number rendering for the calculator display.
//!
//! Stored display values are canonical numeric literals (or the
//! [`ERROR_TOKEN`]). The [`Formatter`] is the only place where those
//! literals are turned into user-facing text: grouping separators,
//! exponential overflow and the localized error message.

use serde::{Deserialize, Serialize};

/// Canonical stored marker for a non-finite result.
///
/// Parsing this token yields NaN, so an error keeps propagating through
/// any arithmetic that consumes it.
pub const ERROR_TOKEN: &str = "Error";

/// Default display width in characters.
pub const DEFAULT_MAX_CHARS: usize = 12;

/// Most decimal places worth keeping in an f64.
pub const MAX_PLACES: u32 = 15;

/// Display language for the rendered error message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Tr,
}

impl Language {
    /// Localized text shown in place of a non-finite value.
    pub fn error_text(&self) -> &'static str {
        match self {
            Self::En => "Error",
            Self::Tr => "Hata",
        }
    }
}

/// Rendering settings owned by the host UI, never read by the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub language: Language,
    pub max_chars: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            language: Language::En,
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

/// Turns stored display literals into display text.
///
/// # Example
///
/// ```rust
/// use abacus::core::{Formatter, Language, RenderConfig};
///
/// let formatter = Formatter::default();
/// assert_eq!(formatter.render("1234567.5"), "1,234,567.5");
/// assert_eq!(formatter.render("Error"), "Error");
///
/// let turkish = Formatter::new(RenderConfig {
///     language: Language::Tr,
///     ..RenderConfig::default()
/// });
/// assert_eq!(turkish.render("Error"), "Hata");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Formatter {
    config: RenderConfig,
}

impl Formatter {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render a stored literal for display.
    ///
    /// Non-finite literals become the localized error text. Literals wider
    /// than the display switch to exponential notation; everything else
    /// gets a comma every three integer digits.
    pub fn render(&self, literal: &str) -> String {
        if is_error_literal(literal) {
            return self.config.language.error_text().to_string();
        }

        if literal.chars().count() > self.config.max_chars {
            return match literal.parse::<f64>() {
                Ok(value) if value.is_finite() => exponential(value),
                _ => literal.chars().take(self.config.max_chars).collect(),
            };
        }

        group_thousands(literal)
    }

    /// Render a raw value through its canonical literal.
    pub fn render_value(&self, value: f64) -> String {
        self.render(&literal(value))
    }
}

/// Canonical literal for a value: shortest round-trip decimal, `-0`
/// folded into `0`, non-finite values mapped to [`ERROR_TOKEN`].
///
/// ```rust
/// use abacus::core::literal;
///
/// assert_eq!(literal(8.0), "8");
/// assert_eq!(literal(-0.0), "0");
/// assert_eq!(literal(0.25), "0.25");
/// assert_eq!(literal(f64::NAN), "Error");
/// ```
pub fn literal(value: f64) -> String {
    if !value.is_finite() {
        ERROR_TOKEN.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}")
    }
}

/// Read a display literal back into a number.
///
/// A trailing decimal point (`"12."`) is accepted. The error token and
/// anything unparseable read as NaN.
pub fn parse_literal(text: &str) -> f64 {
    if is_error_literal(text) {
        return f64::NAN;
    }
    let text = text.strip_suffix('.').unwrap_or(text);
    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// Round to a fixed number of decimal places, leaving non-finite values alone.
/// Requests beyond [`MAX_PLACES`] are capped.
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", places.min(MAX_PLACES) as usize, value)
        .parse::<f64>()
        .unwrap_or(value)
}

fn is_error_literal(text: &str) -> bool {
    matches!(
        text,
        ERROR_TOKEN | "NaN" | "Infinity" | "-Infinity" | "inf" | "-inf"
    )
}

/// `1.234568e+12`, with trailing mantissa zeros dropped (`1e+21`).
fn exponential(value: f64) -> String {
    let formatted = format!("{value:.6e}");
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };

    let mantissa = if mantissa.contains('.') {
        mantissa.trim_end_matches('0').trim_end_matches('.')
    } else {
        mantissa
    };

    if exponent.starts_with('-') {
        format!("{mantissa}e{exponent}")
    } else {
        format!("{mantissa}e+{exponent}")
    }
}

fn group_thousands(literal: &str) -> String {
    let (integer, fraction) = match literal.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (literal, None),
    };
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", integer),
    };

    let mut grouped = String::with_capacity(literal.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
