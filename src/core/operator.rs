//! Binary operators and scientific functions.
//!
//! Both are pure: no operation panics, domain errors surface as
//! non-finite values that the formatter later renders as an error.

use super::format::literal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operator applied between the accumulator and the display value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "^")]
    Power,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
    ];

    /// Symbol used in expression trails.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Apply the operator to two operands.
    ///
    /// Division by zero yields NaN. Power inherits `powf` domain behavior,
    /// so a negative base with a fractional exponent is NaN as well.
    ///
    /// ```rust
    /// use abacus::core::Operator;
    ///
    /// assert_eq!(Operator::Add.compute(2.0, 3.0), 5.0);
    /// assert_eq!(Operator::Power.compute(2.0, 10.0), 1024.0);
    /// assert!(Operator::Divide.compute(1.0, 0.0).is_nan());
    /// ```
    pub fn compute(&self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    f64::NAN
                } else {
                    a / b
                }
            }
            Self::Power => a.powf(b),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unary scientific function or constant, evaluated against the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScientificFn {
    Sqrt,
    Square,
    Sin,
    Cos,
    Tan,
    Log10,
    Ln,
    Pi,
    E,
}

impl ScientificFn {
    pub const ALL: [ScientificFn; 9] = [
        Self::Sqrt,
        Self::Square,
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Log10,
        Self::Ln,
        Self::Pi,
        Self::E,
    ];

    /// Evaluate against the current value. Constants ignore their input.
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Self::Sqrt => value.sqrt(),
            Self::Square => value * value,
            Self::Sin => value.sin(),
            Self::Cos => value.cos(),
            Self::Tan => value.tan(),
            Self::Log10 => value.log10(),
            Self::Ln => value.ln(),
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        }
    }

    /// Expression label recorded in history, e.g. `√(4)` or `π`.
    pub fn label(&self, value: f64) -> String {
        let v = literal(value);
        match self {
            Self::Sqrt => format!("√({v})"),
            Self::Square => format!("({v})²"),
            Self::Sin => format!("sin({v})"),
            Self::Cos => format!("cos({v})"),
            Self::Tan => format!("tan({v})"),
            Self::Log10 => format!("log({v})"),
            Self::Ln => format!("ln({v})"),
            Self::Pi => "π".to_string(),
            Self::E => "e".to_string(),
        }
    }
}
