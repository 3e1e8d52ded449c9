//! Calculator types.

use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Sentinel text shown when dividing by zero.
pub const DIVIDE_BY_ZERO_TEXT: &str = "Cannot divide by zero";

/// Sentinel text shown for an unrecognized operation tag.
pub const INVALID_OPERATION_TEXT: &str = "Invalid operation";

/// Fixed message attached to every result.
pub const LOCAL_MESSAGE: &str = "Calculation performed locally";

/// Notice shown instead of results when an operand is not a number.
pub const INVALID_INPUT_NOTICE: &str = "Please enter valid numbers";

/// Supported arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Any tag the evaluator does not recognize.
    Invalid,
}

impl Operation {
    /// The four real operations, in display order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Map an operation tag to an operation. Tags are case-sensitive.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "add" => Operation::Add,
            "subtract" => Operation::Subtract,
            "multiply" => Operation::Multiply,
            "divide" => Operation::Divide,
            _ => Operation::Invalid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Invalid => "invalid",
        }
    }

    /// Heading used in the rendered report.
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
            Operation::Divide => "Division",
            Operation::Invalid => "Invalid",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
            Operation::Invalid => "?",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an evaluation produced.
///
/// Division by zero and unknown operations are ordinary outcomes, not errors.
/// Their text and JSON forms are the sentinel strings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Value(f64),
    DivideByZero,
    InvalidOperation,
}

impl Outcome {
    /// The numeric value, if the evaluation produced one.
    pub fn value(&self) -> Option<f64> {
        match self {
            Outcome::Value(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Outcome::Value(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value(v) => f.write_str(&format_number(*v)),
            Outcome::DivideByZero => f.write_str(DIVIDE_BY_ZERO_TEXT),
            Outcome::InvalidOperation => f.write_str(INVALID_OPERATION_TEXT),
        }
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Outcome::Value(v) => serializer.serialize_f64(*v),
            Outcome::DivideByZero => serializer.serialize_str(DIVIDE_BY_ZERO_TEXT),
            Outcome::InvalidOperation => serializer.serialize_str(INVALID_OPERATION_TEXT),
        }
    }
}

/// The packaged result of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub result: Outcome,
    pub operation: Operation,
    pub message: &'static str,
    /// Local wall-clock time at evaluation, e.g. `3:04:05 PM`.
    pub timestamp: String,
}

impl CalculationResult {
    /// Two display lines: the worked expression, then message and time.
    pub fn lines(&self, lhs: f64, rhs: f64) -> Vec<String> {
        vec![
            format!(
                "{} {} {} = {}",
                format_number(lhs),
                self.operation.symbol(),
                format_number(rhs),
                self.result
            ),
            format!("{} at {}", self.message, self.timestamp),
        ]
    }
}

/// Errors from the calculation flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("`{0}` is not a number")]
    InvalidOperand(String),
}

impl CalcError {
    /// The text shown to the user in place of results.
    pub fn notice(&self) -> &'static str {
        INVALID_INPUT_NOTICE
    }
}

/// Render a number the way a browser prints it: no trailing `.0` for
/// integral values, exponent form at or above 1e21 and below 1e-6.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if value == 0.0 {
        // Drops the sign of negative zero.
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        exponent_form(value)
    } else {
        value.to_string()
    }
}

/// `1e21` → `1e+21`, `1.5e-7` unchanged.
fn exponent_form(value: f64) -> String {
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_tags() {
        assert_eq!(Operation::from_tag("add"), Operation::Add);
        assert_eq!(Operation::from_tag("divide"), Operation::Divide);
        assert_eq!(Operation::from_tag("Add"), Operation::Invalid);
        assert_eq!(Operation::from_tag("frobnicate"), Operation::Invalid);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(15.0), "15");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_number_exponent_thresholds() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-1e21), "-1e+21");
        assert_eq!(format_number(1e300), "1e+300");
        assert_eq!(format_number(1.5e22), "1.5e+22");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-2.5e-8), "-2.5e-8");

        // Just inside the plain range on either side.
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_result_lines() {
        let result = CalculationResult {
            result: Outcome::Value(2.0),
            operation: Operation::Divide,
            message: LOCAL_MESSAGE,
            timestamp: "3:04:05 PM".to_string(),
        };
        assert_eq!(
            result.lines(10.0, 5.0),
            vec![
                "10 ÷ 5 = 2".to_string(),
                "Calculation performed locally at 3:04:05 PM".to_string(),
            ]
        );
    }

    #[test]
    fn test_outcome_json_keeps_sentinels() {
        assert_eq!(serde_json::to_string(&Outcome::Value(2.0)).unwrap(), "2.0");
        assert_eq!(
            serde_json::to_string(&Outcome::DivideByZero).unwrap(),
            "\"Cannot divide by zero\""
        );
        assert_eq!(
            serde_json::to_string(&Outcome::InvalidOperation).unwrap(),
            "\"Invalid operation\""
        );
    }
}
