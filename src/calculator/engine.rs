//! Arithmetic evaluation.

use crate::calculator::types::{CalculationResult, Operation, Outcome, LOCAL_MESSAGE};
use crate::observability::metrics;

/// Evaluate `a <op> b` for an operation tag.
///
/// Performs no input validation. Division by zero and unknown tags yield
/// sentinel outcomes inside an otherwise normal result.
pub fn evaluate(a: f64, b: f64, op: &str) -> CalculationResult {
    evaluate_operation(a, b, Operation::from_tag(op))
}

/// Evaluate with an already-resolved operation.
pub fn evaluate_operation(a: f64, b: f64, operation: Operation) -> CalculationResult {
    let result = match operation {
        Operation::Add => Outcome::Value(a + b),
        Operation::Subtract => Outcome::Value(a - b),
        Operation::Multiply => Outcome::Value(a * b),
        Operation::Divide if b != 0.0 => Outcome::Value(a / b),
        Operation::Divide => Outcome::DivideByZero,
        Operation::Invalid => Outcome::InvalidOperation,
    };

    metrics::record_evaluation(operation.as_str());
    tracing::debug!(a, b, operation = %operation, result = %result, "Evaluated");

    CalculationResult {
        result,
        operation,
        message: LOCAL_MESSAGE,
        timestamp: local_timestamp(),
    }
}

/// Current local time as `h:mm:ss AM`.
pub fn local_timestamp() -> String {
    chrono::Local::now().format("%-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::types::{DIVIDE_BY_ZERO_TEXT, INVALID_OPERATION_TEXT};

    #[test]
    fn test_basic_operations() {
        assert_eq!(evaluate(10.0, 5.0, "add").result, Outcome::Value(15.0));
        assert_eq!(evaluate(10.0, 5.0, "subtract").result, Outcome::Value(5.0));
        assert_eq!(evaluate(10.0, 5.0, "multiply").result, Outcome::Value(50.0));
        assert_eq!(evaluate(10.0, 5.0, "divide").result, Outcome::Value(2.0));
    }

    #[test]
    fn test_divide_by_zero_is_sentinel() {
        let result = evaluate(10.0, 0.0, "divide");
        assert_eq!(result.result, Outcome::DivideByZero);
        assert_eq!(result.operation, Operation::Divide);
        assert_eq!(result.result.to_string(), DIVIDE_BY_ZERO_TEXT);

        // Negative zero is still zero.
        assert_eq!(evaluate(1.0, -0.0, "divide").result, Outcome::DivideByZero);
    }

    #[test]
    fn test_unknown_operation_is_sentinel() {
        let result = evaluate(10.0, 5.0, "frobnicate");
        assert_eq!(result.result, Outcome::InvalidOperation);
        assert_eq!(result.operation, Operation::Invalid);
        assert_eq!(result.result.to_string(), INVALID_OPERATION_TEXT);
    }

    #[test]
    fn test_metadata_present() {
        let result = evaluate(1.0, 2.0, "add");
        assert_eq!(result.message, "Calculation performed locally");

        // Shape only: "h:mm:ss AM" or "hh:mm:ss PM".
        let (clock, meridiem) = result.timestamp.split_once(' ').unwrap();
        assert!(meridiem == "AM" || meridiem == "PM");
        let parts: Vec<&str> = clock.split(':').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|p| p.parse::<u32>().is_ok()));
    }

    #[test]
    fn test_arithmetic_matches_native_ops() {
        let samples = [(0.1, 0.2), (-7.5, 3.0), (1e10, -1e-3), (42.0, 42.0)];
        for (a, b) in samples {
            assert_eq!(evaluate(a, b, "add").result.value(), Some(a + b));
            assert_eq!(evaluate(a, b, "subtract").result.value(), Some(a - b));
            assert_eq!(evaluate(a, b, "multiply").result.value(), Some(a * b));
            assert_eq!(evaluate(a, b, "divide").result.value(), Some(a / b));
        }
    }
}
