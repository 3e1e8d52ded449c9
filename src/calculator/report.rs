//! The calculation flow: parse two operands, run every operation, render.

use serde::Serialize;

use crate::calculator::engine::evaluate_operation;
use crate::calculator::operand::parse_operand;
use crate::calculator::types::{format_number, CalcError, CalculationResult, Operation};
use crate::observability::metrics;

/// One result per operation for a pair of operands.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationReport {
    pub lhs: f64,
    pub rhs: f64,
    pub results: Vec<CalculationResult>,
}

impl CalculationReport {
    /// Evaluate all four operations for already-parsed operands.
    pub fn new(lhs: f64, rhs: f64) -> Self {
        let results = Operation::ALL
            .iter()
            .map(|op| evaluate_operation(lhs, rhs, *op))
            .collect();

        Self { lhs, rhs, results }
    }

    /// Result for one operation, if present.
    pub fn get(&self, operation: Operation) -> Option<&CalculationResult> {
        self.results.iter().find(|r| r.operation == operation)
    }

    /// Lines of the rendered report, heading first.
    pub fn lines(&self) -> Vec<String> {
        let lhs = format_number(self.lhs);
        let rhs = format_number(self.rhs);

        let mut lines = vec!["Calculation Results:".to_string()];
        for result in &self.results {
            lines.push(format!(
                "{}: {} {} {} = {}",
                result.operation.label(),
                lhs,
                result.operation.symbol(),
                rhs,
                result.result
            ));
        }
        if let Some(first) = self.results.first() {
            lines.push(format!("Calculated at: {}", first.timestamp));
        }
        lines
    }
}

/// Parse both operands and evaluate every operation.
///
/// Either operand failing to parse aborts the flow before any evaluation.
pub fn calculate_all(lhs: &str, rhs: &str) -> Result<CalculationReport, CalcError> {
    let parsed = parse_operand(lhs).and_then(|a| parse_operand(rhs).map(|b| (a, b)));

    match parsed {
        Ok((a, b)) => Ok(CalculationReport::new(a, b)),
        Err(e) => {
            metrics::record_invalid_input();
            tracing::warn!(lhs, rhs, error = %e, "Rejected calculation input");
            Err(e)
        }
    }
}
