//! Arithmetic evaluator.
//!
//! # Data Flow
//! ```text
//! operand text
//!     → operand.rs (lenient numeric parse; rejects non-numbers)
//!     → engine.rs (evaluate one operation, attach message + timestamp)
//!     → report.rs (all four operations, rendered lines)
//! ```
//!
//! # Design Decisions
//! - Division by zero and unknown tags are `Outcome` variants, not errors
//! - The only rejected input is a non-numeric operand
//! - Evaluation is pure apart from reading the wall clock

pub mod engine;
pub mod operand;
pub mod report;
pub mod types;

pub use engine::{evaluate, evaluate_operation};
pub use operand::parse_operand;
pub use report::{calculate_all, CalculationReport};
pub use types::{CalcError, CalculationResult, Operation, Outcome};
