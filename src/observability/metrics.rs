//! Metrics collection.
//!
//! # Metrics
//! - `lab_evaluations_total` (counter): evaluations by operation
//! - `lab_invalid_input_total` (counter): calculation requests rejected before evaluation
//! - `lab_loading_toggles_total` (counter): toggles by resulting state
//! - `lab_loading_completions_total` (counter): deferred completions by outcome
//!   (`completed` or `cancelled`; a superseded completion counts once, as cancelled)
//! - `lab_loading_active` (gauge): 1=loading, 0=idle
//! - `lab_notifications_total` (counter): modals opened by kind
//!
//! # Design Decisions
//! - Recorder is left to the embedder; nothing is exported over the network

/// Record one arithmetic evaluation.
pub fn record_evaluation(operation: &'static str) {
    metrics::counter!("lab_evaluations_total", "operation" => operation).increment(1);
}

/// Record a calculation rejected for non-numeric input.
pub fn record_invalid_input() {
    metrics::counter!("lab_invalid_input_total").increment(1);
}

/// Record a loading toggle and the state it produced.
pub fn record_loading_toggle(state: &'static str, active: bool) {
    metrics::counter!("lab_loading_toggles_total", "state" => state).increment(1);
    metrics::gauge!("lab_loading_active").set(if active { 1.0 } else { 0.0 });
}

/// Record how a scheduled loading completion ended.
pub fn record_loading_completion(outcome: &'static str) {
    metrics::counter!("lab_loading_completions_total", "outcome" => outcome).increment(1);
}

/// Record a notification modal being opened.
pub fn record_notification(kind: &'static str) {
    metrics::counter!("lab_notifications_total", "kind" => kind).increment(1);
}
