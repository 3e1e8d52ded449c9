//! Scope demonstration.
//!
//! The counter that used to be ambient global state is owned by
//! [`ScopeContext`]; callers pass the context to whatever needs it.

use serde::Serialize;

/// Message visible from every scope.
pub const GLOBAL_MESSAGE: &str = "This is a global variable";

const LOCAL_MESSAGE: &str = "This is a local variable";
const INNER_VARIABLE: &str = "I'm inside the inner function";
const LOCAL_COUNTER: u64 = 10;

/// What the innermost closure could see when it ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScopeReport {
    pub global_message: &'static str,
    pub local_message: &'static str,
    pub inner_variable: &'static str,
    pub global_counter: u64,
    pub local_counter: u64,
}

impl ScopeReport {
    pub fn lines(&self) -> Vec<String> {
        vec![
            "Scope Demonstration:".to_string(),
            format!("Global Message: \"{}\"", self.global_message),
            format!("Local Message: \"{}\"", self.local_message),
            format!("Inner Variable: \"{}\"", self.inner_variable),
            format!("Global Counter: {}", self.global_counter),
            format!("Local Counter: {}", self.local_counter),
            "Note: Inner function can access all outer scopes!".to_string(),
        ]
    }
}

/// Owner of the shared counter.
#[derive(Debug, Default)]
pub struct ScopeContext {
    counter: u64,
}

impl ScopeContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Run a nested closure that bumps the shared counter and reports what
    /// each enclosing scope exposes to it.
    pub fn demonstrate(&mut self) -> ScopeReport {
        let local_counter = LOCAL_COUNTER;
        let local_message = LOCAL_MESSAGE;
        let counter = &mut self.counter;

        let mut inner = || {
            let inner_variable = INNER_VARIABLE;
            *counter += 1;

            ScopeReport {
                global_message: GLOBAL_MESSAGE,
                local_message,
                inner_variable,
                global_counter: *counter,
                local_counter,
            }
        };

        let report = inner();
        tracing::debug!(global_counter = report.global_counter, "Scope demonstrated");
        report
    }
}
