//! Interactive Lab Library
//!
//! Calculator, scope demonstration, loading simulator, notification modal
//! and visual effects behind a terminal session.

pub mod calculator;
pub mod config;
pub mod display;
pub mod effects;
pub mod lifecycle;
pub mod loading;
pub mod notice;
pub mod observability;
pub mod scope;
pub mod session;

pub use calculator::{calculate_all, evaluate, CalculationResult, Outcome};
pub use config::LabConfig;
pub use lifecycle::Shutdown;
pub use loading::{LoadingController, LoadingState};
pub use session::Session;
