//! Terminal presentation surface.
//!
//! # Data Flow
//! ```text
//! stdin line
//!     → command.rs (parse into Command)
//!     → runner.rs Session::handle (calculator, scope, loading, modal, effects)
//!     → Panel list → rendered to stdout
//!
//! loading completion
//!     → notice channel → Session::notify → success modal panel
//! ```
//!
//! # Design Decisions
//! - One task owns the session; components never print directly
//! - Ctrl-C and `quit` end the loop through the same shutdown path

pub mod command;
pub mod runner;

pub use command::{Command, SessionError};
pub use runner::{run, Reply, Session};
