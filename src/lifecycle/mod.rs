//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Initialize logging
//!
//! Shutdown (shutdown.rs):
//!     Trigger → every subscribed loop exits
//!
//! Signals (signals.rs):
//!     SIGINT (Ctrl-C) → Trigger shutdown
//! ```
//!
//! # Design Decisions
//! - Config first, then logging configured from it
//! - A bad config file is fatal; a missing `--config` means defaults

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
