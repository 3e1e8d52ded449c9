//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All components produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (counters, gauges via the `metrics` facade)
//!
//! Consumers:
//!     → stderr (pretty or JSON lines)
//!     → whatever metrics recorder the embedding application installs
//! ```
//!
//! # Design Decisions
//! - Structured fields on every event (operation, state, episode id)
//! - Metrics are cheap; with no recorder installed they are no-ops

pub mod logging;
pub mod metrics;
