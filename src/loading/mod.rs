//! Loading simulator.
//!
//! # Data Flow
//! ```text
//! toggle()
//!     → controller.rs (flip state, start a new episode)
//!     → entering Loading: deferred.rs schedules completion after U[min, max) ms
//!     → leaving Loading manually: pending completion aborted
//!
//! completion fires (same episode, still Loading)
//!     → flip back to Idle
//!     → after notice_delay_ms: NoticeKind::Success on the notice channel
//! ```
//!
//! # Design Decisions
//! - The controller exclusively owns the state; observers use a watch channel
//! - Cancellation by handle, with an episode check as the stale-callback guard
//! - The mutex is never held across an await

pub mod controller;
pub mod deferred;
pub mod state;

pub use controller::LoadingController;
pub use deferred::Deferred;
pub use state::LoadingState;
