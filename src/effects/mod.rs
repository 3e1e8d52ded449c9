//! Visual effects.
//!
//! # Components
//! - effect_set.rs: named effects, optionally expiring after a duration
//! - animated_box.rs: one animation at a time; bounce/shake revert, glow persists
//! - flip_card.rs: two-faced toggle
//!
//! # Design Decisions
//! - Expiry is a detached timer guarded by a per-effect generation, so a
//!   re-added or cleared effect is never removed by an older timer

pub mod animated_box;
pub mod effect_set;
pub mod flip_card;

pub use animated_box::{AnimatedBox, Animation, UnknownAnimation, RESTING_LABEL};
pub use effect_set::EffectSet;
pub use flip_card::FlipCard;
