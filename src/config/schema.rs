//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the lab.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the interactive lab.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct LabConfig {
    /// Loading simulator timings.
    pub loading: LoadingConfig,

    /// Visual effect timings.
    pub effects: EffectsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Loading simulator configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoadingConfig {
    /// Lower bound (inclusive) of the simulated completion delay.
    pub min_delay_ms: u64,

    /// Upper bound (exclusive) of the simulated completion delay.
    pub max_delay_ms: u64,

    /// Pause between auto-stop and the success notification.
    pub notice_delay_ms: u64,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: 2000,
            max_delay_ms: 5000,
            notice_delay_ms: 300,
        }
    }
}

/// Visual effect configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct EffectsConfig {
    /// How long transient animations (bounce, shake) stay applied.
    pub effect_duration_ms: u64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            effect_duration_ms: 1000,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub log_level: String,

    /// Emit logs as JSON lines instead of the pretty format.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "interactive_lab=info".to_string(),
            json_logs: false,
        }
    }
}
