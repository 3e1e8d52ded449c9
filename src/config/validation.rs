//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (delay window non-empty, durations > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LabConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::LabConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("loading.min_delay_ms ({min}) must be less than loading.max_delay_ms ({max})")]
    EmptyDelayWindow { min: u64, max: u64 },

    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),

    #[error("observability.log_level must not be empty")]
    EmptyLogLevel,
}

/// Check a parsed configuration for semantic problems.
pub fn validate_config(config: &LabConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let loading = &config.loading;
    if loading.min_delay_ms >= loading.max_delay_ms {
        errors.push(ValidationError::EmptyDelayWindow {
            min: loading.min_delay_ms,
            max: loading.max_delay_ms,
        });
    }
    if loading.notice_delay_ms == 0 {
        errors.push(ValidationError::ZeroDuration("loading.notice_delay_ms"));
    }
    if config.effects.effect_duration_ms == 0 {
        errors.push(ValidationError::ZeroDuration("effects.effect_duration_ms"));
    }
    if config.observability.log_level.trim().is_empty() {
        errors.push(ValidationError::EmptyLogLevel);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
