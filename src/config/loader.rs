//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::LabConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<LabConfig, ConfigError> {
    let config: LabConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<LabConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;

    tracing::debug!(path = %path.display(), "Configuration file loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_config() {
        let config = parse_config(
            r#"
            [loading]
            min_delay_ms = 10
            max_delay_ms = 20

            [effects]
            effect_duration_ms = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.loading.min_delay_ms, 10);
        assert_eq!(config.loading.max_delay_ms, 20);
        assert_eq!(config.effects.effect_duration_ms, 5);
    }

    #[test]
    fn test_parse_rejects_invalid_window() {
        let err = parse_config(
            r#"
            [loading]
            min_delay_ms = 30
            max_delay_ms = 20
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::Validation(ref e) if e.len() == 1));
        assert!(err.to_string().starts_with("Validation failed: "));
    }

    #[test]
    fn test_parse_rejects_bad_toml() {
        let err = parse_config("[loading\nmin_delay_ms = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config(Path::new("does-not-exist-lab.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("lab-config-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, "[effects]\neffect_duration_ms = 250\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.effects.effect_duration_ms, 250);

        std::fs::remove_file(&path).unwrap_or_default();
    }
}
