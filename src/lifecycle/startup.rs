//! Startup orchestration.

use std::path::Path;

use crate::config::{load_config, ConfigError, LabConfig};
use crate::observability::logging::init_logging;

/// Load configuration (or defaults) and install logging.
pub fn startup(config_path: Option<&Path>) -> Result<LabConfig, ConfigError> {
    let config = match config_path {
        Some(path) => load_config(path)?,
        None => LabConfig::default(),
    };

    init_logging(&config.observability);

    tracing::info!(
        min_delay_ms = config.loading.min_delay_ms,
        max_delay_ms = config.loading.max_delay_ms,
        effect_duration_ms = config.effects.effect_duration_ms,
        "Configuration loaded"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_path() {
        assert_eq!(startup(None).unwrap(), LabConfig::default());
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = startup(Some(Path::new("no-such-lab-config.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
