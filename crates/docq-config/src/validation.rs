// SPDX-FileCopyrightText: 2026 Docq Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as URL shape and recognized log levels.

use crate::diagnostic::ConfigError;
use crate::model::DocqConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &DocqConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let base_url = config.backend.base_url.trim();
    if base_url.is_empty() {
        errors.push(ConfigError::Validation {
            message: "backend.base_url must not be empty".to_string(),
        });
    } else if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        errors.push(ConfigError::Validation {
            message: format!(
                "backend.base_url `{base_url}` must start with http:// or https://"
            ),
        });
    }

    if !LOG_LEVELS.contains(&config.app.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "app.log_level `{}` is not one of: {}",
                config.app.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if let Some(portal) = &config.app.portal
        && portal.trim().is_empty()
    {
        errors.push(ConfigError::Validation {
            message: "app.portal must not be blank when set".to_string(),
        });
    }

    if config.chat.portal_config_ttl_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "chat.portal_config_ttl_secs must be at least 1".to_string(),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = DocqConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn empty_base_url_fails_validation() {
        let mut config = DocqConfig::default();
        config.backend.base_url = "".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("base_url"))
        ));
    }

    #[test]
    fn non_http_base_url_fails_validation() {
        let mut config = DocqConfig::default();
        config.backend.base_url = "ftp://example.com".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("http://"))
        ));
    }

    #[test]
    fn bogus_log_level_fails_validation() {
        let mut config = DocqConfig::default();
        config.app.log_level = "loud".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("log_level"))
        ));
    }

    #[test]
    fn zero_ttl_fails_validation() {
        let mut config = DocqConfig::default();
        config.chat.portal_config_ttl_secs = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn blank_portal_fails_but_absent_portal_is_fine() {
        let mut config = DocqConfig::default();
        config.app.portal = Some("  ".to_string());
        assert!(validate_config(&config).is_err());
        config.app.portal = None;
        assert!(validate_config(&config).is_ok());
    }
}
