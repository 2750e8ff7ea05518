// SPDX-FileCopyrightText: 2026 Mnemo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as recognized log levels and well-formed base URLs.

use crate::diagnostic::ConfigError;
use crate::model::MnemoConfig;

const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

const VALID_REASONING_EFFORTS: &[&str] = &["minimal", "low", "medium", "high"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &MnemoConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.agent.user_id.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "agent.user_id must not be empty".to_string(),
        });
    }

    if !VALID_LOG_LEVELS.contains(&config.agent.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "agent.log_level `{}` is not one of: {}",
                config.agent.log_level,
                VALID_LOG_LEVELS.join(", ")
            ),
        });
    }

    if !VALID_REASONING_EFFORTS.contains(&config.openai.reasoning_effort.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "openai.reasoning_effort `{}` is not one of: {}",
                config.openai.reasoning_effort,
                VALID_REASONING_EFFORTS.join(", ")
            ),
        });
    }

    validate_base_url("mem0.base_url", &config.mem0.base_url, &mut errors);
    validate_base_url("openai.base_url", &config.openai.base_url, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Base URLs must be http(s) and carry no trailing slash; client code joins
/// request paths with a leading slash.
fn validate_base_url(key: &str, value: &str, errors: &mut Vec<ConfigError>) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(ConfigError::Validation {
            message: format!("{key} must not be empty"),
        });
        return;
    }
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        errors.push(ConfigError::Validation {
            message: format!("{key} `{trimmed}` must start with http:// or https://"),
        });
    }
    if trimmed.ends_with('/') {
        errors.push(ConfigError::Validation {
            message: format!("{key} must not end with a trailing slash"),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = MnemoConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn empty_user_id_fails_validation() {
        let mut config = MnemoConfig::default();
        config.agent.user_id = "  ".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("user_id"))));
    }

    #[test]
    fn bogus_log_level_fails_validation() {
        let mut config = MnemoConfig::default();
        config.agent.log_level = "verbose".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("log_level"))));
    }

    #[test]
    fn bogus_reasoning_effort_fails_validation() {
        let mut config = MnemoConfig::default();
        config.openai.reasoning_effort = "max".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("reasoning_effort"))));
    }

    #[test]
    fn non_http_base_url_fails_validation() {
        let mut config = MnemoConfig::default();
        config.mem0.base_url = "ftp://api.mem0.ai".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("mem0.base_url"))));
    }

    #[test]
    fn trailing_slash_base_url_fails_validation() {
        let mut config = MnemoConfig::default();
        config.openai.base_url = "https://api.openai.com/".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("trailing slash"))));
    }

    #[test]
    fn multiple_errors_collected() {
        let mut config = MnemoConfig::default();
        config.agent.user_id = String::new();
        config.agent.log_level = "loud".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
