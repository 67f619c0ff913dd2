// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as similarity ranges and valid bind addresses.

use thiserror::Error;

use crate::model::NavigatorConfig;

/// A configuration error surfaced at load or validation time.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Parsing or merging failed inside Figment.
    #[error("config parse error: {0}")]
    Parse(#[from] figment::Error),

    /// A semantic constraint was violated.
    #[error("config validation error: {message}")]
    Validation { message: String },
}

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &NavigatorConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let threshold = config.memory.recall_threshold;
    if !(-1.0..=1.0).contains(&threshold) {
        errors.push(ConfigError::Validation {
            message: format!(
                "memory.recall_threshold must be within [-1.0, 1.0], got {threshold}"
            ),
        });
    }

    if config.memory.recall_limit == 0 {
        errors.push(ConfigError::Validation {
            message: "memory.recall_limit must be at least 1".to_string(),
        });
    }

    if config.openai.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "openai.timeout_secs must be at least 1".to_string(),
        });
    }

    if config.openai.base_url.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "openai.base_url must not be empty".to_string(),
        });
    }

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    let addr = config.gateway.bind_address.trim();
    if addr.is_empty() {
        errors.push(ConfigError::Validation {
            message: "gateway.bind_address must not be empty".to_string(),
        });
    } else {
        let is_valid_ip = addr.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = addr
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!(
                    "gateway.bind_address `{addr}` is not a valid IP address or hostname"
                ),
            });
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&NavigatorConfig::default()).is_ok());
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let mut config = NavigatorConfig::default();
        config.memory.recall_threshold = 1.5;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].to_string().contains("recall_threshold"));
    }

    #[test]
    fn collects_all_errors_without_failing_fast() {
        let mut config = NavigatorConfig::default();
        config.memory.recall_limit = 0;
        config.openai.timeout_secs = 0;
        config.storage.database_path = " ".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn garbage_bind_address_is_rejected() {
        let mut config = NavigatorConfig::default();
        config.gateway.bind_address = "not a host!".to_string();
        assert!(validate_config(&config).is_err());
    }
}
