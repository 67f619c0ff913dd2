// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Navigator mentor engine.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), XDG file hierarchy lookup, and environment
//! variable overrides.
//!
//! # Usage
//!
//! ```no_run
//! use navigator_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("Agent name: {}", config.agent.name);
//! ```

pub mod loader;
pub mod model;
pub mod validation;

use navigator_core::NavigatorError;

pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{
    AgentConfig, GatewayConfig, MemoryConfig, NavigatorConfig, OpenAiConfig, StorageConfig,
};
pub use validation::{ConfigError, validate_config};

/// Load configuration from the XDG hierarchy and validate it.
///
/// Returns either a valid `NavigatorConfig` or the list of collected errors.
pub fn load_and_validate() -> Result<NavigatorConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(vec![ConfigError::Parse(err)]),
    }
}

/// Load configuration from a TOML string and validate it.
///
/// Useful for testing and explicit configuration.
pub fn load_and_validate_str(toml_content: &str) -> Result<NavigatorConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(vec![ConfigError::Parse(err)]),
    }
}

/// Resolve the persona prompt override from the agent section.
///
/// `persona_file` takes precedence over the inline `persona` string.
/// `Ok(None)` means no override is configured and the built-in persona
/// should be used.
pub fn resolve_persona(agent: &AgentConfig) -> Result<Option<String>, NavigatorError> {
    if let Some(path) = &agent.persona_file {
        let content = std::fs::read_to_string(path).map_err(|e| {
            NavigatorError::Config(format!("failed to read persona_file `{path}`: {e}"))
        })?;
        return Ok(Some(content));
    }
    Ok(agent.persona.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_str_round_trip() {
        let config = load_and_validate_str("[agent]\nname = \"mentor\"\n").unwrap();
        assert_eq!(config.agent.name, "mentor");
    }

    #[test]
    fn invalid_values_surface_all_errors() {
        let errors =
            load_and_validate_str("[memory]\nrecall_limit = 0\nrecall_threshold = 2.0\n")
                .unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn inline_persona_resolves_without_file() {
        let agent = AgentConfig {
            persona: Some("You are a mentor.".to_string()),
            ..AgentConfig::default()
        };
        let persona = resolve_persona(&agent).unwrap();
        assert_eq!(persona.as_deref(), Some("You are a mentor."));
    }

    #[test]
    fn missing_persona_file_is_a_config_error() {
        let agent = AgentConfig {
            persona_file: Some("/nonexistent/persona.md".to_string()),
            ..AgentConfig::default()
        };
        assert!(resolve_persona(&agent).is_err());
    }
}
