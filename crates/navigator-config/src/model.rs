// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Navigator mentor engine.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup.

use serde::{Deserialize, Serialize};

/// Top-level Navigator configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NavigatorConfig {
    /// Agent identity and behavior settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// OpenAI API settings.
    #[serde(default)]
    pub openai: OpenAiConfig,

    /// Memory recall settings.
    #[serde(default)]
    pub memory: MemoryConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// HTTP gateway settings.
    #[serde(default)]
    pub gateway: GatewayConfig,
}

/// Agent identity and behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the agent.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Inline persona prompt string. Overridden by `persona_file` if both set.
    #[serde(default)]
    pub persona: Option<String>,

    /// Path to a markdown file containing the persona prompt.
    /// Takes precedence over `persona` if both are set.
    #[serde(default)]
    pub persona_file: Option<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
            persona: None,
            persona_file: None,
        }
    }
}

fn default_agent_name() -> String {
    "navigator".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// OpenAI API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OpenAiConfig {
    /// OpenAI API key. `None` requires the environment variable override.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Chat model used for both completion phases.
    #[serde(default = "default_model")]
    pub model: String,

    /// Model used for embedding generation.
    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,

    /// API base URL. Overridable for proxies and tests.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds. Applies to each external HTTP call.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            embedding_model: default_embedding_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_embedding_model() -> String {
    "text-embedding-3-small".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

/// Memory recall configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MemoryConfig {
    /// Minimum cosine similarity for a fragment to be recalled.
    #[serde(default = "default_recall_threshold")]
    pub recall_threshold: f32,

    /// Maximum number of fragments returned per recall.
    #[serde(default = "default_recall_limit")]
    pub recall_limit: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            recall_threshold: default_recall_threshold(),
            recall_limit: default_recall_limit(),
        }
    }
}

fn default_recall_threshold() -> f32 {
    0.2
}

fn default_recall_limit() -> usize {
    8
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

fn default_database_path() -> String {
    "navigator.db".to_string()
}

/// HTTP gateway configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Address the gateway binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Port the gateway listens on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8321
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = NavigatorConfig::default();
        assert_eq!(config.agent.name, "navigator");
        assert_eq!(config.agent.log_level, "info");
        assert_eq!(config.openai.model, "gpt-4o-mini");
        assert_eq!(config.openai.embedding_model, "text-embedding-3-small");
        assert_eq!(config.openai.timeout_secs, 60);
        assert!((config.memory.recall_threshold - 0.2).abs() < f32::EPSILON);
        assert_eq!(config.memory.recall_limit, 8);
        assert_eq!(config.gateway.port, 8321);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<NavigatorConfig, _> =
            toml::from_str("[agent]\nnam = \"typo\"\n");
        assert!(result.is_err());
    }
}
