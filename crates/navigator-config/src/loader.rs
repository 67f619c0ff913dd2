// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./navigator.toml` > `~/.config/navigator/navigator.toml`
//! > `/etc/navigator/navigator.toml` with environment variable overrides via the
//! `NAVIGATOR_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::NavigatorConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/navigator/navigator.toml` (system-wide)
/// 3. `~/.config/navigator/navigator.toml` (user XDG config)
/// 4. `./navigator.toml` (local directory)
/// 5. `NAVIGATOR_*` environment variables
pub fn load_config() -> Result<NavigatorConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NavigatorConfig::default()))
        .merge(Toml::file("/etc/navigator/navigator.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("navigator/navigator.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("navigator.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<NavigatorConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NavigatorConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<NavigatorConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NavigatorConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names. For example, `NAVIGATOR_OPENAI_API_KEY`
/// must map to `openai.api_key`, not `openai.api.key`.
fn env_provider() -> Env {
    Env::prefixed("NAVIGATOR_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: NAVIGATOR_OPENAI_API_KEY -> "openai_api_key"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("openai_", "openai.", 1)
            .replacen("memory_", "memory.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("gateway_", "gateway.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_overrides_defaults() {
        let config = load_config_from_str(
            r#"
            [openai]
            model = "gpt-4o"
            timeout_secs = 15

            [memory]
            recall_threshold = 0.0
            recall_limit = 6
            "#,
        )
        .unwrap();
        assert_eq!(config.openai.model, "gpt-4o");
        assert_eq!(config.openai.timeout_secs, 15);
        assert_eq!(config.memory.recall_limit, 6);
        // Untouched sections keep their defaults.
        assert_eq!(config.gateway.port, 8321);
    }

    #[test]
    fn env_override_maps_section_keys() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("NAVIGATOR_OPENAI_API_KEY", "sk-test");
            jail.set_env("NAVIGATOR_GATEWAY_PORT", "9000");
            let config: NavigatorConfig = Figment::new()
                .merge(Serialized::defaults(NavigatorConfig::default()))
                .merge(env_provider())
                .extract()?;
            assert_eq!(config.openai.api_key.as_deref(), Some("sk-test"));
            assert_eq!(config.gateway.port, 9000);
            Ok(())
        });
    }

    #[test]
    fn empty_input_yields_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.agent.name, "navigator");
    }
}
