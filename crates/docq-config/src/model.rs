// SPDX-FileCopyrightText: 2026 Docq Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for docq.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a typoed key is rejected
//! at startup with an actionable message instead of being silently ignored.

use serde::{Deserialize, Serialize};

/// Top-level docq configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with `DOCQ_*`
/// environment variable overrides. All sections default to sensible values;
/// only `backend.base_url` usually needs to be set.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DocqConfig {
    /// Application-wide settings.
    #[serde(default)]
    pub app: AppConfig,

    /// Knowledge-base backend settings.
    #[serde(default)]
    pub backend: BackendConfig,

    /// Chat behavior settings.
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Application-wide configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Default portal to use when `--portal` is not given on the command line.
    #[serde(default)]
    pub portal: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            portal: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Backend HTTP settings. The base URL is the single externally-observable
/// piece of configuration the backend contract requires.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BackendConfig {
    /// Base URL of the RAG backend, e.g. `https://api.example.com`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:4000".to_string()
}

/// Chat behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ChatConfig {
    /// Whether to open the session with a portal-personalized welcome turn.
    #[serde(default = "default_welcome")]
    pub welcome: bool,

    /// How long a fetched portal configuration stays fresh, in seconds.
    #[serde(default = "default_portal_config_ttl_secs")]
    pub portal_config_ttl_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            welcome: default_welcome(),
            portal_config_ttl_secs: default_portal_config_ttl_secs(),
        }
    }
}

fn default_welcome() -> bool {
    true
}

fn default_portal_config_ttl_secs() -> u64 {
    900
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = DocqConfig::default();
        assert_eq!(config.app.log_level, "info");
        assert_eq!(config.backend.base_url, "http://localhost:4000");
        assert!(config.chat.welcome);
        assert_eq!(config.chat.portal_config_ttl_secs, 900);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let toml = r#"
[backend]
base_url = "http://localhost:4000"
timeout = 30
"#;
        assert!(toml::from_str::<DocqConfig>(toml).is_err());
    }
}
