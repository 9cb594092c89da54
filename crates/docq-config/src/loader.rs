// SPDX-FileCopyrightText: 2026 Docq Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./docq.toml` > `~/.config/docq/docq.toml` >
//! `/etc/docq/docq.toml`, with environment variable overrides via the `DOCQ_`
//! prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::DocqConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/docq/docq.toml` (system-wide)
/// 3. `~/.config/docq/docq.toml` (user XDG config)
/// 4. `./docq.toml` (local directory)
/// 5. `DOCQ_*` environment variables
pub fn load_config() -> Result<DocqConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<DocqConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(DocqConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<DocqConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(DocqConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for config loading (exposed for diagnostic use).
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(DocqConfig::default()))
        .merge(Toml::file("/etc/docq/docq.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("docq/docq.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("docq.toml"))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so underscore-containing
/// key names stay unambiguous: `DOCQ_BACKEND_BASE_URL` must map to
/// `backend.base_url`, not `backend.base.url`.
fn env_provider() -> Env {
    Env::prefixed("DOCQ_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("app_", "app.", 1)
            .replacen("backend_", "backend.", 1)
            .replacen("chat_", "chat.", 1);
        mapped.into()
    })
}
