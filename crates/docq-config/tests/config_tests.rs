// SPDX-FileCopyrightText: 2026 Docq Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the docq configuration system.

use docq_config::diagnostic::ConfigError;
use docq_config::loader::load_config_from_path;
use docq_config::{load_and_validate_str, load_config_from_str};
use std::io::Write;

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_docq_config() {
    let toml = r#"
[app]
log_level = "debug"
portal = "newpeople"

[backend]
base_url = "https://rag.example.com"

[chat]
welcome = false
portal_config_ttl_secs = 120
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.app.log_level, "debug");
    assert_eq!(config.app.portal.as_deref(), Some("newpeople"));
    assert_eq!(config.backend.base_url, "https://rag.example.com");
    assert!(!config.chat.welcome);
    assert_eq!(config.chat.portal_config_ttl_secs, 120);
}

/// Empty TOML falls back to compiled defaults.
#[test]
fn empty_toml_uses_defaults() {
    let config = load_config_from_str("").expect("defaults should apply");
    assert_eq!(config.app.log_level, "info");
    assert_eq!(config.backend.base_url, "http://localhost:4000");
    assert!(config.chat.welcome);
}

/// Unknown key produces an UnknownKey diagnostic with a suggestion.
#[test]
fn unknown_key_produces_suggestion() {
    let toml = r#"
[backend]
base_ulr = "https://rag.example.com"
"#;
    let errors = load_and_validate_str(toml).unwrap_err();
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::UnknownKey { key, suggestion, .. }
            if key == "base_ulr" && suggestion.as_deref() == Some("base_url")
    )));
}

/// Wrong value type produces an InvalidType diagnostic.
#[test]
fn wrong_type_produces_invalid_type_error() {
    let toml = r#"
[chat]
portal_config_ttl_secs = "soon"
"#;
    let errors = load_and_validate_str(toml).unwrap_err();
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidType { .. })),
        "expected InvalidType, got: {errors:?}"
    );
}

/// Semantic validation runs after deserialization succeeds.
#[test]
fn validation_rejects_non_http_url() {
    let toml = r#"
[backend]
base_url = "rag.example.com"
"#;
    let errors = load_and_validate_str(toml).unwrap_err();
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::Validation { message } if message.contains("base_url")
    )));
}

/// Loading from an explicit file path works.
#[test]
fn load_from_explicit_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[backend]\nbase_url = \"https://kb.internal:8443\"\n"
    )
    .unwrap();

    let config = load_config_from_path(file.path()).expect("file should load");
    assert_eq!(config.backend.base_url, "https://kb.internal:8443");
    // Untouched sections keep their defaults.
    assert_eq!(config.app.log_level, "info");
}
