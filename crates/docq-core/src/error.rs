// SPDX-FileCopyrightText: 2026 Docq Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types shared across the docq workspace.

use thiserror::Error;

/// The primary error type used by the docq client crates.
#[derive(Debug, Error)]
pub enum DocqError {
    /// Configuration errors (invalid TOML, missing required fields).
    #[error("configuration error: {0}")]
    Config(String),

    /// Client-side policy rejections (bad file type, oversize upload,
    /// empty question). Raised before any network request is issued.
    #[error("{0}")]
    Validation(String),

    /// The backend answered with a non-2xx status. `message` carries the
    /// backend's own error text verbatim, so it can be shown to the user
    /// exactly as received.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never produced an HTTP response (connection refused,
    /// DNS failure, malformed body).
    #[error("transport error: {message}")]
    Transport {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl DocqError {
    /// True if the error was raised locally, before any request went out.
    pub fn is_validation(&self) -> bool {
        matches!(self, DocqError::Validation(_))
    }
}
