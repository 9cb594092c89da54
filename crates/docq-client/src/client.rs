// SPDX-FileCopyrightText: 2026 Docq Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client core for the RAG backend.
//!
//! Provides [`RagClient`], which owns the reqwest connection pool and the
//! shared response/error decoding used by the document and query endpoints.
//! Every operation is a single request with no retry and no client-side
//! timeout; a failed call is reported once to the caller.

use docq_core::DocqError;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Standard success envelope: every 2xx body is `{ "data": ... }`.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiEnvelope<T> {
    pub data: T,
}

/// Standard error body: every non-2xx response carries `{ "message": ... }`.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// HTTP client for the RAG backend API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct RagClient {
    pub(crate) client: reqwest::Client,
    base_url: String,
}

impl RagClient {
    /// Creates a client for the backend at `base_url`
    /// (e.g. `https://api.example.com`, no trailing slash required).
    pub fn new(base_url: impl Into<String>) -> Result<Self, DocqError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| DocqError::Transport {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { client, base_url })
    }

    /// Builds a full URL from an API path such as `/api/rag/documents/upload`.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Decodes a response: on 2xx, unwraps the `{ data }` envelope; otherwise
    /// surfaces the backend's `{ message }` verbatim as [`DocqError::Api`].
    pub(crate) async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, DocqError> {
        let status = response.status();
        debug!(status = %status, "backend response received");

        if status.is_success() {
            let body = response.text().await.map_err(|e| DocqError::Transport {
                message: format!("failed to read response body: {e}"),
                source: Some(Box::new(e)),
            })?;
            let envelope: ApiEnvelope<T> =
                serde_json::from_str(&body).map_err(|e| DocqError::Transport {
                    message: format!("failed to parse backend response: {e}"),
                    source: Some(Box::new(e)),
                })?;
            return Ok(envelope.data);
        }

        Err(Self::decode_error(response).await)
    }

    /// Decodes a non-2xx response into [`DocqError::Api`].
    pub(crate) async fn decode_error(response: reqwest::Response) -> DocqError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(err) => err.message,
            Err(_) if body.is_empty() => format!("backend returned status {status}"),
            Err(_) => body,
        };
        DocqError::Api { status, message }
    }

    /// Wraps a reqwest send error as a transport failure.
    pub(crate) fn transport(e: reqwest::Error) -> DocqError {
        DocqError::Transport {
            message: format!("HTTP request failed: {e}"),
            source: Some(Box::new(e)),
        }
    }
}
