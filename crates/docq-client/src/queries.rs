// SPDX-FileCopyrightText: 2026 Docq Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query endpoints: ask a question, fetch the portal configuration.
//!
//! Exactly one query should be in flight at a time per conversation; that
//! discipline is owned by `docq-conversation`, not here. This module only
//! guarantees that an empty question is rejected before any request is made.

use docq_core::{DocqError, PortalConfig, PortalKey, QueryAnswer};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::RagClient;

/// Request body for `/api/rag/queries/query`.
#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
    portal: &'a str,
}

/// Inner shape of the portal-config envelope: `{ data: { config } }`.
#[derive(Debug, Deserialize)]
struct PortalConfigData {
    config: PortalConfig,
}

impl RagClient {
    /// Sends one free-text question scoped to `portal` and returns the
    /// generated answer with provenance.
    ///
    /// `text` must be non-empty after trimming; violations are rejected
    /// locally with no request issued. No maximum length is enforced
    /// client-side — that is left to the backend.
    pub async fn query(&self, text: &str, portal: &PortalKey) -> Result<QueryAnswer, DocqError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DocqError::Validation("question must not be empty".into()));
        }
        debug!(portal = %portal, chars = trimmed.len(), "sending query");

        let body = QueryRequest {
            query: trimmed,
            portal: portal.as_str(),
        };
        let response = self
            .client
            .post(self.url("/api/rag/queries/query"))
            .json(&body)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::decode(response).await
    }

    /// Fetches the small descriptor used to personalize the chat welcome text.
    pub async fn portal_config(&self, portal: &PortalKey) -> Result<PortalConfig, DocqError> {
        let url = self.url(&format!("/api/rag/queries/portal-config/{portal}"));
        debug!(portal = %portal, "fetching portal config");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(Self::transport)?;
        let data: PortalConfigData = Self::decode(response).await?;
        Ok(data.config)
    }
}
