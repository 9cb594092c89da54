// SPDX-FileCopyrightText: 2026 Docq Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data model shared between the HTTP client and the conversation layer.
//!
//! All wire-facing structs use `camelCase` field names to match the backend's
//! JSON, while the Rust side stays snake_case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::DocqError;

/// Canonical portal key partitioning the knowledge base.
///
/// The backend keys every document and query by portal. Human-readable portal
/// names ("New People") must normalize to exactly one key ("new-people") on
/// every call path, otherwise a document uploaded under one spelling is
/// invisible to queries under another. This type is the single place that
/// normalization happens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortalKey(String);

impl PortalKey {
    /// Normalizes a human-readable portal name into the canonical key:
    /// trimmed, lowercased, internal whitespace runs collapsed to `-`.
    pub fn new(name: &str) -> Result<Self, DocqError> {
        let key = name
            .trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        if key.is_empty() {
            return Err(DocqError::Validation("portal name must not be empty".into()));
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PortalKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Speaker of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// File type of an ingested document, as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Docx,
    Markdown,
    Text,
}

impl DocumentKind {
    /// Maps an upload file extension (case-insensitive) to its kind.
    /// Returns `None` for anything outside the accepted set.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "md" => Some(Self::Markdown),
            "txt" => Some(Self::Text),
            _ => None,
        }
    }
}

/// Ingestion status of a document. Transitions are owned entirely by the
/// backend; the client only ever reads this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Processing,
    Completed,
    Failed,
}

/// One ingested source file, as returned by the document listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub filename: String,
    pub portal: PortalKey,
    pub file_type: DocumentKind,
    pub status: DocumentStatus,
    pub uploaded_at: DateTime<Utc>,
    pub file_size: u64,
    pub chunk_count: u32,
    #[serde(default)]
    pub text_length: u64,
}

/// Evidence excerpt backing an assistant answer. Owned by the answer that
/// cites it; no independent lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceCitation {
    pub chunk_index: u32,
    pub similarity: f32,
    pub content: String,
}

/// A generated answer with provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryAnswer {
    #[serde(rename = "response")]
    pub text: String,
    #[serde(default)]
    pub sources: Vec<SourceCitation>,
    pub confidence: f32,
}

/// Ingestion metadata returned by a successful upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReceipt {
    pub chunk_count: u32,
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default)]
    pub text_length: Option<u64>,
}

/// Small descriptor used to personalize the chat welcome text.
/// Fetched once per portal selection and cached in memory for the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
