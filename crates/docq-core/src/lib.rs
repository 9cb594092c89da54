// SPDX-FileCopyrightText: 2026 Docq Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the docq knowledge-base client.
//!
//! Holds the shared error enum and the data model exchanged between the HTTP
//! client crate and the conversation layer. Everything wire-facing lives here
//! so both sides agree on one set of shapes.

pub mod error;
pub mod types;

pub use error::DocqError;
pub use types::{
    Document, DocumentKind, DocumentStatus, PortalConfig, PortalKey, QueryAnswer, Role,
    SourceCitation, UploadReceipt,
};
