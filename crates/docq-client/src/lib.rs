// SPDX-FileCopyrightText: 2026 Docq Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the docq RAG backend API.
//!
//! [`RagClient`] covers the five backend operations: list/upload/delete
//! documents, free-text query, and portal-config fetch. All operations are
//! single-shot — no retries, no queuing, no cancellation. Error responses
//! (`{ "message": ... }` with a non-2xx status) are surfaced verbatim so the
//! presentation layer can show the backend's own wording.

pub mod client;
pub mod documents;
pub mod queries;

pub use client::RagClient;
pub use documents::{ACCEPTED_EXTENSIONS, MAX_UPLOAD_BYTES, validate_upload};
