// SPDX-FileCopyrightText: 2026 Docq Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local view-state for the document listing.
//!
//! The backend owns the truth; this panel mirrors the last listing it was
//! given and layers two pieces of purely local state on top:
//!
//! - a per-identifier in-flight delete set, so only the affected row's delete
//!   control is disabled while others stay active, and two concurrent deletes
//!   of the *same* document are prevented;
//! - a two-phase optimistic delete: `begin_delete` marks the row in flight,
//!   `commit_delete` removes it locally without a re-fetch, `rollback_delete`
//!   keeps it and records the error.
//!
//! A failed refresh degrades to an empty listing plus a separate error flag,
//! so callers can distinguish "no documents" from "listing failed".

use std::collections::HashSet;

use docq_core::Document;
use tracing::debug;

/// Mirror of the backend document listing plus local delete state.
#[derive(Debug, Default)]
pub struct DocumentPanel {
    documents: Vec<Document>,
    deleting: HashSet<String>,
    last_error: Option<String>,
}

impl DocumentPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents in backend order; the panel never re-sorts.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Error from the most recent failed refresh or delete, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// True while a delete for `id` is in flight; the row's delete control
    /// should be disabled.
    pub fn is_deleting(&self, id: &str) -> bool {
        self.deleting.contains(id)
    }

    /// Replaces the listing with a fresh backend result and clears any
    /// previous error.
    pub fn refresh(&mut self, documents: Vec<Document>) {
        debug!(count = documents.len(), "document listing refreshed");
        self.documents = documents;
        self.last_error = None;
    }

    /// Records a failed refresh: empty listing, error flag set.
    pub fn refresh_failed(&mut self, message: String) {
        self.documents.clear();
        self.last_error = Some(message);
    }

    /// Marks a delete as in flight. Returns `false` — and the caller must not
    /// issue a request — if the document is unknown or its delete is already
    /// in flight. Deletes of *different* documents may run concurrently.
    pub fn begin_delete(&mut self, id: &str) -> bool {
        if !self.documents.iter().any(|d| d.id == id) {
            return false;
        }
        self.deleting.insert(id.to_string())
    }

    /// Confirms a successful delete: the row is dropped from the local view
    /// without a re-fetch (keyed by identifier).
    pub fn commit_delete(&mut self, id: &str) {
        self.deleting.remove(id);
        self.documents.retain(|d| d.id != id);
        self.last_error = None;
    }

    /// Rolls back a failed delete: the row stays, the error is recorded.
    pub fn rollback_delete(&mut self, id: &str, message: String) {
        self.deleting.remove(id);
        self.last_error = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use docq_core::{DocumentKind, DocumentStatus, PortalKey};

    fn doc(id: &str) -> Document {
        Document {
            id: id.to_string(),
            filename: format!("{id}.pdf"),
            portal: PortalKey::new("newpeople").unwrap(),
            file_type: DocumentKind::Pdf,
            status: DocumentStatus::Completed,
            uploaded_at: Utc::now(),
            file_size: 1024,
            chunk_count: 3,
            text_length: 5000,
        }
    }

    fn ids(panel: &DocumentPanel) -> Vec<&str> {
        panel.documents().iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn committed_delete_removes_only_that_row_without_refetch() {
        let mut panel = DocumentPanel::new();
        panel.refresh(vec![doc("x"), doc("y")]);

        assert!(panel.begin_delete("x"));
        panel.commit_delete("x");

        assert_eq!(ids(&panel), vec!["y"]);
        assert!(panel.last_error().is_none());
        assert!(!panel.is_deleting("x"));
    }

    #[test]
    fn rolled_back_delete_keeps_listing_and_records_error() {
        let mut panel = DocumentPanel::new();
        panel.refresh(vec![doc("x"), doc("y")]);

        assert!(panel.begin_delete("x"));
        panel.rollback_delete("x", "document not found".into());

        assert_eq!(ids(&panel), vec!["x", "y"]);
        assert_eq!(panel.last_error(), Some("document not found"));
        assert!(!panel.is_deleting("x"));
    }

    #[test]
    fn same_document_cannot_be_deleted_twice_concurrently() {
        let mut panel = DocumentPanel::new();
        panel.refresh(vec![doc("x")]);

        assert!(panel.begin_delete("x"));
        assert!(!panel.begin_delete("x"), "second delete of x must be refused");
        assert!(panel.is_deleting("x"));
    }

    #[test]
    fn different_documents_may_be_deleted_concurrently() {
        let mut panel = DocumentPanel::new();
        panel.refresh(vec![doc("x"), doc("y")]);

        assert!(panel.begin_delete("x"));
        assert!(panel.begin_delete("y"));
        assert!(panel.is_deleting("x"));
        assert!(panel.is_deleting("y"));
    }

    #[test]
    fn unknown_document_delete_is_refused() {
        let mut panel = DocumentPanel::new();
        panel.refresh(vec![doc("x")]);
        assert!(!panel.begin_delete("ghost"));
    }

    #[test]
    fn failed_refresh_is_distinguishable_from_empty_listing() {
        let mut panel = DocumentPanel::new();
        panel.refresh(vec![doc("x")]);

        panel.refresh_failed("backend returned status 502".into());
        assert!(panel.documents().is_empty());
        assert_eq!(panel.last_error(), Some("backend returned status 502"));

        // A later successful refresh clears the flag.
        panel.refresh(vec![]);
        assert!(panel.documents().is_empty());
        assert!(panel.last_error().is_none());
    }
}
