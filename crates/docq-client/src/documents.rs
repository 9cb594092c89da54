// SPDX-FileCopyrightText: 2026 Docq Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document store endpoints: list, upload, delete.
//!
//! Upload policy (extension allowlist, size cap) is enforced here, before any
//! request is built — a rejected file never touches the network. The backend
//! remains the sole source of truth for everything else: listings are returned
//! in backend order and ingestion status is never mutated client-side.

use docq_core::{Document, DocumentKind, DocqError, PortalKey, UploadReceipt};
use reqwest::multipart::{Form, Part};
use tracing::{debug, info};

use crate::client::RagClient;

/// Maximum accepted upload size: 10 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Accepted upload extensions, matched case-insensitively.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "docx", "md", "txt"];

/// Checks a candidate upload against the client-side policy.
///
/// Returns the resolved [`DocumentKind`] on success, or
/// [`DocqError::Validation`] (no request issued) on a bad extension or an
/// oversize file.
pub fn validate_upload(filename: &str, size_bytes: u64) -> Result<DocumentKind, DocqError> {
    let ext = std::path::Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    let kind = DocumentKind::from_extension(ext).ok_or_else(|| {
        DocqError::Validation(format!(
            "unsupported file type `.{ext}`; accepted: {}",
            ACCEPTED_EXTENSIONS.join(", ")
        ))
    })?;

    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(DocqError::Validation(format!(
            "file is {size_bytes} bytes; maximum upload size is {MAX_UPLOAD_BYTES} bytes (10 MiB)"
        )));
    }

    Ok(kind)
}

impl RagClient {
    /// Lists the documents ingested under `portal`, in backend order.
    pub async fn list_documents(&self, portal: &PortalKey) -> Result<Vec<Document>, DocqError> {
        let url = self.url(&format!("/api/rag/documents/{portal}"));
        debug!(portal = %portal, "listing documents");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::decode(response).await
    }

    /// Uploads a file into the portal's knowledge base.
    ///
    /// Policy violations are rejected locally via [`validate_upload`] before
    /// any request is made. On success, returns the ingestion receipt; the
    /// caller is responsible for refreshing its listing.
    pub async fn upload_document(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        portal: &PortalKey,
    ) -> Result<UploadReceipt, DocqError> {
        let kind = validate_upload(filename, bytes.len() as u64)?;
        info!(filename, kind = %kind, portal = %portal, size = bytes.len(), "uploading document");

        let form = Form::new()
            .part("document", Part::bytes(bytes).file_name(filename.to_string()))
            .text("portal", portal.to_string());

        let response = self
            .client
            .post(self.url("/api/rag/documents/upload"))
            .multipart(form)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::decode(response).await
    }

    /// Deletes a document from the backend's index by identifier.
    ///
    /// A 2xx response carries no required body and is treated as confirmation;
    /// the caller may then drop the document from its local view without a
    /// re-fetch.
    pub async fn delete_document(&self, document_id: &str) -> Result<(), DocqError> {
        info!(document_id, "deleting document");

        let response = self
            .client
            .delete(self.url(&format!("/api/rag/documents/{document_id}")))
            .send()
            .await
            .map_err(Self::transport)?;

        if response.status().is_success() {
            return Ok(());
        }
        Err(Self::decode_error(response).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn portal() -> PortalKey {
        PortalKey::new("newpeople").unwrap()
    }

    #[test]
    fn validate_upload_accepts_all_listed_extensions() {
        for name in ["a.pdf", "b.DOCX", "c.md", "d.TXT"] {
            assert!(validate_upload(name, 1024).is_ok(), "rejected {name}");
        }
    }

    #[test]
    fn validate_upload_rejects_unknown_extension() {
        let err = validate_upload("virus.exe", 10).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains(".exe"));
    }

    #[test]
    fn validate_upload_rejects_missing_extension() {
        assert!(validate_upload("README", 10).is_err());
    }

    #[test]
    fn validate_upload_enforces_size_cap_boundary() {
        assert!(validate_upload("big.pdf", MAX_UPLOAD_BYTES).is_ok());
        assert!(validate_upload("big.pdf", MAX_UPLOAD_BYTES + 1).is_err());
    }

    #[tokio::test]
    async fn rejected_upload_never_issues_a_request() {
        let server = MockServer::start().await;
        // Any request hitting the server fails the test via expect(0).
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = RagClient::new(server.uri()).unwrap();

        let err = client
            .upload_document("notes.exe", vec![0u8; 16], &portal())
            .await
            .unwrap_err();
        assert!(err.is_validation());

        let oversize = vec![0u8; (MAX_UPLOAD_BYTES + 1) as usize];
        let err = client
            .upload_document("big.pdf", oversize, &portal())
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn list_documents_parses_backend_order() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "data": [
                {
                    "id": "doc-2", "filename": "later.md", "portal": "newpeople",
                    "fileType": "markdown", "status": "processing",
                    "uploadedAt": "2026-03-02T09:00:00Z",
                    "fileSize": 900, "chunkCount": 0
                },
                {
                    "id": "doc-1", "filename": "first.pdf", "portal": "newpeople",
                    "fileType": "pdf", "status": "completed",
                    "uploadedAt": "2026-03-01T09:00:00Z",
                    "fileSize": 2048, "chunkCount": 4, "textLength": 8000
                }
            ]
        });
        Mock::given(method("GET"))
            .and(path("/api/rag/documents/newpeople"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let client = RagClient::new(server.uri()).unwrap();
        let docs = client.list_documents(&portal()).await.unwrap();

        // Backend order is preserved; the client does not re-sort.
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].id, "doc-2");
        assert_eq!(docs[1].id, "doc-1");
        assert_eq!(docs[1].chunk_count, 4);
    }

    #[tokio::test]
    async fn upload_success_returns_chunk_count() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/rag/documents/upload"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"data": {"chunkCount": 5}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = RagClient::new(server.uri()).unwrap();
        let receipt = client
            .upload_document("resume.pdf", vec![0u8; 2 * 1024 * 1024], &portal())
            .await
            .unwrap();
        assert_eq!(receipt.chunk_count, 5);
    }

    #[tokio::test]
    async fn upload_failure_surfaces_backend_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/rag/documents/upload"))
            .respond_with(
                ResponseTemplate::new(422)
                    .set_body_json(serde_json::json!({"message": "document could not be parsed"})),
            )
            .mount(&server)
            .await;

        let client = RagClient::new(server.uri()).unwrap();
        let err = client
            .upload_document("resume.pdf", vec![0u8; 128], &portal())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "document could not be parsed");
    }

    #[tokio::test]
    async fn delete_success_requires_no_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/rag/documents/doc-1"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = RagClient::new(server.uri()).unwrap();
        assert!(client.delete_document("doc-1").await.is_ok());
    }

    #[tokio::test]
    async fn delete_failure_surfaces_backend_message() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/rag/documents/doc-9"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({"message": "document not found"})),
            )
            .mount(&server)
            .await;

        let client = RagClient::new(server.uri()).unwrap();
        let err = client.delete_document("doc-9").await.unwrap_err();
        assert_eq!(err.to_string(), "document not found");
    }
}
