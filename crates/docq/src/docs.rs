// SPDX-FileCopyrightText: 2026 Docq Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `docq docs` subcommands: list, upload, delete.
//!
//! All three are single-shot backend calls with no retry. Deletion asks for
//! explicit confirmation, then removes the row from the local view on success
//! without a re-fetch; uploads are validated locally (type, size) before any
//! request and are followed by exactly one listing refresh.

use std::io::Write;
use std::path::Path;

use colored::Colorize;
use docq_client::RagClient;
use docq_config::DocqConfig;
use docq_conversation::DocumentPanel;
use docq_core::{DocqError, PortalKey};
use tracing::{info, warn};

use crate::render;

/// `docq docs list`
pub async fn run_list(config: &DocqConfig, portal: PortalKey) -> Result<(), DocqError> {
    let client = RagClient::new(&config.backend.base_url)?;
    let mut panel = DocumentPanel::new();
    refresh_panel(&client, &portal, &mut panel).await;
    print_panel(&panel, &portal);
    Ok(())
}

/// `docq docs upload <file>`
pub async fn run_upload(
    config: &DocqConfig,
    portal: PortalKey,
    file: &Path,
) -> Result<(), DocqError> {
    let client = RagClient::new(&config.backend.base_url)?;

    let filename = file
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| DocqError::Validation(format!("not a file path: {}", file.display())))?
        .to_string();
    let bytes = tokio::fs::read(file).await.map_err(|e| {
        DocqError::Validation(format!("cannot read {}: {e}", file.display()))
    })?;

    let receipt = client.upload_document(&filename, bytes, &portal).await?;
    info!(filename = %filename, chunks = receipt.chunk_count, portal = %portal, "document ingested");
    println!(
        "{} {} ingested into {} ({} chunks)",
        "ok:".green().bold(),
        filename,
        portal.to_string().cyan(),
        receipt.chunk_count
    );

    // One listing refresh after upload, so the new document shows up.
    let mut panel = DocumentPanel::new();
    refresh_panel(&client, &portal, &mut panel).await;
    print_panel(&panel, &portal);
    Ok(())
}

/// `docq docs delete <id>`
pub async fn run_delete(
    config: &DocqConfig,
    portal: PortalKey,
    document_id: &str,
) -> Result<(), DocqError> {
    let client = RagClient::new(&config.backend.base_url)?;

    let mut panel = DocumentPanel::new();
    panel.refresh(client.list_documents(&portal).await?);

    let Some(doc) = panel.documents().iter().find(|d| d.id == document_id) else {
        return Err(DocqError::Validation(format!(
            "no document with id `{document_id}` in portal `{portal}`"
        )));
    };

    if !confirm(&format!(
        "Delete {} ({}, {})?",
        doc.filename,
        doc.file_type,
        render::format_bytes(doc.file_size)
    )) {
        println!("{}", "aborted".dimmed());
        return Ok(());
    }

    if !panel.begin_delete(document_id) {
        return Err(DocqError::Internal(format!(
            "delete already in flight for `{document_id}`"
        )));
    }

    match client.delete_document(document_id).await {
        Ok(()) => {
            // Optimistic removal keyed by identifier; no re-fetch.
            panel.commit_delete(document_id);
            println!("{} document {document_id} deleted", "ok:".green().bold());
        }
        Err(e) => {
            panel.rollback_delete(document_id, e.to_string());
            eprintln!("{}: {e}", "error".red());
        }
    }

    print_panel(&panel, &portal);
    Ok(())
}

/// Prompts for an explicit y/N acknowledgement on stdin.
fn confirm(question: &str) -> bool {
    print!("{question} [y/N] ");
    if std::io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if std::io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Fetches the listing into the panel, degrading a failure to an empty
/// listing plus the panel's error flag.
async fn refresh_panel(client: &RagClient, portal: &PortalKey, panel: &mut DocumentPanel) {
    match client.list_documents(portal).await {
        Ok(documents) => panel.refresh(documents),
        Err(e) => {
            warn!(portal = %portal, error = %e, "document listing failed");
            panel.refresh_failed(e.to_string());
        }
    }
}

/// Renders the panel as a table, in backend order.
fn print_panel(panel: &DocumentPanel, portal: &PortalKey) {
    if let Some(error) = panel.last_error() {
        eprintln!("{}: {error}", "error".red());
    }
    if panel.documents().is_empty() {
        println!("{}", format!("no documents in portal `{portal}`").dimmed());
        return;
    }

    println!(
        "{}",
        format!(
            "{:<36}  {:<28}  {:<9}  {:<10}  {:>9}  {:>6}",
            "ID", "FILENAME", "TYPE", "STATUS", "SIZE", "CHUNKS"
        )
        .bold()
    );
    for doc in panel.documents() {
        println!(
            "{:<36}  {:<28}  {:<9}  {}  {:>9}  {:>6}",
            doc.id,
            doc.filename,
            doc.file_type.to_string(),
            status_cell(doc.status),
            render::format_bytes(doc.file_size),
            doc.chunk_count
        );
    }
}

/// Colored STATUS cell. Padding happens on the plain text first; padding the
/// colored string would count the escape bytes and shift the columns after it.
fn status_cell(status: docq_core::DocumentStatus) -> colored::ColoredString {
    let padded = format!("{:<10}", status.to_string());
    match status {
        docq_core::DocumentStatus::Completed => padded.green(),
        docq_core::DocumentStatus::Processing => padded.yellow(),
        docq_core::DocumentStatus::Failed => padded.red(),
    }
}
