// SPDX-FileCopyrightText: 2026 Docq Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `docq chat` command implementation.
//!
//! Launches an interactive REPL against one portal's knowledge base. The
//! conversation state machine owns the transcript and the single-flight
//! discipline; this module only reads lines, drives the HTTP client, and
//! renders turns. While a query is in flight a spinner is shown — it is
//! presentation state, never a transcript entry.

use chrono::{Duration, Utc};
use colored::Colorize;
use docq_client::RagClient;
use docq_config::DocqConfig;
use docq_conversation::{Conversation, SubmitRejection, TtlCache, TurnContent};
use docq_core::{DocqError, PortalConfig, PortalKey};
use indicatif::{ProgressBar, ProgressStyle};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{info, warn};

use crate::render;

/// Per-session portal state: the key plus the cached portal configuration.
/// The config is fetched lazily and held for `ttl`; "now" is passed in by
/// the caller so the cache itself stays clock-free.
pub struct PortalSession {
    portal: PortalKey,
    ttl: Duration,
    cached: Option<TtlCache<PortalConfig>>,
}

impl PortalSession {
    pub fn new(portal: PortalKey, ttl: Duration) -> Self {
        Self {
            portal,
            ttl,
            cached: None,
        }
    }

    pub fn portal(&self) -> &PortalKey {
        &self.portal
    }

    /// Returns the portal configuration, fetching it only when the cached
    /// copy is missing or expired at `now`.
    pub async fn config(
        &mut self,
        client: &RagClient,
        now: chrono::DateTime<Utc>,
    ) -> Result<PortalConfig, DocqError> {
        if let Some(config) = self.cached.as_ref().and_then(|c| c.get(now)) {
            return Ok(config.clone());
        }
        let config = client.portal_config(&self.portal).await?;
        self.cached = Some(TtlCache::new(config.clone(), now, self.ttl));
        Ok(config)
    }
}

/// Runs the `docq chat` interactive REPL.
pub async fn run_chat(config: &DocqConfig, portal: PortalKey) -> Result<(), DocqError> {
    let client = RagClient::new(&config.backend.base_url)?;
    let mut convo = Conversation::new();
    let mut session = PortalSession::new(
        portal.clone(),
        Duration::seconds(config.chat.portal_config_ttl_secs as i64),
    );

    // Welcome turn from the portal configuration, once. An unreachable
    // config is not fatal -- the chat just starts without a greeting.
    if config.chat.welcome {
        match session.config(&client, Utc::now()).await {
            Ok(portal_config) => {
                if convo.greet(&portal_config)
                    && let Some(turn) = convo.turns().last()
                {
                    print_turn(&turn.content);
                }
            }
            Err(e) => {
                warn!(error = %e, portal = %portal, "portal config unavailable, skipping welcome");
            }
        }
    }

    let mut rl = DefaultEditor::new()
        .map_err(|e| DocqError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", "docq chat".bold().green());
    println!(
        "Portal {} -- type {} to exit, {} for portal info.\n",
        portal.to_string().cyan(),
        "/quit".yellow(),
        "/portal".yellow()
    );

    let prompt = format!("{}> ", portal.to_string().green());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "/quit" || trimmed == "/exit" {
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                if trimmed == "/portal" {
                    match session.config(&client, Utc::now()).await {
                        Ok(pc) => {
                            println!("{}", pc.name.bold());
                            if let Some(desc) = pc.description.as_deref() {
                                println!("{desc}");
                            }
                        }
                        Err(e) => eprintln!("{}: {e}", "error".red()),
                    }
                    continue;
                }

                match convo.submit(trimmed) {
                    Ok(question) => {
                        let spinner = thinking_spinner();
                        let outcome = client.query(&question, &portal).await;
                        spinner.finish_and_clear();

                        if let Some(turn) = convo.resolve(outcome) {
                            print_turn(&turn.content);
                        }
                    }
                    Err(SubmitRejection::Empty) => continue,
                    Err(SubmitRejection::Busy) => {
                        // The REPL is sequential, so this arm exists only to
                        // honor the machine's contract.
                        eprintln!("{}", "a question is already in flight".yellow());
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                break;
            }
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    info!(turns = convo.len(), "chat session ended");
    println!("{}", "goodbye".dimmed());
    Ok(())
}

/// Transient "thinking" indicator shown while a query is in flight.
fn thinking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("thinking...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(120));
    spinner
}

/// Renders one assistant-side turn: answer text, citation badges, and the
/// confidence badge; error turns render in red with the backend's wording.
fn print_turn(content: &TurnContent) {
    match content {
        TurnContent::Answer {
            text,
            citations,
            confidence,
        } => {
            println!("{text}");
            for citation in citations {
                println!(
                    "  {} {} {}",
                    format!("[{}]", citation.chunk_index).dimmed(),
                    render::citation_badge(citation.similarity).cyan(),
                    render::excerpt(&citation.content, 80).dimmed()
                );
            }
            println!("  {}", format!("confidence: {}", render::percent(*confidence)).dimmed());
        }
        TurnContent::Failure { .. } => {
            println!("{}", content.display_text().red());
        }
        TurnContent::Notice(text) => {
            println!("{}", text.dimmed());
        }
        TurnContent::Prompt(text) => {
            // User turns are normally echoed by the readline itself; kept for
            // completeness when replaying a transcript.
            println!("{}", text.bold());
        }
    }
    println!();
}
