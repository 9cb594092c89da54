// SPDX-FileCopyrightText: 2026 Docq Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The conversation state machine.
//!
//! Owns the ordered transcript and the single-flight query discipline:
//! `Idle` -> (submit) -> `Awaiting` -> (resolve) -> `Idle`. There is no
//! distinct error phase — a failed query resolves into a normal assistant
//! turn carrying the error text, so the transcript always shows exactly one
//! assistant response per question and the machine returns to `Idle`.
//!
//! The transient "thinking" indicator shown while `Awaiting` is presentation
//! state, not a transcript entry; transcript length reflects real turns only.

use chrono::{DateTime, Utc};
use docq_core::{DocqError, PortalConfig, QueryAnswer, Role, SourceCitation};
use tracing::{debug, warn};

/// Whether a query is currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Awaiting,
}

/// Why a submission was not accepted. Both cases are no-ops: nothing is
/// appended and no request should be issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    /// The text was empty after trimming.
    Empty,
    /// A query is already in flight; one at a time.
    Busy,
}

/// Content of a transcript turn. The assistant side is an explicit union so
/// an error-substituted response stays distinguishable from a real answer.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnContent {
    /// A user question, stored as submitted (trimmed).
    Prompt(String),
    /// A generated answer with provenance.
    Answer {
        text: String,
        citations: Vec<SourceCitation>,
        confidence: f32,
    },
    /// Synthetic assistant text, e.g. the portal welcome. Not a backend
    /// interaction.
    Notice(String),
    /// The assistant turn substituted for a failed query; `message` is the
    /// raw error text as received.
    Failure { message: String },
}

impl TurnContent {
    /// Role is derived from content: prompts are the user's, everything else
    /// is the assistant's.
    pub fn role(&self) -> Role {
        match self {
            TurnContent::Prompt(_) => Role::User,
            _ => Role::Assistant,
        }
    }

    /// The text the presentation layer should show for this turn.
    pub fn display_text(&self) -> String {
        match self {
            TurnContent::Prompt(text) | TurnContent::Notice(text) => text.clone(),
            TurnContent::Answer { text, .. } => text.clone(),
            TurnContent::Failure { message } => {
                format!("Sorry, I couldn't answer that: {message}")
            }
        }
    }
}

/// One exchange unit in the transcript. Turns are append-only and never
/// reordered or merged.
#[derive(Debug, Clone)]
pub struct ConversationTurn {
    pub id: String,
    pub content: TurnContent,
    pub created_at: DateTime<Utc>,
}

impl ConversationTurn {
    fn new(content: TurnContent) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content,
            created_at: Utc::now(),
        }
    }

    pub fn role(&self) -> Role {
        self.content.role()
    }
}

/// Append-only transcript with single-flight query discipline.
#[derive(Debug, Default)]
pub struct Conversation {
    turns: Vec<ConversationTurn>,
    awaiting: bool,
    greeted: bool,
}

impl Conversation {
    /// Starts `Idle` with an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.awaiting { Phase::Awaiting } else { Phase::Idle }
    }

    pub fn is_awaiting(&self) -> bool {
        self.awaiting
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Appends the portal-personalized welcome turn, at most once per
    /// conversation. Returns `false` if the welcome was already shown.
    pub fn greet(&mut self, config: &PortalConfig) -> bool {
        if self.greeted {
            return false;
        }
        self.greeted = true;

        let text = match config.description.as_deref() {
            Some(desc) if !desc.trim().is_empty() => format!(
                "Hi! I'm the {} assistant. {} Ask me anything about the uploaded documents.",
                config.name, desc
            ),
            _ => format!(
                "Hi! I'm the {} assistant. Ask me anything about the uploaded documents.",
                config.name
            ),
        };
        self.turns.push(ConversationTurn::new(TurnContent::Notice(text)));
        true
    }

    /// Accepts a question for submission while `Idle`.
    ///
    /// On acceptance the user turn is appended immediately (optimistic, never
    /// rolled back), the machine moves to `Awaiting`, and the trimmed text to
    /// send is returned. While `Awaiting`, or for empty-after-trim input,
    /// this is a no-op and the rejection reason is returned.
    pub fn submit(&mut self, text: &str) -> Result<String, SubmitRejection> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SubmitRejection::Empty);
        }
        if self.awaiting {
            debug!("submission ignored: query already in flight");
            return Err(SubmitRejection::Busy);
        }

        self.turns
            .push(ConversationTurn::new(TurnContent::Prompt(trimmed.to_string())));
        self.awaiting = true;
        Ok(trimmed.to_string())
    }

    /// Resolves the in-flight query, appending exactly one assistant turn —
    /// an answer on success, an error-substituted turn on failure — and
    /// returning the machine to `Idle`.
    ///
    /// Returns `None` (and appends nothing) if no query was in flight.
    pub fn resolve(
        &mut self,
        outcome: Result<QueryAnswer, DocqError>,
    ) -> Option<&ConversationTurn> {
        if !self.awaiting {
            warn!("resolve called with no query in flight; ignoring");
            return None;
        }
        self.awaiting = false;

        let content = match outcome {
            Ok(answer) => TurnContent::Answer {
                text: answer.text,
                citations: answer.sources,
                confidence: answer.confidence,
            },
            Err(e) => TurnContent::Failure {
                message: e.to_string(),
            },
        };
        self.turns.push(ConversationTurn::new(content));
        self.turns.last()
    }
}
