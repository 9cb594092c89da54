// SPDX-FileCopyrightText: 2026 Docq Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation and view state for docq.
//!
//! Pure state machines, no IO: the chat transcript with its single-flight
//! query discipline, the optimistic document-listing panel, and a small TTL
//! cache for the portal configuration. The binary crate wires these to the
//! HTTP client and renders them.

pub mod cache;
pub mod conversation;
pub mod documents_view;

pub use cache::TtlCache;
pub use conversation::{Conversation, ConversationTurn, Phase, SubmitRejection, TurnContent};
pub use documents_view::DocumentPanel;
