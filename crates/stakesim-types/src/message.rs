//! Conversation message type for Stakesim.
//!
//! One `Message` is one persisted conversational turn side: either the
//! user's inbound text or the stakeholder agent's reply. Messages form an
//! append-only log per conversation; content and role are immutable once
//! persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export MessageRole from the llm module (used in both persisted and
// wire contexts).
pub use crate::llm::MessageRole;

/// A persisted conversational turn side.
///
/// Within a conversation, messages are totally ordered by `created_at`;
/// ties are broken by `id`, which is a time-sortable UUIDv7 assigned at
/// insertion. Persisted messages only carry the `User` or `Assistant`
/// role and non-empty content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub conversation_id: Uuid,
    /// Owner of the conversation; history loads are scoped by this.
    pub user_id: String,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
