//! MessageRepository trait definition.
//!
//! The message store is an append-only ordered log per conversation.
//! Implementations live in stakesim-infra (e.g., `SqliteMessageRepository`).
//! Uses native async fn in traits (RPITIT, Rust 2024 edition).

use stakesim_types::error::RepositoryError;
use stakesim_types::llm::MessageRole;
use stakesim_types::message::Message;
use uuid::Uuid;

/// Durable, ordered message log.
///
/// Append-only from the core's perspective: no update or delete
/// operations exist. `role` must be `User` or `Assistant` and `content`
/// must be non-empty; implementations reject anything else with
/// `RepositoryError::WriteRejected`.
pub trait MessageRepository: Send + Sync {
    /// Append one message to a conversation and return it as persisted
    /// (with its assigned id and timestamp).
    fn append(
        &self,
        conversation_id: Uuid,
        user_id: &str,
        role: MessageRole,
        content: &str,
    ) -> impl std::future::Future<Output = Result<Message, RepositoryError>> + Send;

    /// Load the full history for a conversation, ordered oldest to
    /// newest (created_at ascending, id as tiebreaker).
    fn list_ordered(
        &self,
        conversation_id: Uuid,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Message>, RepositoryError>> + Send;
}
