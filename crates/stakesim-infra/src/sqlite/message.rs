//! SQLite message repository implementation.
//!
//! Implements `MessageRepository` from `stakesim-core` using sqlx with split
//! read/write pools: raw queries, a private Row struct, reads on the reader
//! pool and writes on the writer pool.

use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

use stakesim_core::repository::message::MessageRepository;
use stakesim_types::error::RepositoryError;
use stakesim_types::llm::MessageRole;
use stakesim_types::message::Message;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `MessageRepository`.
///
/// The message log is append-only: no update or delete paths exist, so a
/// failed turn can never remove a message that an earlier step persisted.
pub struct SqliteMessageRepository {
    pool: DatabasePool,
}

impl SqliteMessageRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain Message.
struct MessageRow {
    id: String,
    conversation_id: String,
    user_id: String,
    role: String,
    content: String,
    created_at: String,
}

impl MessageRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            conversation_id: row.try_get("conversation_id")?,
            user_id: row.try_get("user_id")?,
            role: row.try_get("role")?,
            content: row.try_get("content")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_message(self) -> Result<Message, RepositoryError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| RepositoryError::Query(format!("invalid message id: {e}")))?;
        let conversation_id = Uuid::parse_str(&self.conversation_id)
            .map_err(|e| RepositoryError::Query(format!("invalid conversation_id: {e}")))?;
        let role: MessageRole = self
            .role
            .parse()
            .map_err(|e: String| RepositoryError::Query(e))?;
        let created_at = parse_datetime(&self.created_at)?;

        Ok(Message {
            id,
            conversation_id,
            user_id: self.user_id,
            role,
            content: self.content,
            created_at,
        })
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

impl MessageRepository for SqliteMessageRepository {
    async fn append(
        &self,
        conversation_id: Uuid,
        user_id: &str,
        role: MessageRole,
        content: &str,
    ) -> Result<Message, RepositoryError> {
        if content.is_empty() {
            return Err(RepositoryError::WriteRejected(
                "message content must not be empty".to_string(),
            ));
        }
        if !matches!(role, MessageRole::User | MessageRole::Assistant) {
            return Err(RepositoryError::WriteRejected(format!(
                "role '{role}' is not persistable"
            )));
        }

        let message = Message {
            id: Uuid::now_v7(),
            conversation_id,
            user_id: user_id.to_string(),
            role,
            content: content.to_string(),
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"INSERT INTO messages (id, conversation_id, user_id, role, content, created_at)
               VALUES (?, ?, ?, ?, ?, ?)"#,
        )
        .bind(message.id.to_string())
        .bind(message.conversation_id.to_string())
        .bind(&message.user_id)
        .bind(message.role.to_string())
        .bind(&message.content)
        .bind(message.created_at.to_rfc3339())
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(message)
    }

    async fn list_ordered(
        &self,
        conversation_id: Uuid,
        user_id: &str,
    ) -> Result<Vec<Message>, RepositoryError> {
        // UUIDv7 ids are time-ordered, so the id tiebreak keeps messages
        // sharing a created_at timestamp in insertion order.
        let rows = sqlx::query(
            r#"SELECT * FROM messages
               WHERE conversation_id = ? AND user_id = ?
               ORDER BY created_at ASC, id ASC"#,
        )
        .bind(conversation_id.to_string())
        .bind(user_id)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut messages = Vec::with_capacity(rows.len());
        for row in &rows {
            let msg_row =
                MessageRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            messages.push(msg_row.into_message()?);
        }

        Ok(messages)
    }
}
