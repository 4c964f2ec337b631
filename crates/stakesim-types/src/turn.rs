//! Turn-scoped types: compacted history, conversation context, and the
//! terminal outcome of one orchestrated turn.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::llm::MessageRole;
use crate::message::Message;
use crate::persona::Persona;
use crate::project::Project;

/// One entry of a compacted history: either a verbatim reproduction of a
/// stored message, or a synthetic summary standing in for a contiguous run
/// of older messages.
///
/// A `Summary` maps to an assistant-role turn on the wire, carries no
/// message identifier, and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CompactedTurn {
    Verbatim { role: MessageRole, content: String },
    Summary { content: String },
}

impl CompactedTurn {
    /// Copy a stored message into a verbatim turn.
    pub fn verbatim(message: &Message) -> Self {
        CompactedTurn::Verbatim {
            role: message.role,
            content: message.content.clone(),
        }
    }

    /// The role this turn takes on the wire. Summaries speak as the
    /// assistant recapping its own earlier conversation.
    pub fn wire_role(&self) -> MessageRole {
        match self {
            CompactedTurn::Verbatim { role, .. } => *role,
            CompactedTurn::Summary { .. } => MessageRole::Assistant,
        }
    }
}

/// Ephemeral, turn-scoped bundle of everything the model needs.
///
/// Persona and project are required; a turn cannot proceed to model
/// invocation without both. History may legitimately be empty (new
/// conversation). Constructed fresh per turn and discarded afterwards.
#[derive(Debug, Clone)]
pub struct ConversationContext {
    pub persona: Persona,
    pub project: Project,
    pub history: Vec<CompactedTurn>,
}

/// Stable tag identifying which step of the turn pipeline failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Store unavailable or write rejected.
    Persistence,
    /// Persona/project source missing or malformed, or history load failed.
    ContextLoad,
    /// Summarization failed or returned unusable output.
    Compaction,
    /// Generation failed, timed out, or returned empty content.
    Model,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Persistence => write!(f, "persistence"),
            FailureKind::ContextLoad => write!(f, "context_load"),
            FailureKind::Compaction => write!(f, "compaction"),
            FailureKind::Model => write!(f, "model"),
        }
    }
}

/// Result of one orchestration pass. Never partially successful: if the
/// reply cannot be generated or persisted, the outcome is `Failure` even
/// when the user's message was already durably stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TurnOutcome {
    Success {
        reply: String,
    },
    Failure {
        kind: FailureKind,
        /// Advisory diagnostic text; not stable across versions.
        detail: String,
    },
}

impl TurnOutcome {
    pub fn failure(kind: FailureKind, detail: impl Into<String>) -> Self {
        TurnOutcome::Failure {
            kind,
            detail: detail.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TurnOutcome::Success { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_verbatim_preserves_role_and_content() {
        let msg = Message {
            id: Uuid::now_v7(),
            conversation_id: Uuid::now_v7(),
            user_id: "u".to_string(),
            role: MessageRole::User,
            content: "Hello".to_string(),
            created_at: Utc::now(),
        };

        let turn = CompactedTurn::verbatim(&msg);
        assert_eq!(
            turn,
            CompactedTurn::Verbatim {
                role: MessageRole::User,
                content: "Hello".to_string(),
            }
        );
        assert_eq!(turn.wire_role(), MessageRole::User);
    }

    #[test]
    fn test_summary_speaks_as_assistant() {
        let turn = CompactedTurn::Summary {
            content: "Earlier the user asked about stock levels.".to_string(),
        };
        assert_eq!(turn.wire_role(), MessageRole::Assistant);
    }

    #[test]
    fn test_compacted_turn_serde_tags() {
        let turn = CompactedTurn::Summary {
            content: "recap".to_string(),
        };
        let json = serde_json::to_string(&turn).unwrap();
        assert!(json.contains(r#""kind":"summary""#));

        let parsed: CompactedTurn = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, turn);
    }

    #[test]
    fn test_failure_kind_display() {
        assert_eq!(FailureKind::Persistence.to_string(), "persistence");
        assert_eq!(FailureKind::ContextLoad.to_string(), "context_load");
        assert_eq!(FailureKind::Compaction.to_string(), "compaction");
        assert_eq!(FailureKind::Model.to_string(), "model");
    }

    #[test]
    fn test_turn_outcome_serde() {
        let outcome = TurnOutcome::failure(FailureKind::Model, "timed out");
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains(r#""status":"failure""#));
        assert!(json.contains(r#""kind":"model""#));

        let ok = TurnOutcome::Success {
            reply: "We have road and gravel bikes.".to_string(),
        };
        assert!(ok.is_success());
        assert!(!outcome.is_success());
    }
}
