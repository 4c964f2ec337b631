//! Turn-level gateway traits.
//!
//! The orchestrator and compactor depend on these two capabilities, not
//! on a raw provider: generating a stakeholder reply from an assembled
//! context, and summarizing a run of older messages. The infra layer
//! implements both on top of [`super::provider::LlmProvider`], which lets
//! tests drive the core with deterministic stubs.

use std::time::Duration;

use stakesim_types::llm::LlmError;
use stakesim_types::message::Message;
use stakesim_types::turn::ConversationContext;

/// Opaque generation capability: structured context in, reply text out.
///
/// Implementations must bound the call by `timeout` and report a timeout
/// as an error; empty output is also an error, never an empty `Ok`.
pub trait ModelGateway: Send + Sync {
    fn generate(
        &self,
        user_content: &str,
        context: &ConversationContext,
        timeout: Duration,
    ) -> impl std::future::Future<Output = Result<String, LlmError>> + Send;
}

/// Summarization capability over a contiguous run of older messages.
///
/// Only invoked by the compactor, and only when the history exceeds the
/// recent window. Returned text is used verbatim as the summary turn;
/// whether it is usable (non-blank) is judged by the compactor.
pub trait SummaryGateway: Send + Sync {
    fn summarize(
        &self,
        older: &[Message],
    ) -> impl std::future::Future<Output = Result<String, LlmError>> + Send;
}
