//! LlmProvider trait definition.
//!
//! The lowest-level abstraction over a language-model backend: send a
//! completion request, get back text or an error. Uses native async fn in
//! traits (RPITIT, Rust 2024 edition). Implementations live in
//! stakesim-infra (e.g., `OpenAiCompatibleProvider`).

use stakesim_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for LLM provider backends.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai_compatible").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
