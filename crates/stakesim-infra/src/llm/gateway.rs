//! Gateways binding the core turn traits to an [`LlmProvider`].
//!
//! `StakeholderGateway` turns an assembled conversation context into a
//! stakeholder reply; `SummaryLlmGateway` condenses older messages into
//! summary text. Both are thin: prompt assembly lives in
//! `stakesim-core::agent::prompt`, transport in the provider.

use std::time::Duration;

use tracing::instrument;

use stakesim_core::agent::prompt::{SystemPromptBuilder, transcript, wire_history};
use stakesim_core::llm::gateway::{ModelGateway, SummaryGateway};
use stakesim_core::llm::provider::LlmProvider;
use stakesim_types::llm::{CompletionRequest, LlmError, MessageRole, PromptMessage};
use stakesim_types::message::Message;
use stakesim_types::turn::ConversationContext;

/// System prompt for the summarization call.
///
/// Deliberately opinionated about what survives compaction: requirement
/// discussions and personal details the persona revealed must not be
/// lost, small talk may be.
const SUMMARY_SYSTEM_PROMPT: &str = "You summarize a conversation between a trainee \
business analyst and a project stakeholder. Produce a concise third-person summary that \
preserves: key decisions made, requirements and constraints that were discussed, and \
personal details the stakeholder revealed. Omit greetings and small talk. Respond with \
the summary text only.";

/// Generates stakeholder replies via an OpenAI-compatible provider.
pub struct StakeholderGateway<P: LlmProvider> {
    provider: P,
    model: String,
    max_tokens: u32,
}

impl<P: LlmProvider> StakeholderGateway<P> {
    pub fn new(provider: P, model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            provider,
            model: model.into(),
            max_tokens,
        }
    }
}

impl<P: LlmProvider> ModelGateway for StakeholderGateway<P> {
    #[instrument(
        name = "stakeholder_generate",
        skip(self, user_content, context),
        fields(
            gen_ai.request.model = %self.model,
            history_len = context.history.len(),
        )
    )]
    async fn generate(
        &self,
        user_content: &str,
        context: &ConversationContext,
        timeout: Duration,
    ) -> Result<String, LlmError> {
        let system = SystemPromptBuilder::build(&context.persona, &context.project);
        let mut messages = wire_history(&context.history);

        // The history normally already ends with the triggering user
        // message (it is persisted before the context is assembled).
        // Append it only when it is absent, e.g. when the gateway is
        // driven with a detached context.
        let already_present = matches!(
            messages.last(),
            Some(PromptMessage { role: MessageRole::User, content }) if content == user_content
        );
        if !already_present {
            messages.push(PromptMessage {
                role: MessageRole::User,
                content: user_content.to_string(),
            });
        }

        let request = CompletionRequest {
            model: self.model.clone(),
            messages,
            system: Some(system),
            max_tokens: self.max_tokens,
            temperature: None,
        };

        let response = tokio::time::timeout(timeout, self.provider.complete(&request))
            .await
            .map_err(|_| LlmError::Timeout {
                timeout_ms: timeout.as_millis() as u64,
            })??;

        if response.content.trim().is_empty() {
            return Err(LlmError::EmptyResponse);
        }
        Ok(response.content)
    }
}

/// Summarizes older conversation messages via an LLM.
///
/// Runs at temperature 0.0: summaries feed back into future prompts, so
/// determinism matters more than flair.
pub struct SummaryLlmGateway<P: LlmProvider> {
    provider: P,
    model: String,
    max_tokens: u32,
}

impl<P: LlmProvider> SummaryLlmGateway<P> {
    pub fn new(provider: P, model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            provider,
            model: model.into(),
            max_tokens,
        }
    }
}

impl<P: LlmProvider> SummaryGateway for SummaryLlmGateway<P> {
    #[instrument(
        name = "summarize_history",
        skip(self, older),
        fields(gen_ai.request.model = %self.model, older_len = older.len())
    )]
    async fn summarize(&self, older: &[Message]) -> Result<String, LlmError> {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![PromptMessage {
                role: MessageRole::User,
                content: transcript(older),
            }],
            system: Some(SUMMARY_SYSTEM_PROMPT.to_string()),
            max_tokens: self.max_tokens,
            temperature: Some(0.0),
        };

        let response = self.provider.complete(&request).await?;
        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;
    use uuid::Uuid;

    use stakesim_types::llm::CompletionResponse;
    use stakesim_types::persona::{
        CommunicationRules, ExpertiseLevel, Persona, Personality, PersonalityFocus,
    };
    use stakesim_types::project::Project;
    use stakesim_types::turn::CompactedTurn;

    struct StubProvider {
        reply: String,
        delay: Option<Duration>,
        last_request: Mutex<Option<CompletionRequest>>,
    }

    impl StubProvider {
        fn replying(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                delay: None,
                last_request: Mutex::new(None),
            }
        }
    }

    impl LlmProvider for &StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            *self.last_request.lock().unwrap() = Some(request.clone());
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            Ok(CompletionResponse {
                id: "cmpl-1".to_string(),
                content: self.reply.clone(),
                model: request.model.clone(),
            })
        }
    }

    fn test_context(history: Vec<CompactedTurn>) -> ConversationContext {
        ConversationContext {
            persona: Persona {
                name: "Margaret Okafor".to_string(),
                role: "Owner of a bicycle shop".to_string(),
                location: "Leeds".to_string(),
                background: vec![],
                goals: vec![],
                expertise_level: ExpertiseLevel {
                    business: "high".to_string(),
                    technology: "low".to_string(),
                },
                personality: Personality {
                    tone: vec!["friendly".to_string()],
                    professionalism: "informal".to_string(),
                    focus: PersonalityFocus {
                        can_tangent: true,
                        refocus_easily: true,
                    },
                },
                communication_rules: CommunicationRules { avoid: vec![] },
            },
            project: Project {
                project_name: "Bike Shop Online Store".to_string(),
                business_summary: "Online storefront.".to_string(),
                requirements: vec![],
            },
            history,
        }
    }

    #[tokio::test]
    async fn test_generate_builds_system_prompt_and_history() {
        let provider = StubProvider::replying("Lovely to meet you!");
        let gateway = StakeholderGateway::new(&provider, "llama3.1:8b", 1024);

        let context = test_context(vec![
            CompactedTurn::Verbatim {
                role: MessageRole::Assistant,
                content: "Welcome in!".to_string(),
            },
            CompactedTurn::Verbatim {
                role: MessageRole::User,
                content: "Tell me about your shop.".to_string(),
            },
        ]);

        let reply = gateway
            .generate("Tell me about your shop.", &context, Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(reply, "Lovely to meet you!");

        let request = provider.last_request.lock().unwrap().clone().unwrap();
        let system = request.system.unwrap();
        assert!(system.contains("Margaret Okafor"));
        assert!(system.contains("Bike Shop Online Store"));
        // The triggering message was already the final history turn, so
        // it is not appended a second time.
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[1].content, "Tell me about your shop.");
    }

    #[tokio::test]
    async fn test_generate_appends_user_message_when_absent() {
        let provider = StubProvider::replying("reply");
        let gateway = StakeholderGateway::new(&provider, "llama3.1:8b", 1024);

        let context = test_context(vec![]);
        gateway
            .generate("Hello there", &context, Duration::from_secs(5))
            .await
            .unwrap();

        let request = provider.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, MessageRole::User);
        assert_eq!(request.messages[0].content, "Hello there");
    }

    #[tokio::test]
    async fn test_generate_blank_reply_is_empty_response() {
        let provider = StubProvider::replying("   \n");
        let gateway = StakeholderGateway::new(&provider, "llama3.1:8b", 1024);

        let err = gateway
            .generate("hi", &test_context(vec![]), Duration::from_secs(5))
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::EmptyResponse));
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_times_out() {
        let mut provider = StubProvider::replying("too late");
        provider.delay = Some(Duration::from_secs(120));
        let gateway = StakeholderGateway::new(&provider, "llama3.1:8b", 1024);

        let err = gateway
            .generate("hi", &test_context(vec![]), Duration::from_secs(1))
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Timeout { timeout_ms: 1000 }));
    }

    #[tokio::test]
    async fn test_summarize_sends_transcript_at_zero_temperature() {
        let provider = StubProvider::replying("They discussed stock levels.");
        let gateway = SummaryLlmGateway::new(&provider, "llama3.1:8b", 512);

        let older = vec![Message {
            id: Uuid::now_v7(),
            conversation_id: Uuid::now_v7(),
            user_id: "trainee".to_string(),
            role: MessageRole::User,
            content: "How much stock do you hold?".to_string(),
            created_at: Utc::now(),
        }];

        let summary = gateway.summarize(&older).await.unwrap();
        assert_eq!(summary, "They discussed stock levels.");

        let request = provider.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(request.temperature, Some(0.0));
        assert!(request.messages[0].content.contains("How much stock"));
        assert!(request.system.unwrap().contains("summarize"));
    }
}
