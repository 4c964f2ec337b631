//! Turn orchestrator.
//!
//! `TurnOrchestrator` sequences one conversational turn end-to-end:
//! persist the inbound user message, load persona/project/history,
//! compact the history, invoke the model, persist the reply. Every step
//! is an independent failure point; each failure is caught at its
//! originating step and converted into a terminal `TurnOutcome::Failure`
//! with the step's kind. The orchestrator never retries internally and
//! never rolls back the append-only message log.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use stakesim_types::llm::MessageRole;
use stakesim_types::turn::{ConversationContext, FailureKind, TurnOutcome};

use crate::agent::compactor::HistoryCompactor;
use crate::context::cache::{CachedPersona, CachedProject};
use crate::context::provider::{PersonaProvider, ProjectProvider};
use crate::llm::gateway::{ModelGateway, SummaryGateway};
use crate::repository::message::MessageRepository;

/// Coordinates one turn across the store, context providers, compactor,
/// and model gateway.
///
/// Holds no per-turn state; concurrent turns for different conversations
/// share one orchestrator. Turns racing on the *same* conversation are
/// not serialized -- the store's insertion order decides what history
/// each sees (accepted limitation; at most one in-flight turn per
/// conversation is assumed from a given client).
pub struct TurnOrchestrator<R, PP, PJ, G, S>
where
    R: MessageRepository,
    PP: PersonaProvider,
    PJ: ProjectProvider,
    G: ModelGateway,
    S: SummaryGateway,
{
    repo: R,
    persona: CachedPersona<PP>,
    project: CachedProject<PJ>,
    gateway: G,
    summarizer: S,
    compactor: HistoryCompactor,
    model_timeout: Duration,
}

impl<R, PP, PJ, G, S> TurnOrchestrator<R, PP, PJ, G, S>
where
    R: MessageRepository,
    PP: PersonaProvider,
    PJ: ProjectProvider,
    G: ModelGateway,
    S: SummaryGateway,
{
    pub fn new(
        repo: R,
        persona_provider: PP,
        project_provider: PJ,
        gateway: G,
        summarizer: S,
        compactor: HistoryCompactor,
        model_timeout: Duration,
    ) -> Self {
        Self {
            repo,
            persona: CachedPersona::new(persona_provider),
            project: CachedProject::new(project_provider),
            gateway,
            summarizer,
            compactor,
            model_timeout,
        }
    }

    /// Process one inbound user message and return a terminal outcome.
    ///
    /// Ordering guarantee: the user message is durably appended before
    /// the history load and before any model call, so the model always
    /// sees its own triggering message as part of history. A persisted
    /// user message surviving a later failure is a legitimate partial
    /// effect, not an error.
    ///
    /// Cancellation is observed between steps and during the model call;
    /// it never deletes the already-persisted user message, and reply
    /// persistence is a point of no return. A cancelled turn reports a
    /// `Model` failure (the reply was not produced), mirroring how a
    /// gateway timeout is reported.
    #[instrument(
        name = "process_turn",
        skip(self, content, cancel),
        fields(user_id = %user_id, conversation_id = %conversation_id, content_len = content.len())
    )]
    pub async fn process_turn(
        &self,
        user_id: &str,
        conversation_id: Uuid,
        content: &str,
        cancel: &CancellationToken,
    ) -> TurnOutcome {
        // Refuse blank input before any side effect: persisted messages
        // must carry non-empty content.
        if content.trim().is_empty() {
            warn!("Rejected turn with empty message content");
            return TurnOutcome::failure(FailureKind::Persistence, "empty message content");
        }

        // Step 1: persist the user message.
        if let Err(e) = self
            .repo
            .append(conversation_id, user_id, MessageRole::User, content)
            .await
        {
            warn!(error = %e, "User message persistence failed");
            return TurnOutcome::failure(
                FailureKind::Persistence,
                format!("user message persistence failed: {e}"),
            );
        }

        if cancel.is_cancelled() {
            info!("Turn cancelled after user message persistence");
            return TurnOutcome::failure(FailureKind::Model, "turn cancelled before context load");
        }

        // Step 2: load persona, project, and the full history (which now
        // includes the message persisted above). The user message stays
        // in place on failure -- no compensating delete.
        let persona = match self.persona.get().await {
            Ok(p) => p.clone(),
            Err(e) => {
                warn!(error = %e, "Persona load failed");
                return TurnOutcome::failure(
                    FailureKind::ContextLoad,
                    format!("persona load failed: {e}"),
                );
            }
        };
        let project = match self.project.get().await {
            Ok(p) => p.clone(),
            Err(e) => {
                warn!(error = %e, "Project load failed");
                return TurnOutcome::failure(
                    FailureKind::ContextLoad,
                    format!("project load failed: {e}"),
                );
            }
        };
        let full_history = match self.repo.list_ordered(conversation_id, user_id).await {
            Ok(history) => history,
            Err(e) => {
                warn!(error = %e, "History load failed");
                return TurnOutcome::failure(
                    FailureKind::ContextLoad,
                    format!("history load failed: {e}"),
                );
            }
        };

        // Cancellation detected here skips the summarization call.
        if cancel.is_cancelled() {
            info!("Turn cancelled before history compaction");
            return TurnOutcome::failure(FailureKind::Model, "turn cancelled before compaction");
        }

        // Step 3: compact the history.
        let history = match self.compactor.compact(&full_history, &self.summarizer).await {
            Ok(turns) => turns,
            Err(e) => {
                warn!(error = %e, "History compaction failed");
                return TurnOutcome::failure(FailureKind::Compaction, e.to_string());
            }
        };

        let context = ConversationContext {
            persona,
            project,
            history,
        };

        // Step 4: invoke the model, bounded by the configured timeout and
        // racing against cancellation.
        let reply = tokio::select! {
            _ = cancel.cancelled() => {
                info!("Turn cancelled during model invocation");
                return TurnOutcome::failure(
                    FailureKind::Model,
                    "turn cancelled during model invocation",
                );
            }
            result = self.gateway.generate(content, &context, self.model_timeout) => {
                match result {
                    Ok(text) => text,
                    Err(e) => {
                        warn!(error = %e, "Model generation failed");
                        return TurnOutcome::failure(FailureKind::Model, e.to_string());
                    }
                }
            }
        };

        let reply = reply.trim().to_string();
        if reply.is_empty() {
            warn!("Model returned empty content");
            return TurnOutcome::failure(FailureKind::Model, "model returned empty content");
        }

        // Step 5: persist the reply. Point of no return -- cancellation is
        // no longer observed. A store failure here loses a reply the
        // model already produced; known, accepted failure mode.
        if let Err(e) = self
            .repo
            .append(conversation_id, user_id, MessageRole::Assistant, &reply)
            .await
        {
            warn!(error = %e, "Reply persistence failed, generated reply lost");
            return TurnOutcome::failure(
                FailureKind::Persistence,
                format!("reply persistence failed: {e}"),
            );
        }

        info!(reply_len = reply.len(), "Turn completed");
        TurnOutcome::Success { reply }
    }
}
