//! Wires configuration into a ready-to-use orchestrator.

use std::time::Duration;

use anyhow::Context;

use stakesim_core::agent::{HistoryCompactor, TurnOrchestrator};
use stakesim_types::config::StakesimConfig;

use crate::config::resolve_api_key;
use crate::context::{FilePersonaProvider, FileProjectProvider};
use crate::llm::{OpenAiCompatibleProvider, StakeholderGateway, SummaryLlmGateway};
use crate::sqlite::{DatabasePool, SqliteMessageRepository, default_database_url};

/// The fully wired orchestrator: SQLite persistence, file-backed context,
/// OpenAI-compatible model and summarizer gateways.
pub type Orchestrator = TurnOrchestrator<
    SqliteMessageRepository,
    FilePersonaProvider,
    FileProjectProvider,
    StakeholderGateway<OpenAiCompatibleProvider>,
    SummaryLlmGateway<OpenAiCompatibleProvider>,
>;

/// Build an orchestrator from configuration.
///
/// Opens (and migrates) the SQLite database at the default location and
/// constructs one provider per role: the summarizer uses
/// `provider.summarizer_model` when set, otherwise the reply model.
pub async fn build_orchestrator(config: &StakesimConfig) -> anyhow::Result<Orchestrator> {
    let pool = DatabasePool::new(&default_database_url())
        .await
        .context("failed to open message database")?;
    let repo = SqliteMessageRepository::new(pool);

    let persona_provider = FilePersonaProvider::new(&config.persona_path);
    let project_provider = FileProjectProvider::new(&config.project_path);

    let api_key = resolve_api_key(&config.provider);
    let reply_provider = OpenAiCompatibleProvider::new(
        &config.provider.base_url,
        &api_key,
        &config.provider.model,
    );
    let summarizer_model = config
        .provider
        .summarizer_model
        .as_deref()
        .unwrap_or(&config.provider.model);
    let summary_provider =
        OpenAiCompatibleProvider::new(&config.provider.base_url, &api_key, summarizer_model);

    let gateway = StakeholderGateway::new(
        reply_provider,
        config.provider.model.clone(),
        config.provider.max_tokens,
    );
    let summarizer = SummaryLlmGateway::new(
        summary_provider,
        summarizer_model.to_string(),
        config.provider.max_tokens,
    );

    Ok(TurnOrchestrator::new(
        repo,
        persona_provider,
        project_provider,
        gateway,
        summarizer,
        HistoryCompactor::new(config.recent_window),
        Duration::from_secs(config.model_timeout_secs),
    ))
}
