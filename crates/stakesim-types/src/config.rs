//! Global configuration types for Stakesim.
//!
//! `StakesimConfig` represents the top-level `stakesim.toml` that controls
//! the LLM provider endpoint, compaction window, and context file paths.
//! All fields have sensible defaults; `stakesim-infra` layers environment
//! overrides on top.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Stakesim backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakesimConfig {
    /// LLM provider endpoint and model selection.
    #[serde(default)]
    pub provider: ProviderSettings,

    /// Number of most-recent messages always kept verbatim during
    /// history compaction.
    #[serde(default = "default_recent_window")]
    pub recent_window: usize,

    /// Upper bound on the main model call, in seconds. A timeout is
    /// reported as a model failure.
    #[serde(default = "default_model_timeout_secs")]
    pub model_timeout_secs: u64,

    /// Path to the persona JSON file.
    #[serde(default = "default_persona_path")]
    pub persona_path: String,

    /// Path to the project JSON file.
    #[serde(default = "default_project_path")]
    pub project_path: String,
}

/// Connection settings for an OpenAI-compatible LLM provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Base URL of the chat-completions endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Name of the environment variable holding the API key. The key
    /// itself never appears in config files.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Model used for stakeholder replies.
    #[serde(default = "default_model")]
    pub model: String,

    /// Model used for history summarization. Defaults to the reply model;
    /// point it at something cheaper for long conversations.
    #[serde(default)]
    pub summarizer_model: Option<String>,

    /// Maximum output tokens per generation.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_recent_window() -> usize {
    10
}

fn default_model_timeout_secs() -> u64 {
    60
}

fn default_persona_path() -> String {
    "data/persona.json".to_string()
}

fn default_project_path() -> String {
    "data/project.json".to_string()
}

fn default_base_url() -> String {
    "http://localhost:11434/v1".to_string()
}

fn default_api_key_env() -> String {
    "STAKESIM_API_KEY".to_string()
}

fn default_model() -> String {
    "llama3.1:8b".to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            model: default_model(),
            summarizer_model: None,
            max_tokens: default_max_tokens(),
        }
    }
}

impl Default for StakesimConfig {
    fn default() -> Self {
        Self {
            provider: ProviderSettings::default(),
            recent_window: default_recent_window(),
            model_timeout_secs: default_model_timeout_secs(),
            persona_path: default_persona_path(),
            project_path: default_project_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_values() {
        let config = StakesimConfig::default();
        assert_eq!(config.recent_window, 10);
        assert_eq!(config.model_timeout_secs, 60);
        assert_eq!(config.persona_path, "data/persona.json");
        assert_eq!(config.provider.model, "llama3.1:8b");
        assert!(config.provider.summarizer_model.is_none());
    }

    #[test]
    fn test_config_deserialize_empty_toml() {
        let config: StakesimConfig = toml::from_str("").unwrap();
        assert_eq!(config.recent_window, 10);
        assert_eq!(config.provider.api_key_env, "STAKESIM_API_KEY");
    }

    #[test]
    fn test_config_deserialize_with_values() {
        let toml_str = r#"
recent_window = 6
model_timeout_secs = 30
persona_path = "scenarios/bike-shop/persona.json"

[provider]
base_url = "https://api.openai.com/v1"
model = "gpt-4o-mini"
summarizer_model = "gpt-4o-mini"
max_tokens = 512
"#;
        let config: StakesimConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.recent_window, 6);
        assert_eq!(config.model_timeout_secs, 30);
        assert_eq!(config.persona_path, "scenarios/bike-shop/persona.json");
        assert_eq!(config.provider.base_url, "https://api.openai.com/v1");
        assert_eq!(config.provider.summarizer_model.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(config.provider.max_tokens, 512);
    }
}
