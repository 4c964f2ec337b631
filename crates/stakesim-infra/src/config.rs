//! Configuration loading.
//!
//! Settings come from a TOML file (`STAKESIM_CONFIG` env var, falling back
//! to `./stakesim.toml`). A missing file yields the defaults, which target
//! a local Ollama instance. The provider API key is never stored in the
//! file; it is read from the environment variable named by
//! `provider.api_key_env` and wrapped in a `SecretString`.

use std::path::Path;

use anyhow::Context;
use secrecy::SecretString;
use tracing::debug;

use stakesim_types::config::{ProviderSettings, StakesimConfig};

/// Env var naming the config file path.
pub const CONFIG_FILE_ENV: &str = "STAKESIM_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "stakesim.toml";

/// Load configuration from the path named by `STAKESIM_CONFIG`, falling
/// back to `./stakesim.toml`, falling back to defaults.
pub fn load_config() -> anyhow::Result<StakesimConfig> {
    let path = std::env::var(CONFIG_FILE_ENV)
        .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_config_from(Path::new(&path))
}

/// Load configuration from an explicit path; a missing file yields defaults.
pub fn load_config_from(path: &Path) -> anyhow::Result<StakesimConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "Config file not found, using defaults");
        return Ok(StakesimConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: StakesimConfig = toml::from_str(&raw)
        .with_context(|| format!("invalid config file {}", path.display()))?;

    debug!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// Resolve the provider API key from the configured environment variable.
///
/// Local OpenAI-compatible backends (Ollama) ignore the key entirely, so
/// an unset variable resolves to a placeholder rather than an error.
pub fn resolve_api_key(provider: &ProviderSettings) -> SecretString {
    match std::env::var(&provider.api_key_env) {
        Ok(key) if !key.is_empty() => SecretString::from(key),
        _ => SecretString::from("unused"),
    }
}
