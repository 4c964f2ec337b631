//! Persona and project definitions loaded from JSON files on disk.
//!
//! The file paths come from configuration, overridable via the
//! `STAKESIM_PERSONA_FILE` and `STAKESIM_PROJECT_FILE` environment
//! variables. Files are read once per process; the single-load caching
//! lives in `stakesim-core` (`CachedPersona`/`CachedProject`), so these
//! providers just read and parse.

use std::path::{Path, PathBuf};

use tracing::debug;

use stakesim_core::context::provider::{PersonaProvider, ProjectProvider};
use stakesim_types::error::ContextError;
use stakesim_types::persona::Persona;
use stakesim_types::project::Project;

/// Env var overriding the persona file path.
pub const PERSONA_FILE_ENV: &str = "STAKESIM_PERSONA_FILE";
/// Env var overriding the project file path.
pub const PROJECT_FILE_ENV: &str = "STAKESIM_PROJECT_FILE";

fn resolve_path(env_var: &str, configured: &Path) -> PathBuf {
    match std::env::var(env_var) {
        Ok(v) if !v.is_empty() => PathBuf::from(v),
        _ => configured.to_path_buf(),
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ContextError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ContextError::Io(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&raw)
        .map_err(|e| ContextError::Malformed(format!("{}: {e}", path.display())))
}

/// Loads a `Persona` from a JSON file.
pub struct FilePersonaProvider {
    path: PathBuf,
}

impl FilePersonaProvider {
    /// Provider for the configured path, honoring `STAKESIM_PERSONA_FILE`.
    pub fn new(configured: impl AsRef<Path>) -> Self {
        Self {
            path: resolve_path(PERSONA_FILE_ENV, configured.as_ref()),
        }
    }
}

impl PersonaProvider for FilePersonaProvider {
    async fn load(&self) -> Result<Persona, ContextError> {
        let persona: Persona = read_json(&self.path).await?;
        debug!(path = %self.path.display(), name = %persona.name, "Loaded persona");
        Ok(persona)
    }
}

/// Loads a `Project` from a JSON file.
pub struct FileProjectProvider {
    path: PathBuf,
}

impl FileProjectProvider {
    /// Provider for the configured path, honoring `STAKESIM_PROJECT_FILE`.
    pub fn new(configured: impl AsRef<Path>) -> Self {
        Self {
            path: resolve_path(PROJECT_FILE_ENV, configured.as_ref()),
        }
    }
}

impl ProjectProvider for FileProjectProvider {
    async fn load(&self) -> Result<Project, ContextError> {
        let project: Project = read_json(&self.path).await?;
        debug!(path = %self.path.display(), name = %project.project_name, "Loaded project");
        Ok(project)
    }
}
