//! Lazily-initialized, process-wide caches for persona and project.
//!
//! Both contexts are loaded at most once per process. Concurrent first
//! access triggers exactly one load; every other caller waits and then
//! observes the fully-initialized value (`tokio::sync::OnceCell`
//! semantics). A failed load is not cached -- the next access retries.
//! Tests inject a fresh cache per test rather than touching globals.

use tokio::sync::OnceCell;

use stakesim_types::error::ContextError;
use stakesim_types::persona::Persona;
use stakesim_types::project::Project;

use super::provider::{PersonaProvider, ProjectProvider};

/// Single-initialization cache around a [`PersonaProvider`].
pub struct CachedPersona<P: PersonaProvider> {
    provider: P,
    cell: OnceCell<Persona>,
}

impl<P: PersonaProvider> CachedPersona<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            cell: OnceCell::new(),
        }
    }

    /// Get the persona, loading it on first access.
    pub async fn get(&self) -> Result<&Persona, ContextError> {
        self.cell
            .get_or_try_init(|| self.provider.load())
            .await
    }
}

/// Single-initialization cache around a [`ProjectProvider`].
pub struct CachedProject<P: ProjectProvider> {
    provider: P,
    cell: OnceCell<Project>,
}

impl<P: ProjectProvider> CachedProject<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            cell: OnceCell::new(),
        }
    }

    /// Get the project, loading it on first access.
    pub async fn get(&self) -> Result<&Project, ContextError> {
        self.cell
            .get_or_try_init(|| self.provider.load())
            .await
    }
}
