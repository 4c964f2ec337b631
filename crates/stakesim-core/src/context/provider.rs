//! Context provider trait definitions.
//!
//! Persona and project sources are ports; the filesystem implementations
//! live in stakesim-infra. Providers describe a single load -- caching is
//! layered on top by [`super::cache`].

use stakesim_types::error::ContextError;
use stakesim_types::persona::Persona;
use stakesim_types::project::Project;

/// Source of the stakeholder persona.
pub trait PersonaProvider: Send + Sync {
    fn load(
        &self,
    ) -> impl std::future::Future<Output = Result<Persona, ContextError>> + Send;
}

/// Source of the project scenario.
pub trait ProjectProvider: Send + Sync {
    fn load(
        &self,
    ) -> impl std::future::Future<Output = Result<Project, ContextError>> + Send;
}
