//! Persona and project context: provider traits and process-wide caching.

pub mod cache;
pub mod provider;

pub use cache::{CachedPersona, CachedProject};
pub use provider::{PersonaProvider, ProjectProvider};
