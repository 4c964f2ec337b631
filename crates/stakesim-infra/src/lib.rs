//! Infrastructure implementations for Stakesim.
//!
//! Concrete adapters behind the ports declared in `stakesim-core`:
//! SQLite message persistence, file-backed persona/project providers,
//! and OpenAI-compatible model gateways.

pub mod bootstrap;
pub mod config;
pub mod context;
pub mod llm;
pub mod sqlite;
