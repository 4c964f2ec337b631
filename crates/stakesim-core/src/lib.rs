//! Turn orchestration and history compaction for Stakesim.
//!
//! This crate defines the "ports" (repository, context provider, and
//! gateway traits) that the infrastructure layer implements, plus the two
//! pieces of real logic in the system: the history compactor and the turn
//! orchestrator. It depends only on `stakesim-types` -- never on
//! `stakesim-infra` or any database/HTTP crate.

pub mod agent;
pub mod context;
pub mod llm;
pub mod repository;
