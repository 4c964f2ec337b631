//! Shared domain types for Stakesim.
//!
//! This crate contains the core domain types used across the Stakesim
//! backend: conversation messages, the stakeholder persona, the project
//! scenario, completion request/response shapes, and turn outcomes.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod config;
pub mod error;
pub mod llm;
pub mod message;
pub mod persona;
pub mod project;
pub mod turn;
