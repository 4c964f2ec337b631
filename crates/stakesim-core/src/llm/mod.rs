//! LLM-facing ports: the raw provider trait and the two turn-level
//! gateways (stakeholder generation and history summarization).

pub mod gateway;
pub mod provider;

pub use gateway::{ModelGateway, SummaryGateway};
pub use provider::LlmProvider;
