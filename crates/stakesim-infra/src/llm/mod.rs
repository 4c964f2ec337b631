//! LLM provider and gateway implementations.

pub mod gateway;
pub mod openai_compat;

pub use gateway::{StakeholderGateway, SummaryLlmGateway};
pub use openai_compat::OpenAiCompatibleProvider;
