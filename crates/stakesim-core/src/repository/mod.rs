//! Repository trait definitions (implemented in stakesim-infra).

pub mod message;

pub use message::MessageRepository;
