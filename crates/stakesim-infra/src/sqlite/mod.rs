//! SQLite persistence layer.

pub mod message;
pub mod pool;

pub use message::SqliteMessageRepository;
pub use pool::{DatabasePool, default_database_url};
