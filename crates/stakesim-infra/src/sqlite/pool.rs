//! SQLite pool tuned for an append-mostly message log.
//!
//! SQLite allows one writer at a time, so the pool is split: a
//! single-connection writer serializes message appends, and a small
//! read-only pool serves concurrent history loads. WAL journal mode
//! lets readers proceed while an append is in flight. The schema is a
//! single `messages` table with no foreign keys, so no relational
//! pragmas are needed beyond the journal mode.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// History loads are short point reads; a handful of connections is
/// plenty even under concurrent conversations.
const MAX_READERS: u32 = 8;

/// How long a connection waits on the writer lock before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Split read/write pool for the message log.
#[derive(Clone)]
pub struct DatabasePool {
    /// Read-only pool for history loads.
    pub reader: SqlitePool,
    /// Single-connection pool serializing appends.
    pub writer: SqlitePool,
}

impl DatabasePool {
    /// Open (creating if missing) the database and run migrations.
    ///
    /// Migrations run on the writer before the reader pool connects, so
    /// a reader never observes a half-migrated schema.
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let opts = SqliteConnectOptions::from_str(database_url)?
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT)
            .create_if_missing(true);

        let writer = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(opts.clone())
            .await?;

        sqlx::migrate!("../../migrations").run(&writer).await?;

        let reader = SqlitePoolOptions::new()
            .max_connections(MAX_READERS)
            .connect_with(opts.read_only(true))
            .await?;

        Ok(Self { reader, writer })
    }
}

/// Returns the default database URL based on `STAKESIM_DATA_DIR` env var,
/// falling back to `~/.stakesim/stakesim.db`.
pub fn default_database_url() -> String {
    let data_dir = std::env::var("STAKESIM_DATA_DIR").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        format!("{home}/.stakesim")
    });
    format!("sqlite://{data_dir}/stakesim.db")
}
