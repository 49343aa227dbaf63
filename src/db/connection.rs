use crate::errors::{Error, Result};
use rusqlite::Connection;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

/// Handle to the SQLite database file.
///
/// Cheap to clone and share. Every storage operation acquires its own
/// connection via [`Db::open`] and drops it when the operation's scope ends;
/// there is no pooling and no long-lived shared connection. SQLite's WAL
/// mode lets concurrent readers proceed alongside a single writer, and the
/// busy timeout is the only contention handling.
#[derive(Debug, Clone)]
pub struct Db {
    path: Arc<str>,
}

impl Db {
    /// Creates a handle for the database at `path`. No connection is opened
    /// until an operation needs one.
    #[must_use]
    pub fn new(path: &str) -> Self {
        Self {
            path: Arc::from(path),
        }
    }

    /// Opens a fresh connection with the pragmas every operation relies on:
    /// WAL journaling, relaxed synchronous durability, enforced foreign
    /// keys, and a 5 second busy timeout.
    #[instrument(skip(self))]
    pub fn open(&self) -> Result<Connection> {
        debug!("Opening database connection to: {}", self.path);
        let conn = Connection::open(self.path.as_ref()).map_err(|e| {
            Error::Database(format!("Failed to open database at {}: {}", self.path, e))
        })?;

        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.busy_timeout(Duration::from_secs(5))?;

        Ok(conn)
    }
}
