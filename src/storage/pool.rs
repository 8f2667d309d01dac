//! Shared SQLite handle.
//!
//! Connections are opened lazily and returned to an idle list after each
//! operation, up to `max_idle`. Contention between connections is left to
//! SQLite's busy timeout; the pool itself holds its lock only while checking
//! connections in and out.

use crate::error::{FridgeError, Result};
use crate::storage::schema::SCHEMA;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

pub struct SqlitePool {
    db_path: PathBuf,
    busy_timeout: Duration,
    max_idle: usize,
    idle: Mutex<Vec<Connection>>,
}

impl SqlitePool {
    /// Opens the database, verifies it answers, and applies the schema.
    pub fn open(db_path: &Path, busy_timeout: Duration, max_idle: usize) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let pool = Self {
            db_path: db_path.to_path_buf(),
            busy_timeout,
            max_idle,
            idle: Mutex::new(Vec::new()),
        };

        pool.with_conn(|conn| {
            conn.query_row("SELECT 1", [], |_| Ok(()))?;
            conn.execute_batch(SCHEMA)
        })?;

        tracing::debug!(path = %pool.db_path.display(), "Opened store");
        Ok(pool)
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Runs `f` on a pooled connection. Errors from `f` are store errors.
    pub fn with_conn<F, R>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<R>,
    {
        let conn = match self.checkout() {
            Some(conn) => conn,
            None => self.connect()?,
        };
        let result = f(&conn);
        self.checkin(conn);
        result.map_err(FridgeError::Store)
    }

    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.db_path)?;
        conn.busy_timeout(self.busy_timeout)?;
        conn.query_row("PRAGMA journal_mode=WAL;", [], |_| Ok(()))?;
        conn.execute("PRAGMA foreign_keys=ON;", [])?;
        Ok(conn)
    }

    fn checkout(&self) -> Option<Connection> {
        self.idle
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop()
    }

    fn checkin(&self, conn: Connection) {
        let mut idle = self
            .idle
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if idle.len() < self.max_idle {
            idle.push(conn);
        }
    }

    #[cfg(test)]
    fn idle_count(&self) -> usize {
        self.idle
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}
