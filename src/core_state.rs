//! Shared application state and the per-request persistence session.
//!
//! `CoreState` is built once at startup, wrapped in `Arc`, and handed to
//! every request through axum `State`. Each request opens its own
//! connection through `read_session` / `write_session`; nothing is cached
//! between requests.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::db::{self, DatabaseError};

/// How a session's transaction is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Deferred transaction, for operations that only read.
    Read,
    /// Immediate transaction. Takes the write lock up front, so a
    /// read-then-write sequence never has to upgrade and concurrent
    /// writers queue on `busy_timeout` instead of failing.
    Write,
}

impl SessionMode {
    fn behavior(self) -> TransactionBehavior {
        match self {
            SessionMode::Read => TransactionBehavior::Deferred,
            SessionMode::Write => TransactionBehavior::Immediate,
        }
    }
}

/// Transport-agnostic application state.
pub struct CoreState {
    database_path: PathBuf,
}

impl CoreState {
    /// Create state pointing at the given database file.
    ///
    /// Opens the database once so the schema exists before the first
    /// request arrives.
    pub fn new(database_path: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let database_path = database_path.into();
        if database_path.as_os_str().is_empty() {
            return Err(CoreError::InvalidPath);
        }
        db::open_database(&database_path)?;
        tracing::info!(path = %database_path.display(), "Record database ready");
        Ok(Self { database_path })
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    /// Open a fresh, configured database connection.
    pub fn open_db(&self) -> Result<Connection, CoreError> {
        db::open_database(&self.database_path).map_err(CoreError::Database)
    }

    /// Run `op` inside one connection and one transaction (blocking).
    ///
    /// Commits when `op` returns `Ok`. On `Err` the transaction is dropped,
    /// which rolls it back. The connection closes when this returns on
    /// either path.
    pub fn with_session<T, E, F>(&self, mode: SessionMode, op: F) -> Result<T, E>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T, E>,
        E: From<CoreError>,
    {
        let mut conn = self.open_db()?;
        let tx = conn
            .transaction_with_behavior(mode.behavior())
            .map_err(|e| CoreError::Database(DatabaseError::Sqlite(e)))?;
        tracing::debug!(?mode, "Session opened");

        match op(&tx) {
            Ok(value) => {
                tx.commit()
                    .map_err(|e| CoreError::Database(DatabaseError::Sqlite(e)))?;
                tracing::debug!(?mode, "Session committed");
                Ok(value)
            }
            Err(err) => {
                drop(tx);
                tracing::debug!(?mode, "Session rolled back");
                Err(err)
            }
        }
    }

    /// Read-only session on the blocking thread pool.
    pub async fn read_session<T, E, F>(self: &Arc<Self>, op: F) -> Result<T, E>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T, E> + Send + 'static,
        T: Send + 'static,
        E: From<CoreError> + Send + 'static,
    {
        self.spawn_session(SessionMode::Read, op).await
    }

    /// Writing session on the blocking thread pool.
    pub async fn write_session<T, E, F>(self: &Arc<Self>, op: F) -> Result<T, E>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T, E> + Send + 'static,
        T: Send + 'static,
        E: From<CoreError> + Send + 'static,
    {
        self.spawn_session(SessionMode::Write, op).await
    }

    // rusqlite blocks, and a queued writer can wait up to busy_timeout;
    // keep both off the async workers.
    async fn spawn_session<T, E, F>(self: &Arc<Self>, mode: SessionMode, op: F) -> Result<T, E>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T, E> + Send + 'static,
        T: Send + 'static,
        E: From<CoreError> + Send + 'static,
    {
        let core = Arc::clone(self);
        tokio::task::spawn_blocking(move || core.with_session(mode, op))
            .await
            .map_err(|e| E::from(CoreError::TaskFailed(e.to_string())))?
    }
}

/// Errors from CoreState operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Database path is empty")]
    InvalidPath,
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
    #[error("Session task failed: {0}")]
    TaskFailed(String),
}
