// SPDX-FileCopyrightText: 2026 Parlor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All writes are serialized through tokio-rusqlite's single background
//! thread: `Database` wraps one `tokio_rusqlite::Connection`, every query
//! module accepts `&Database` and goes through `connection().call()`, and no
//! other `Connection` instances are created for writes. This eliminates
//! SQLITE_BUSY errors under concurrent requests.

use parlor_core::ParlorError;
use tokio_rusqlite::Connection;

use crate::migrations;

/// Handle to the Parlor SQLite database.
///
/// Cloning is cheap and shares the same background connection.
#[derive(Clone)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the database at `path` with WAL mode enabled and run
    /// any pending migrations.
    pub async fn open(path: &str) -> Result<Self, ParlorError> {
        Self::open_with_options(path, true).await
    }

    /// Open (or create) the database at `path`, optionally without WAL mode.
    pub async fn open_with_options(path: &str, wal_mode: bool) -> Result<Self, ParlorError> {
        let conn = Connection::open(path.to_owned())
            .await
            .map_err(|e| map_tr_err(e.into()))?;

        conn.call(
            move |conn| -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
                if wal_mode {
                    conn.pragma_update(None, "journal_mode", "WAL")?;
                    conn.pragma_update(None, "synchronous", "NORMAL")?;
                }
                conn.pragma_update(None, "foreign_keys", "ON")?;
                migrations::run_migrations(conn)?;
                Ok(())
            },
        )
        .await
        .map_err(|e| ParlorError::Storage {
            source: match e {
                tokio_rusqlite::Error::Error(inner) => inner,
                tokio_rusqlite::Error::Close((_, src)) => Box::new(src),
                other => other.to_string().into(),
            },
        })?;

        tracing::info!(path, wal_mode, "database opened");
        Ok(Self { conn })
    }

    /// The underlying tokio-rusqlite connection, for query modules.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Flush and close the background connection.
    pub async fn close(self) -> Result<(), ParlorError> {
        self.conn.close().await.map_err(map_tr_err)
    }
}

/// Map a tokio-rusqlite error into the storage error variant.
pub(crate) fn map_tr_err(err: tokio_rusqlite::Error) -> ParlorError {
    ParlorError::Storage {
        source: Box::new(err),
    }
}

/// Map a tokio-rusqlite error, turning UNIQUE/FOREIGN KEY constraint
/// violations into the given caller-visible error instead of `Storage`.
pub(crate) fn map_constraint_err(
    err: tokio_rusqlite::Error,
    on_constraint: impl FnOnce() -> ParlorError,
) -> ParlorError {
    match &err {
        tokio_rusqlite::Error::Error(rusqlite::Error::SqliteFailure(failure, _))
            if failure.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            on_constraint()
        }
        _ => map_tr_err(err),
    }
}
