// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and
//! embedded migrations.
//!
//! All writes are serialized through tokio-rusqlite's single background
//! thread. Do NOT create additional Connection instances for writes.

use std::path::Path;

use navigator_core::NavigatorError;
use tokio_rusqlite::Connection;

mod embedded {
    use refinery::embed_migrations;
    embed_migrations!("migrations");
}

/// Helper to convert tokio_rusqlite errors into NavigatorError::Storage.
pub(crate) fn storage_err(e: tokio_rusqlite::Error) -> NavigatorError {
    NavigatorError::Storage {
        source: Box::new(e),
    }
}

/// Open the database at `path`, apply PRAGMAs, and run pending migrations.
///
/// Refinery tracks applied migrations in its own `refinery_schema_history`
/// table, so reopening an existing database is a no-op.
pub async fn open(path: impl AsRef<Path>) -> Result<Connection, NavigatorError> {
    let conn = Connection::open(path.as_ref())
        .await
        .map_err(|e| storage_err(e.into()))?;
    initialize(&conn).await?;
    Ok(conn)
}

/// Open an in-memory database with the full schema applied. For tests.
pub async fn open_in_memory() -> Result<Connection, NavigatorError> {
    let conn = Connection::open_in_memory()
        .await
        .map_err(|e| storage_err(e.into()))?;
    initialize(&conn).await?;
    Ok(conn)
}

async fn initialize(conn: &Connection) -> Result<(), NavigatorError> {
    conn.call(
        |conn| -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            conn.pragma_update(None, "journal_mode", "WAL")?;
            conn.pragma_update(None, "foreign_keys", "ON")?;
            embedded::migrations::runner().run(conn)?;
            Ok(())
        },
    )
    .await
    .map_err(|e| match e {
        tokio_rusqlite::Error::Error(source) => NavigatorError::Storage { source },
        other => NavigatorError::storage(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_database_has_schema() {
        let conn = open_in_memory().await.unwrap();
        let count: i64 = conn
            .call(|conn| -> Result<i64, rusqlite::Error> {
                let n = conn.query_row(
                    "SELECT count(*) FROM sqlite_master WHERE type = 'table' AND name IN ('ai_memory', 'projects')",
                    [],
                    |row| row.get(0),
                )?;
                Ok(n)
            })
            .await
            .unwrap();
        assert_eq!(count, 2);
    }
}
