//! SQLite-backed registry store.
//!
//! [`RegistryStore`] owns the connection pool for one invocation — it is a
//! scoped handle, never process-global, and [`close`](RegistryStore::close)
//! must run on every exit path after a successful connect.
//!
//! All queries bind field values as typed parameters; nothing is ever
//! formatted into query text.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::str::FromStr;
use thiserror::Error;

use crate::config::Config;
use crate::models::{FileRecord, RegisteredCopy};

/// Failure talking to the registry, with connectivity, constraint, and plain
/// query failures kept distinct so callers can tell them apart from
/// "duplicate found" and from validation failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not open the registry database: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("registry constraint violated: {0}")]
    Constraint(#[source] sqlx::Error),
    #[error("registry query failed: {0}")]
    Query(#[source] sqlx::Error),
}

/// The shared table of registered file copies.
pub struct RegistryStore {
    pool: SqlitePool,
}

impl RegistryStore {
    /// Open the registry database configured in `[db] path`.
    pub async fn connect(config: &Config) -> Result<Self, StoreError> {
        let pool = connect_pool(config).await?;
        Ok(Self { pool })
    }

    /// Look up every registered copy holding this exact content.
    ///
    /// No side effects; ordering is fixed so repeated calls with no
    /// intervening insert return the same sequence.
    pub async fn find_by_identity(
        &self,
        size: u64,
        sha256: &str,
    ) -> Result<Vec<RegisteredCopy>, StoreError> {
        let rows = sqlx::query(
            "SELECT host, path, name FROM files WHERE size = ? AND sha256 = ? ORDER BY host, path, name",
        )
        .bind(size as i64)
        .bind(sha256)
        .fetch_all(&self.pool)
        .await
        .map_err(classify)?;

        Ok(rows
            .iter()
            .map(|row| RegisteredCopy {
                host: row.get("host"),
                directory: row.get("path"),
                name: row.get("name"),
            })
            .collect())
    }

    /// Admit one validated record as a new registry row.
    ///
    /// Must only be called after validation succeeds; the store never holds
    /// a row that failed admission.
    pub async fn insert(&self, record: &FileRecord) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO files (name, path, size, host, created, modified, sha256)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.name)
        .bind(&record.directory)
        .bind(record.size as i64)
        .bind(&record.host)
        .bind(&record.created)
        .bind(&record.modified)
        .bind(&record.sha256)
        .execute(&self.pool)
        .await
        .map_err(classify)?;

        Ok(())
    }

    /// Release the connection pool.
    pub async fn close(self) {
        self.pool.close().await;
    }
}

pub(crate) async fn connect_pool(config: &Config) -> Result<SqlitePool, StoreError> {
    let db_path = &config.db.path;

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| StoreError::Connect(sqlx::Error::Io(e)))?;
    }

    let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", db_path.display()))
        .map_err(StoreError::Connect)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal);

    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(StoreError::Connect)
}

fn classify(e: sqlx::Error) -> StoreError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::Constraint(e),
        _ => StoreError::Query(e),
    }
}
