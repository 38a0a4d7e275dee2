//! `SQLite` connection pool setup and schema bootstrap.

use std::str::FromStr;

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Connection, SqlitePool};

use crate::error::StorageError;

/// Idempotent table definitions applied on every start.
const SCHEMA: &str = include_str!("../schema.sql");

/// Configuration for the `SQLite` storage adapter.
pub struct Config {
    /// `SQLite` connection URL (e.g. `sqlite:flatshop.db` or `sqlite::memory:`).
    pub database_url: String,
}

impl Config {
    /// Build a [`Database`] from this configuration.
    ///
    /// Creates the connection pool, creates the database file if missing,
    /// checks that a connection can be used, and creates missing tables.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection, the liveness check or the
    /// schema bootstrap fail.
    pub async fn build(self) -> Result<Database, StorageError> {
        Database::initialize(&self.database_url).await
    }
}

/// Holds the `SQLite` connection pool and provides access to it.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    async fn initialize(database_url: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePool::connect_with(options).await?;
        let db = Self { pool };
        db.ping().await?;

        sqlx::raw_sql(SCHEMA).execute(&db.pool).await?;
        tracing::debug!("database schema ready");

        Ok(db)
    }

    /// Check out a connection and ping it.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when no live connection can be obtained.
    pub async fn ping(&self) -> Result<(), StorageError> {
        let mut conn = self.pool.acquire().await?;
        conn.ping().await?;
        Ok(())
    }

    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
