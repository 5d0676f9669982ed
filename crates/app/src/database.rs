//! Database connection management

use std::time::Duration;

use sqlx::{
    PgPool, Postgres, Transaction,
    migrate::{MigrateError, Migrator},
    postgres::PgPoolOptions,
    query,
};
use thiserror::Error;

/// Schema migrations embedded at build time.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("database unreachable: {0}")]
    Unreachable(#[source] sqlx::Error),

    #[error("failed to run migrations: {0}")]
    Migrate(#[source] MigrateError),
}

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Begin a transaction on the shared pool.
    ///
    /// # Errors
    ///
    /// Returns an error when no connection can be acquired or `BEGIN` fails.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }
}

/// Build a pool without opening any connection yet.
///
/// # Errors
///
/// Returns an error if the connection string cannot be parsed.
pub fn connect_lazy(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_lazy(database_url)
}

/// Check the database is reachable and bring the schema up to date.
///
/// # Errors
///
/// Returns an error when the ping or a migration fails.
pub async fn prepare(pool: &PgPool) -> Result<(), DatabaseError> {
    query("SELECT 1")
        .execute(pool)
        .await
        .map_err(DatabaseError::Unreachable)?;

    MIGRATOR.run(pool).await.map_err(DatabaseError::Migrate)
}
