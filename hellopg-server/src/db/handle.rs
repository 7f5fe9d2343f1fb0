//! Shared database handle
//!
//! Uses a sqlx `PgPool` created with `connect_lazy_with`: building the
//! handle never opens a connection, so bad credentials or an unreachable
//! host only show up when a consumer first runs a query.
//!
//! The pool spawns its maintenance tasks on the current Tokio runtime, so
//! `Database::new`, `init` and `global` must be called from inside one.

use std::sync::OnceLock;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::config::DbConfig;
use crate::error::DbError;

/// Default maximum connections for the pool.
/// Kept low; nothing here issues concurrent queries.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long a consumer waits for a connection before giving up.
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

static DATABASE: OnceLock<Database> = OnceLock::new();

/// Configured client for the PostgreSQL backend.
#[derive(Debug)]
pub struct Database {
    config: DbConfig,
    pool: PgPool,
}

impl Database {
    /// Build the handle without connecting.
    pub fn new(config: DbConfig) -> Self {
        Self::with_options(config, DEFAULT_MAX_CONNECTIONS, DEFAULT_ACQUIRE_TIMEOUT)
    }

    /// Build the handle with custom pool limits.
    pub fn with_options(config: DbConfig, max_connections: u32, acquire_timeout: Duration) -> Self {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect_lazy_with(config.connect_options());

        tracing::debug!(
            host = config.host.as_deref().unwrap_or("<unset>"),
            database = config.database.as_deref().unwrap_or("<unset>"),
            max_connections,
            "database handle created"
        );

        Self { config, pool }
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    /// Borrow the pool for querying.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::MissingConfig`] when any `DB_*` variable was unset
    /// or empty at construction.
    pub fn pool(&self) -> Result<&PgPool, DbError> {
        self.config.validate()?;
        Ok(&self.pool)
    }

    /// Run `SELECT 1` to prove the backend is reachable with these credentials.
    pub async fn ping(&self) -> Result<(), DbError> {
        let pool = self.pool()?;
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }

    /// Close every pooled connection. Later queries fail with `PoolClosed`.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Initialize the process-wide handle with an explicit configuration.
///
/// Meant to be called once at startup.
///
/// # Errors
///
/// Returns [`DbError::AlreadyInitialized`] if the handle already exists,
/// whether it came from an earlier `init` or from [`global`].
pub fn init(config: DbConfig) -> Result<&'static Database, DbError> {
    let mut created = false;
    let db = DATABASE.get_or_init(|| {
        created = true;
        Database::new(config)
    });

    if created {
        tracing::info!("database handle initialized");
        Ok(db)
    } else {
        Err(DbError::AlreadyInitialized)
    }
}

/// The process-wide handle, built from the environment on first access.
pub fn global() -> &'static Database {
    DATABASE.get_or_init(|| Database::new(DbConfig::from_env()))
}
