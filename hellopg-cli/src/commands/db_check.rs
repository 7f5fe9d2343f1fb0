//! Connectivity probe for the configured database

use anyhow::{Context, Result};

use hellopg_server::db::{self, DbConfig};

/// Initialize the shared handle from the environment and run `SELECT 1`.
pub async fn run_db_check() -> Result<()> {
    let config = DbConfig::from_env();
    let host = config.host.clone().unwrap_or_default();
    let name = config.database.clone().unwrap_or_default();

    let database = db::init(config).context("Failed to initialize database handle")?;

    let result = database
        .ping()
        .await
        .with_context(|| format!("Database check failed for '{}' on '{}'", name, host));
    database.close().await;
    result?;

    println!("ok: connected to '{}' on '{}'", name, host);
    Ok(())
}
