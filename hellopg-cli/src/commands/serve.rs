//! HTTP server command
//!
//! Initializes the shared database handle, then serves the greeting router.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use hellopg_server::db::{self, DbConfig};
use hellopg_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "HELLOPG_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Refuse to start unless DB_HOST, DB_USER, DB_PASS and DB_NAME are all set
    #[arg(long)]
    pub strict_config: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = DbConfig::from_env();

    if args.strict_config {
        db_config
            .validate()
            .context("Database configuration incomplete")?;
    } else {
        let missing = db_config.missing();
        if !missing.is_empty() {
            tracing::warn!(
                missing = %missing.join(", "),
                "Database configuration incomplete; queries will fail on first use"
            );
        }
    }

    let database = db::init(db_config).context("Failed to initialize database handle")?;

    tracing::info!("Starting hellopg server on {}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    let served = run_server(config).await.context("Server error");

    database.close().await;
    served
}
