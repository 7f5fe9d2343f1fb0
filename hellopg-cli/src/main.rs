//! hellopg CLI
//!
//! - `serve`: run the HTTP server exposing `GET /`
//! - `db-check`: verify the `DB_*` environment reaches a PostgreSQL server

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use commands::serve::ServeArgs;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "hellopg",
    author,
    version,
    about = "Greeting HTTP server with a shared PostgreSQL handle"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),

    /// Check connectivity to the database configured by DB_HOST, DB_USER, DB_PASS, DB_NAME
    DbCheck,
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_files = config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug })?;
    config::log_loaded(&env_files);

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
        Commands::DbCheck => commands::db_check::run_db_check().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["hellopg", "serve"]).unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert!(!args.cors_permissive);
                assert!(!args.strict_config);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn serve_rejects_bad_bind_address() {
        assert!(Cli::try_parse_from(["hellopg", "serve", "--bind", "not-an-addr"]).is_err());
    }
}
