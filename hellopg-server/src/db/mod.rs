//! Database layer - environment configuration and the shared handle
//!
//! - `DbConfig` is read from `DB_HOST`, `DB_USER`, `DB_PASS`, `DB_NAME`
//!   and never fails to construct
//! - `Database` owns a lazily connecting `PgPool`; nothing touches the
//!   network until a consumer uses it
//! - `init` / `global` hold the one process-wide instance

pub mod config;
pub mod handle;

pub use config::DbConfig;
pub use handle::{global, init, Database};
