//! hellopg-server: greeting route and shared PostgreSQL handle
//!
//! Two independent pieces:
//! - `http`: a mountable router answering `GET /` with a JSON greeting,
//!   plus the server runner that serves it
//! - `db`: environment-driven connection configuration and the
//!   process-wide database handle

pub mod db;
pub mod error;
pub mod http;

pub use db::{Database, DbConfig};
pub use error::{DbError, ServerError};
pub use http::{run_server, ServerConfig};
