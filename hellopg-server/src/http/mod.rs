//! HTTP server layer
//!
//! Axum server with:
//! - the greeting router mounted at `/`
//! - CORS (localhost only by default)
//! - Request tracing
//! - Graceful shutdown

pub mod routes;
pub mod server;

pub use server::{build_router, run_server, ServerConfig};
