//! Greeting endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Body of `GET /`
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Greeting {
    pub msg: &'static str,
}

/// GET /
async fn hello() -> Json<Greeting> {
    Json(Greeting { msg: "Hello World" })
}

/// Root routes. Only `GET /` is registered; everything else falls through
/// to whatever the embedding router does.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(hello))
}
