//! # HTTP Routes
//!
//! ## Router Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Router<AppState>                               │
//! │                                                                         │
//! │  CatchPanicLayer ─► TraceLayer ─► route                                │
//! │                                                                         │
//! │  /health        health check                                           │
//! │  /products/...  products::routes()                                     │
//! │  /carts/...     carts::routes()                                        │
//! │  /users/...     users::routes()                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers run their repository call synchronously and only encode the
//! returned copy, so no lock is ever held across an `.await`.

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::error::handle_panic;
use crate::state::AppState;

pub mod carts;
pub mod products;
pub mod query;
pub mod users;

/// Builds the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(products::routes())
        .merge(carts::routes())
        .merge(users::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
