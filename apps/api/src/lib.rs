//! # bazaar-api: REST Service for Bazaar
//!
//! JSON over HTTP for the products, carts and users held by
//! [`bazaar_store::Store`].
//!
//! ## Module Organization
//!
//! - [`config`] - `ApiConfig`: defaults, TOML file, `BAZAAR_*` overrides
//! - [`routes`] - Router and handlers per entity kind
//! - [`error`] - `ApiError` and its HTTP status mapping
//! - [`state`] - Handler state wrapping the shared store
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bazaar_api::{app, AppState};
//! use bazaar_store::Store;
//!
//! let router = app(AppState::new(Store::seeded()?));
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult, ErrorCode};
pub use routes::app;
pub use state::AppState;
