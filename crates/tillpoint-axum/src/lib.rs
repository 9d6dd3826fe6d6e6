//! Axum web adapter for tillpoint.
//!
//! Serves the point-of-sale index page at `/`, the JSON API under `/api`
//! and a server-sent event stream for the kitchen display.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dev-dependencies only used by the integration tests
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod sse;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use extract::ApiJson;
pub use routes::create_router;
pub use state::AppState;
