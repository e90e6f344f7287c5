//! HTTP API for patient, vaccine and dose records.
//!
//! The router is composable — `api_router()` returns a `Router` that can be
//! mounted on any axum server instance. `server` owns the listener
//! lifecycle.

pub mod endpoints;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use router::api_router;
pub use server::{serve_until_shutdown, start_api_server_on, ApiServer, ServerError};
pub use types::ApiContext;
