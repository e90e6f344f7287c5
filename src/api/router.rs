//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`.
//!
//! Middleware stack (outermost → innermost):
//! 1. Access log → 2. Cache-Control: no-store

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::api::endpoints;
use crate::api::error::ApiError;
use crate::api::middleware;
use crate::api::types::ApiContext;
use crate::core_state::CoreState;

/// Build the record API router.
pub fn api_router(core: Arc<CoreState>) -> Router {
    build_router(ApiContext::new(core))
}

fn build_router(ctx: ApiContext) -> Router {
    // NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route(
            "/pacient",
            get(endpoints::patients::list).post(endpoints::patients::create),
        )
        .route(
            "/pacient/:id",
            get(endpoints::patients::detail)
                .put(endpoints::patients::update)
                .delete(endpoints::patients::delete),
        )
        .route(
            "/vaccine",
            get(endpoints::vaccines::list).post(endpoints::vaccines::create),
        )
        .route(
            "/vaccine/:id",
            get(endpoints::vaccines::detail)
                .put(endpoints::vaccines::update)
                .delete(endpoints::vaccines::delete),
        )
        .route(
            "/dose",
            get(endpoints::doses::list).post(endpoints::doses::create),
        )
        .route(
            "/dose/:id",
            get(endpoints::doses::detail)
                .put(endpoints::doses::update)
                .delete(endpoints::doses::delete),
        )
        .with_state(ctx);

    // Layers are applied from bottom (innermost) to top (outermost)
    Router::new()
        .nest("/api", api)
        .fallback(route_not_found)
        .layer(axum::middleware::from_fn(middleware::headers::no_store))
        .layer(axum::middleware::from_fn(middleware::access::log_access))
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found".into())
}
