//! Product catalog REST API.
//!
//! A single-resource CRUD service over an in-memory product store, with
//! category filtering, pagination, name search and per-category statistics.
//! Every request passes a logging interceptor and a static bearer-token
//! check before it reaches a handler.

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

use axum::{middleware, routing::get, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::app::products::{handler, service::SharedStore};
use crate::core::middleware::{handle_panic, request_logging, require_bearer_token};

/// Assembles the full router with the interceptor chain applied.
///
/// Layers added later run first, so the request logger sits outside the
/// auth check (rejected requests still get logged) and the panic handler
/// sits innermost so only handler faults reach it. Axum gives literal
/// segments precedence over `:id`, which keeps `/search` and `/stats`
/// from being captured as product ids.
pub fn build_router(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(handler::welcome))
        .route(
            "/api/products",
            get(handler::list_products).post(handler::create_product),
        )
        .route("/api/products/search", get(handler::search_products))
        .route("/api/products/stats", get(handler::product_stats))
        .route(
            "/api/products/:id",
            get(handler::get_product)
                .put(handler::update_product)
                .delete(handler::delete_product),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(require_bearer_token))
        .layer(middleware::from_fn(request_logging))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
