//! Catalog API
//!
//! Product catalog with username/password accounts and revocable bearer
//! tokens.
//!
//! ## REST Endpoints
//!
//! - `GET /products` - List products
//! - `GET /products/{id}` - Get a product
//! - `POST /products` - Create a product (auth)
//! - `PUT /products/{id}` - Replace a product (auth)
//! - `DELETE /products/{id}` - Delete a product (auth)
//! - `POST /register` - Create an account
//! - `POST /login` - Exchange credentials for a token
//! - `POST /logout` - Revoke the presented token (auth)
//! - `GET /protected` - Echo the authenticated username (auth)
//!
//! ## Health Endpoints
//!
//! - `GET /health` - Liveness check
//! - `GET /ready` - Readiness check

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::handlers::{health, ready};
use crate::state::AppState;

/// Build the HTTP router with its middleware stack
pub fn build_router(state: AppState) -> Router {
    let request_timeout = state.config.request_timeout;

    let product_routes = Router::new()
        .route(
            "/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/products/{id}",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        );

    let auth_routes = Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/logout", post(handlers::logout))
        .route("/protected", get(handlers::protected));

    // Health routes (no timeout - must always respond quickly)
    let health_routes = Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready));

    // Build middleware stack (order matters - outermost first)
    let middleware = ServiceBuilder::new()
        // Request ID propagation (outermost)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        // Tracing with request details
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // CORS
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        // Request timeout (innermost - closest to handler)
        .layer(TimeoutLayer::new(request_timeout));

    Router::new()
        .merge(product_routes)
        .merge(auth_routes)
        .layer(middleware)
        .merge(health_routes) // Health routes without timeout
        .with_state(state)
}
