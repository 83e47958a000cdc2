//! # Shopfront API
//!
//! REST server for products, orders and order items.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Request Path                                    │
//! │                                                                         │
//! │  HTTP ──► TraceLayer ──► /health ─────────────────────► Database ping   │
//! │                    │                                                    │
//! │                    └───► /api/* ──► require_auth ──► handler            │
//! │                                      (bearer JWT)       │               │
//! │                                                         ▼               │
//! │                                         db.products() / orders() / ...  │
//! │                                                         │               │
//! │                                                         ▼               │
//! │                                          Option / DbError ──► status    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `HTTP_HOST` - Interface to bind (default: 0.0.0.0)
//! - `HTTP_PORT` - HTTP server port (default: 8080)
//! - `DATABASE_PATH` - SQLite file (default: ./shopfront.db)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `JWT_SECRET` - Secret for verifying bearer tokens

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;

use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

pub use auth::{Caller, TokenVerifier};
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult, ErrorCode};

use shop_db::Database;

/// Shared application state.
///
/// Both fields are cheap handles; axum clones the state per request.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub tokens: TokenVerifier,
}

impl AppState {
    pub fn new(db: Database, tokens: TokenVerifier) -> Self {
        AppState { db, tokens }
    }
}

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/products",
            get(routes::products::list).post(routes::products::create),
        )
        .route(
            "/products/{id}",
            get(routes::products::get)
                .put(routes::products::update)
                .delete(routes::products::delete),
        )
        .route(
            "/orders",
            get(routes::orders::list).post(routes::orders::create),
        )
        .route(
            "/orders/{id}",
            get(routes::orders::get)
                .put(routes::orders::update)
                .delete(routes::orders::delete),
        )
        .route(
            "/order-items",
            get(routes::order_items::list).post(routes::order_items::create),
        )
        .route(
            "/order-items/{id}",
            get(routes::order_items::get)
                .put(routes::order_items::update)
                .delete(routes::order_items::delete),
        )
        .route_layer(middleware::from_fn_with_state(
            state.tokens.clone(),
            auth::require_auth,
        ));

    Router::new()
        .route("/health", get(routes::health::check))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
