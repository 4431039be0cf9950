//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes
//! - HTTP Basic authentication middleware
//! - Request extractors
//! - Error responses

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use cambio_core::{CurrencyAppService, LocalCurrencyExchanger};
use cambio_db::CurrencyStore;
use cambio_shared::AuthConfig;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// The application service as wired for this server.
pub type CurrencyService = CurrencyAppService<CurrencyStore, LocalCurrencyExchanger>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Currency application service.
    pub currencies: Arc<CurrencyService>,
    /// HTTP Basic credentials.
    pub auth: Arc<AuthConfig>,
}

impl AppState {
    /// Creates the state from its parts.
    pub fn new(currencies: CurrencyService, auth: AuthConfig) -> Self {
        Self {
            currencies: Arc::new(currencies),
            auth: Arc::new(auth),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
