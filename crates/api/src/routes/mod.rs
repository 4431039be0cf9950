//! API route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::basic_auth_middleware};

pub mod currencies;
pub mod health;

/// Creates the API router; currency routes sit behind the auth middleware.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    let protected_routes = Router::new()
        .merge(currencies::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            basic_auth_middleware,
        ));

    Router::new()
        .merge(health::routes())
        .merge(protected_routes)
}
