//! Liveness endpoint.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

/// Liveness response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// "healthy" when the currency table can be read.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Number of currencies available for exchange.
    pub known_currencies: usize,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let (status, known_currencies) = match state.currencies.list_currencies().await {
        Ok(currencies) => ("healthy", currencies.len()),
        Err(_) => ("degraded", 0),
    };
    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        known_currencies,
    })
}

/// Creates the public health route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    use crate::create_router;
    use crate::test_support::{body_json, open_state};

    #[tokio::test]
    async fn test_health_reports_currency_count() {
        let response = create_router(open_state())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["knownCurrencies"], 4);
    }
}
