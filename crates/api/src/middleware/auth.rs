//! HTTP Basic authentication middleware for protected routes.

use axum::{
    extract::{Request, State},
    http::{HeaderValue, header::WWW_AUTHENTICATE},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Basic};
use cambio_shared::AppError;
use tracing::warn;

use crate::{AppState, error::ApiError};

/// Checks HTTP Basic credentials against the configured pair.
///
/// When no credentials are configured every request passes through.
pub async fn basic_auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some((username, password)) = state.auth.credentials() else {
        return next.run(request).await;
    };

    let Some(Authorization(basic)) = request.headers().typed_get::<Authorization<Basic>>() else {
        return unauthorized("Authorization header with Basic credentials is required");
    };

    if constant_time_eq(basic.username().as_bytes(), username.as_bytes())
        && constant_time_eq(basic.password().as_bytes(), password.as_bytes())
    {
        next.run(request).await
    } else {
        warn!(username = basic.username(), "Rejected Basic credentials");
        unauthorized("Invalid username or password")
    }
}

fn unauthorized(message: &str) -> Response {
    let mut response = ApiError(AppError::Unauthorized(message.to_string())).into_response();
    response.headers_mut().insert(
        WWW_AUTHENTICATE,
        HeaderValue::from_static(r#"Basic realm="cambio""#),
    );
    response
}

/// Byte comparison whose running time depends only on the lengths.
fn constant_time_eq(left: &[u8], right: &[u8]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .fold(0_u8, |diff, (a, b)| diff | (a ^ b))
            == 0
}
