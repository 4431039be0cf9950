//! Request extractors.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use cambio_shared::AppError;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::ApiError;

/// JSON body that is deserialized and then field-validated.
///
/// Malformed bodies and failed field rules both become 400 responses before
/// the handler runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        value
            .validate()
            .map_err(|errors| AppError::Validation(errors.to_string()))?;
        Ok(Self(value))
    }
}
