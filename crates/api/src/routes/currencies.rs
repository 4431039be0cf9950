//! Currency registration, listing and exchange routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use cambio_core::{CreateCurrencyInput, Currency, ExchangeInput};
use cambio_shared::{Money, amount};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use validator::Validate;

use crate::{AppState, error::ApiError, extractors::ValidatedJson};

/// Creates the currency routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/currencies", get(list_currencies).post(create_currency))
        .route("/currencies/exchange", post(exchange))
}

/// Request body for registering a currency.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCurrencyRequest {
    /// Three-letter code.
    #[validate(length(equal = 3, message = "isoCode must have 3 letters"))]
    pub iso_code: String,
    /// Display name.
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    /// USD per unit of the currency.
    #[serde(deserialize_with = "amount::deserialize")]
    #[validate(custom(function = "positive"))]
    pub usd_rate: Decimal,
}

/// Request body for an exchange.
#[derive(Debug, Deserialize, Validate)]
pub struct ExchangeRequest {
    /// Code of the currency the amount is held in.
    #[validate(length(equal = 3, message = "source must have 3 letters"))]
    pub source: String,
    /// Amount to convert.
    #[serde(deserialize_with = "amount::deserialize")]
    #[validate(custom(function = "positive"))]
    pub amount: Decimal,
}

/// Response for a currency.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyResponse {
    /// Three-letter code.
    pub iso_code: String,
    /// Display name.
    pub name: String,
    /// USD per unit of the currency.
    #[serde(serialize_with = "amount::serialize")]
    pub usd_rate: Decimal,
}

impl From<&Currency> for CurrencyResponse {
    fn from(currency: &Currency) -> Self {
        Self {
            iso_code: currency.iso_code().to_string(),
            name: currency.name().to_string(),
            usd_rate: currency.usd_rate(),
        }
    }
}

/// One converted amount.
#[derive(Debug, Serialize)]
pub struct MoneyResponse {
    /// Three-letter code.
    pub currency: String,
    /// Amount rounded to two decimals.
    #[serde(serialize_with = "amount::serialize")]
    pub value: Decimal,
}

impl From<&Money> for MoneyResponse {
    fn from(money: &Money) -> Self {
        Self {
            currency: money.currency().to_string(),
            value: money.value(),
        }
    }
}

fn positive(value: &Decimal) -> Result<(), validator::ValidationError> {
    if value.is_sign_positive() && !value.is_zero() {
        Ok(())
    } else {
        Err(validator::ValidationError::new("positive")
            .with_message("must be a positive number".into()))
    }
}

/// GET `/currencies` - List all currencies.
async fn list_currencies(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let currencies = state.currencies.list_currencies().await?;
    let response: Vec<CurrencyResponse> = currencies.iter().map(CurrencyResponse::from).collect();

    Ok((StatusCode::OK, Json(json!({ "currencies": response }))))
}

/// POST `/currencies` - Register a currency.
async fn create_currency(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCurrencyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!(iso_code = %payload.iso_code, "API request received to create currency");

    let currency = state
        .currencies
        .create_currency(CreateCurrencyInput {
            iso_code: payload.iso_code,
            name: payload.name,
            usd_rate: payload.usd_rate,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(CurrencyResponse::from(&currency))))
}

/// POST `/currencies/exchange` - Convert an amount into every other currency.
async fn exchange(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ExchangeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!(
        source = %payload.source,
        amount = %payload.amount,
        "API request received to exchange currencies"
    );

    let results = state
        .currencies
        .exchange(ExchangeInput {
            source: payload.source,
            amount: payload.amount,
        })
        .await?;
    let response: Vec<MoneyResponse> = results.iter().map(MoneyResponse::from).collect();

    Ok((StatusCode::CREATED, Json(response)))
}
