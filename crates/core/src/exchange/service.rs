//! Application service: resolves requests into domain objects and back.

use std::sync::Arc;

use cambio_shared::{AppError, AppResult, Money};
use rust_decimal::Decimal;
use tracing::{error, info, warn};

use super::ports::{CurrencyExchanger, CurrencyRepository};
use crate::currency::{CodeRules, Currency};

/// Input for registering a currency.
#[derive(Debug, Clone)]
pub struct CreateCurrencyInput {
    /// Three-letter code.
    pub iso_code: String,
    /// Display name.
    pub name: String,
    /// USD per unit of the currency.
    pub usd_rate: Decimal,
}

/// Input for exchanging an amount into every other known currency.
#[derive(Debug, Clone)]
pub struct ExchangeInput {
    /// Code of the currency the amount is held in.
    pub source: String,
    /// Amount to convert.
    pub amount: Decimal,
}

/// Orchestrates the repository and the exchanger.
///
/// Both collaborators are passed in at construction; nothing is looked up at
/// runtime.
pub struct CurrencyAppService<R, E> {
    repository: Arc<R>,
    exchanger: Arc<E>,
    codes: CodeRules,
}

impl<R, E> Clone for CurrencyAppService<R, E> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            exchanger: Arc::clone(&self.exchanger),
            codes: self.codes.clone(),
        }
    }
}

impl<R, E> CurrencyAppService<R, E>
where
    R: CurrencyRepository,
    E: CurrencyExchanger,
{
    /// Composes the service.
    pub fn new(repository: Arc<R>, exchanger: Arc<E>, codes: CodeRules) -> Self {
        Self {
            repository,
            exchanger,
            codes,
        }
    }

    /// Registers a new currency. Existing codes are rejected.
    pub async fn create_currency(&self, input: CreateCurrencyInput) -> AppResult<Currency> {
        let result = self.try_create_currency(&input).await;
        if let Err(e) = &result {
            log_failure(e, "Error while creating currency", &input.iso_code);
        }
        result.map_err(|e| hide_internal(e, "Error while creating currency"))
    }

    async fn try_create_currency(&self, input: &CreateCurrencyInput) -> AppResult<Currency> {
        let code = self.codes.check(&input.iso_code)?;
        if self.repository.exists(&code).await? {
            return Err(AppError::Conflict(format!(
                "The currency {code} already exists"
            )));
        }

        let currency = Currency::new(code.as_str(), input.name.clone(), input.usd_rate)?;
        self.repository.save(currency.clone()).await?;

        info!(iso_code = %code, usd_rate = %currency.usd_rate(), "Currency created");
        Ok(currency)
    }

    /// Every known currency.
    pub async fn list_currencies(&self) -> AppResult<Vec<Currency>> {
        self.repository.find_all().await
    }

    /// Converts the amount into every known currency other than the source.
    ///
    /// Results follow repository order.
    pub async fn exchange(&self, input: ExchangeInput) -> AppResult<Vec<Money>> {
        let result = self.try_exchange(&input).await;
        if let Err(e) = &result {
            log_failure(e, "Error while exchanging currencies", &input.source);
        }
        result.map_err(|e| hide_internal(e, "Error while exchanging currencies"))
    }

    async fn try_exchange(&self, input: &ExchangeInput) -> AppResult<Vec<Money>> {
        let code = self.codes.check(&input.source)?;
        let money = Money::with_code(code.clone(), input.amount)?;

        let currencies = self.repository.find_all().await?;
        let source = currencies
            .iter()
            .find(|c| *c.iso_code() == code)
            .cloned()
            .ok_or_else(|| {
                AppError::Validation(format!("The {code} source currency does not exist"))
            })?;
        let targets: Vec<Currency> = currencies
            .into_iter()
            .filter(|c| !c.is_equal_to(&source))
            .collect();

        self.exchanger.exchange(&money, &source, &targets).await
    }
}

fn log_failure(err: &AppError, message: &str, code: &str) {
    if err.is_client_error() {
        warn!(error = %err, code, "{message}");
    } else {
        error!(error = %err, code, "{message}");
    }
}

/// Client errors pass through; anything else is replaced by a generic failure.
fn hide_internal(err: AppError, message: &str) -> AppError {
    if err.is_client_error() {
        err
    } else {
        AppError::Internal(message.to_string())
    }
}
