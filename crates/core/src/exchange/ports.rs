//! Boundaries the application service depends on.

use async_trait::async_trait;
use cambio_shared::{AppResult, CurrencyCode, Money};

use crate::currency::Currency;

/// Source of truth for which currencies exist.
///
/// Concurrent mutation semantics are left to the implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CurrencyRepository: Send + Sync {
    /// Every stored currency, in a stable order.
    async fn find_all(&self) -> AppResult<Vec<Currency>>;

    /// Stores the currency unless its code is already present.
    async fn save(&self, currency: Currency) -> AppResult<()>;

    /// Whether a currency with this code is stored.
    async fn exists(&self, iso_code: &CurrencyCode) -> AppResult<bool>;
}

/// Converts money into several target currencies.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CurrencyExchanger: Send + Sync {
    /// One result per target, in target order.
    async fn exchange(
        &self,
        money: &Money,
        source: &Currency,
        targets: &[Currency],
    ) -> AppResult<Vec<Money>>;
}
