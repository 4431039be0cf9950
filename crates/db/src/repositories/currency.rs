//! In-memory currency repository.

use async_trait::async_trait;
use cambio_core::{Currency, CurrencyRepository};
use cambio_shared::{AppResult, CurrencyCode, SeedCurrency, ValidationError};
use tokio::sync::RwLock;
use tracing::debug;

/// Keyed store of currencies with insert-if-absent semantics.
///
/// Insertion order is kept so listings are stable. Each call is atomic under
/// the lock; no ordering is promised between concurrent writers.
#[derive(Debug, Default)]
pub struct CurrencyStore {
    currencies: RwLock<Vec<Currency>>,
}

impl CurrencyStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store filled from seed rows, in row order.
    ///
    /// Rows repeating an earlier code are ignored.
    pub fn seeded(rows: &[SeedCurrency]) -> Result<Self, ValidationError> {
        let mut currencies: Vec<Currency> = Vec::with_capacity(rows.len());
        for row in rows {
            let currency = Currency::new(&row.iso_code, row.name.clone(), row.usd_rate)?;
            if !currencies.iter().any(|c| c.is_equal_to(&currency)) {
                currencies.push(currency);
            }
        }
        debug!(count = currencies.len(), "Currency store seeded");
        Ok(Self {
            currencies: RwLock::new(currencies),
        })
    }

    /// Inserts the currency unless its code is present. Returns whether it was
    /// inserted.
    pub async fn insert_if_absent(&self, currency: Currency) -> bool {
        let mut currencies = self.currencies.write().await;
        if currencies.iter().any(|c| c.is_equal_to(&currency)) {
            return false;
        }
        currencies.push(currency);
        true
    }

    /// Number of stored currencies.
    pub async fn len(&self) -> usize {
        self.currencies.read().await.len()
    }

    /// True when nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.currencies.read().await.is_empty()
    }
}

#[async_trait]
impl CurrencyRepository for CurrencyStore {
    async fn find_all(&self) -> AppResult<Vec<Currency>> {
        Ok(self.currencies.read().await.clone())
    }

    async fn save(&self, currency: Currency) -> AppResult<()> {
        self.insert_if_absent(currency).await;
        Ok(())
    }

    async fn exists(&self, iso_code: &CurrencyCode) -> AppResult<bool> {
        Ok(self
            .currencies
            .read()
            .await
            .iter()
            .any(|c| c.iso_code() == iso_code))
    }
}
