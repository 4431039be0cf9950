//! In-process exchanger backed by the domain services.

use async_trait::async_trait;
use cambio_shared::{AppResult, Money};
use tracing::warn;

use super::multi::MultiExchangeService;
use super::ports::CurrencyExchanger;
use crate::currency::Currency;

/// Runs [`MultiExchangeService`] in the calling task.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalCurrencyExchanger {
    multi: MultiExchangeService,
}

impl LocalCurrencyExchanger {
    /// Wraps the given multi-target service.
    #[must_use]
    pub const fn new(multi: MultiExchangeService) -> Self {
        Self { multi }
    }
}

#[async_trait]
impl CurrencyExchanger for LocalCurrencyExchanger {
    async fn exchange(
        &self,
        money: &Money,
        source: &Currency,
        targets: &[Currency],
    ) -> AppResult<Vec<Money>> {
        self.multi.exchange(money, source, targets).map_err(|e| {
            let targets: Vec<&str> = targets.iter().map(|t| t.iso_code().as_str()).collect();
            warn!(
                error = %e,
                money = %money,
                source = %source.iso_code(),
                ?targets,
                "Error while exchanging currencies"
            );
            e.into()
        })
    }
}
