//! Exchange into many targets at once.

use cambio_shared::{Money, ValidationError};

use super::single::ExchangeService;
use crate::currency::Currency;

/// Applies [`ExchangeService`] across an ordered list of targets.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiExchangeService {
    single: ExchangeService,
}

impl MultiExchangeService {
    /// Creates the service around a single-target exchanger.
    #[must_use]
    pub const fn new(single: ExchangeService) -> Self {
        Self { single }
    }

    /// One result per target, in target order.
    ///
    /// Fails on the first conversion error; no partial results are returned.
    pub fn exchange(
        &self,
        money: &Money,
        source: &Currency,
        targets: &[Currency],
    ) -> Result<Vec<Money>, ValidationError> {
        targets
            .iter()
            .map(|target| self.single.exchange(money, source, target))
            .collect()
    }
}
