//! Single-target exchange.

use cambio_shared::{Money, ValidationError};

use crate::currency::Currency;

/// Converts money from one currency to another via USD.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExchangeService;

impl ExchangeService {
    /// Creates the service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Computes `target.exchange_from_usd(source.exchange_to_usd(money))`.
    ///
    /// Errors from either leg are returned unchanged.
    pub fn exchange(
        &self,
        money: &Money,
        source: &Currency,
        target: &Currency,
    ) -> Result<Money, ValidationError> {
        let usd = source.exchange_to_usd(money)?;
        target.exchange_from_usd(&usd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_exchange_brl_to_ars() {
        let brl = Currency::new("BRL", "Real", dec!(0.19)).unwrap();
        let ars = Currency::new("ARS", "Peso Argentino", dec!(0.005)).unwrap();
        let money = Money::new("BRL", dec!(183.26)).unwrap();

        let result = ExchangeService::new().exchange(&money, &brl, &ars).unwrap();
        assert_eq!(result, Money::new("ARS", dec!(6964)).unwrap());
    }

    #[test]
    fn test_exchange_to_same_currency() {
        let brl = Currency::new("BRL", "Real", dec!(0.19)).unwrap();
        let money = Money::new("BRL", dec!(10)).unwrap();

        let result = ExchangeService::new().exchange(&money, &brl, &brl).unwrap();
        assert_eq!(result, money);
    }

    #[test]
    fn test_exchange_propagates_mismatch() {
        let brl = Currency::new("BRL", "Real", dec!(0.19)).unwrap();
        let ars = Currency::new("ARS", "Peso Argentino", dec!(0.005)).unwrap();
        let money = Money::new("PEN", dec!(10)).unwrap();

        assert_eq!(
            ExchangeService::new().exchange(&money, &brl, &ars),
            Err(ValidationError::CurrencyMismatch("PEN$10".into()))
        );
    }
}
