//! Property-based tests for currency conversions.
//!
//! - USD round trip reconstructs the amount within rounding error
//! - Conversions never produce negative money
//! - Multi-target exchange answers in target order

use cambio_shared::Money;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::entity::Currency;
use crate::exchange::{multi::MultiExchangeService, single::ExchangeService};

/// Strategy to generate amounts (0.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive USD rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate up to eight target currencies, codes may repeat.
fn targets() -> impl Strategy<Value = Vec<Currency>> {
    prop::collection::vec(("[A-Z]{3}", positive_rate()), 0..8).prop_map(|rows| {
        rows.into_iter()
            .map(|(code, rate)| Currency::new(&code, "Target", rate).unwrap())
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Going to USD and back loses at most one rounding step on each leg:
    /// half a cent of USD scaled by 1/rate, plus half a cent (and a little
    /// slack for the division's last digit).
    #[test]
    fn prop_usd_round_trip(value in amount(), rate in positive_rate()) {
        let currency = Currency::new("BRL", "Real", rate).unwrap();
        let money = Money::new("BRL", value).unwrap();

        let usd = currency.exchange_to_usd(&money).unwrap();
        let back = currency.exchange_from_usd(&usd).unwrap();

        let tolerance = Decimal::new(5, 3) / rate + Decimal::new(6, 3);
        prop_assert_eq!(back.currency(), money.currency());
        prop_assert!(
            (back.value() - money.value()).abs() <= tolerance,
            "{} -> {} -> {} exceeds {}", money, usd, back, tolerance
        );
    }

    /// Converted amounts stay non-negative and in the right currency.
    #[test]
    fn prop_conversion_is_non_negative(value in amount(), rate in positive_rate()) {
        let currency = Currency::new("ARS", "Peso", rate).unwrap();
        let money = Money::new("ARS", value).unwrap();

        let usd = currency.exchange_to_usd(&money).unwrap();
        prop_assert!(usd.currency().is_usd());
        prop_assert!(usd.value() >= Decimal::ZERO);

        let back = currency.exchange_from_usd(&usd).unwrap();
        prop_assert_eq!(back.currency().as_str(), "ARS");
        prop_assert!(back.value() >= Decimal::ZERO);
    }

    /// Every target gets exactly one result, at the same position, equal to
    /// converting into that target alone.
    #[test]
    fn prop_multi_exchange_preserves_order(
        value in amount(),
        rate in positive_rate(),
        targets in targets(),
    ) {
        let source = Currency::new("BRL", "Real", rate).unwrap();
        let money = Money::new("BRL", value).unwrap();
        let single = ExchangeService::new();

        let results = MultiExchangeService::new(single)
            .exchange(&money, &source, &targets)
            .unwrap();

        prop_assert_eq!(results.len(), targets.len());
        for (result, target) in results.iter().zip(&targets) {
            prop_assert_eq!(result.currency(), target.iso_code());
            prop_assert_eq!(result, &single.exchange(&money, &source, target).unwrap());
        }
    }
}
