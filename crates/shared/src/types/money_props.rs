//! Property-based tests for the money value object.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::money::{Money, round_amount};
use crate::error::ValidationError;

/// Strategy to generate amounts with up to 4 decimals (0.0000 to 1,000,000.0000).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate well-formed, mixed-case codes.
fn code() -> impl Strategy<Value = String> {
    "[a-zA-Z]{3}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every constructed amount is non-negative, has at most 2 decimals and an
    /// uppercase code.
    #[test]
    fn prop_constructed_money_is_normalized(raw in code(), value in amount()) {
        let money = Money::new(&raw, value).unwrap();
        prop_assert!(money.value() >= Decimal::ZERO);
        prop_assert!(money.value().scale() <= 2);
        prop_assert_eq!(money.currency().as_str(), raw.to_ascii_uppercase());
        prop_assert_eq!(money.value(), round_amount(value));
    }

    /// Rounding twice changes nothing.
    #[test]
    fn prop_rounding_is_idempotent(value in amount()) {
        prop_assert_eq!(round_amount(round_amount(value)), round_amount(value));
    }

    /// Plus in one currency sums the rounded values.
    #[test]
    fn prop_plus_sums_values(a in amount(), b in amount()) {
        let left = Money::new("BRL", a).unwrap();
        let right = Money::new("BRL", b).unwrap();
        let sum = left.plus(&right).unwrap();
        prop_assert_eq!(sum.value(), left.value() + right.value());
        prop_assert_eq!(sum.currency(), left.currency());
    }

    /// Discount succeeds exactly when the discounted amount fits, and never
    /// goes negative.
    #[test]
    fn prop_discount_never_negative(a in amount(), b in amount()) {
        let left = Money::new("BRL", a).unwrap();
        let right = Money::new("BRL", b).unwrap();
        match left.discount(&right) {
            Ok(rest) => {
                prop_assert!(right.value() <= left.value());
                prop_assert!(rest.value() >= Decimal::ZERO);
                prop_assert_eq!(rest.plus(&right).unwrap(), left);
            }
            Err(err) => {
                prop_assert!(right.value() > left.value());
                let is_insufficient = matches!(err, ValidationError::InsufficientFunds { .. });
                prop_assert!(is_insufficient);
            }
        }
    }

    /// Mixing currencies is always rejected.
    #[test]
    fn prop_mismatched_currencies_rejected(a in amount(), b in amount()) {
        let brl = Money::new("BRL", a).unwrap();
        let ars = Money::new("ARS", b).unwrap();
        prop_assert!(brl.plus(&ars).is_err());
        prop_assert!(brl.discount(&ars).is_err());
    }
}
