//! Immutable money value object.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal` and every operation returns a new value.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::{amount, code::CurrencyCode};
use crate::error::ValidationError;

/// Decimal places kept on every amount.
pub const AMOUNT_DECIMAL_PLACES: u32 = 2;

/// Rounds an amount to two decimals, half away from zero.
///
/// Rounding happens once, directly at the second decimal: 12.335 becomes
/// 12.34 while 12.3335 becomes 12.33.
#[must_use]
pub fn round_amount(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(AMOUNT_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// A non-negative amount tagged with a currency code.
///
/// Equality is structural: same code and numerically equal value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyParts")]
pub struct Money {
    currency: CurrencyCode,
    #[serde(serialize_with = "amount::serialize")]
    value: Decimal,
}

#[derive(Deserialize)]
struct MoneyParts {
    currency: String,
    #[serde(deserialize_with = "amount::deserialize")]
    value: Decimal,
}

impl TryFrom<MoneyParts> for Money {
    type Error = ValidationError;

    fn try_from(parts: MoneyParts) -> Result<Self, Self::Error> {
        Self::new(&parts.currency, parts.value)
    }
}

impl Money {
    /// Creates money from a raw code, validating both fields.
    pub fn new(currency: &str, value: Decimal) -> Result<Self, ValidationError> {
        Self::with_code(CurrencyCode::parse(currency)?, value)
    }

    /// Creates money from an already validated code.
    pub fn with_code(currency: CurrencyCode, value: Decimal) -> Result<Self, ValidationError> {
        if value < Decimal::ZERO {
            return Err(ValidationError::NegativeValue);
        }
        Ok(Self {
            currency,
            value: round_amount(value),
        })
    }

    /// Zero in the given currency.
    #[must_use]
    pub fn zero(currency: CurrencyCode) -> Self {
        Self {
            currency,
            value: Decimal::ZERO,
        }
    }

    /// Currency tag.
    #[must_use]
    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    /// Rounded amount.
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Same value relabeled with another currency. No conversion math.
    #[must_use]
    pub fn to_currency(&self, currency: CurrencyCode) -> Self {
        Self {
            currency,
            value: self.value,
        }
    }

    /// Sum of two amounts in the same currency.
    pub fn plus(&self, other: &Self) -> Result<Self, ValidationError> {
        if other.currency != self.currency {
            return Err(ValidationError::CurrencyMismatch(other.to_string()));
        }
        let sum = self
            .value
            .checked_add(other.value)
            .ok_or(ValidationError::AmountOverflow)?;
        Self::with_code(self.currency.clone(), sum)
    }

    /// Subtracts `other`, which must not exceed this amount.
    pub fn discount(&self, other: &Self) -> Result<Self, ValidationError> {
        if other.currency != self.currency {
            return Err(ValidationError::CurrencyMismatch(other.currency.to_string()));
        }
        if other.value > self.value {
            return Err(ValidationError::InsufficientFunds {
                target: other.to_string(),
                current: self.to_string(),
            });
        }
        Self::with_code(self.currency.clone(), self.value - other.value)
    }

    /// Scales the amount by a non-negative factor.
    pub fn multiply(&self, factor: Decimal) -> Result<Self, ValidationError> {
        if factor < Decimal::ZERO {
            return Err(ValidationError::NegativeFactor);
        }
        let product = self
            .value
            .checked_mul(factor)
            .ok_or(ValidationError::AmountOverflow)?;
        Self::with_code(self.currency.clone(), product)
    }

    /// Divides the amount by a positive factor.
    pub fn divide(&self, factor: Decimal) -> Result<Self, ValidationError> {
        if factor < Decimal::ZERO {
            return Err(ValidationError::NegativeFactor);
        }
        if factor.is_zero() {
            return Err(ValidationError::DivisionByZero);
        }
        let quotient = self
            .value
            .checked_div(factor)
            .ok_or(ValidationError::AmountOverflow)?;
        Self::with_code(self.currency.clone(), quotient)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}${}", self.currency, self.value.normalize())
    }
}
