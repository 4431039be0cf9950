//! Currency entity pegged to USD.
//!
//! USD is the pivot: converting between any two currencies is one multiply
//! into USD followed by one divide out of it, so only one rate per currency
//! is stored.

use cambio_shared::{CurrencyCode, Money, ValidationError, amount};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A known currency and the amount of USD equal to one unit of it.
///
/// Identity is the ISO code: two currencies with the same code are the same
/// currency regardless of name or rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "CurrencyParts")]
pub struct Currency {
    iso_code: CurrencyCode,
    name: String,
    #[serde(serialize_with = "amount::serialize")]
    usd_rate: Decimal,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CurrencyParts {
    iso_code: String,
    name: String,
    #[serde(deserialize_with = "amount::deserialize")]
    usd_rate: Decimal,
}

impl TryFrom<CurrencyParts> for Currency {
    type Error = ValidationError;

    fn try_from(parts: CurrencyParts) -> Result<Self, Self::Error> {
        Self::new(&parts.iso_code, parts.name, parts.usd_rate)
    }
}

impl Currency {
    /// Creates a currency, validating code, name and rate in that order.
    pub fn new(
        iso_code: &str,
        name: impl Into<String>,
        usd_rate: Decimal,
    ) -> Result<Self, ValidationError> {
        let iso_code = CurrencyCode::parse(iso_code)?;
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if usd_rate < Decimal::ZERO {
            return Err(ValidationError::NegativeRate);
        }
        Ok(Self {
            iso_code,
            name,
            usd_rate,
        })
    }

    /// ISO code.
    #[must_use]
    pub fn iso_code(&self) -> &CurrencyCode {
        &self.iso_code
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// USD per unit of this currency.
    #[must_use]
    pub fn usd_rate(&self) -> Decimal {
        self.usd_rate
    }

    /// True when both currencies share an ISO code.
    #[must_use]
    pub fn is_equal_to(&self, other: &Self) -> bool {
        self.iso_code == other.iso_code
    }

    /// Converts money held in this currency into USD.
    pub fn exchange_to_usd(&self, money: &Money) -> Result<Money, ValidationError> {
        if money.currency() != &self.iso_code {
            return Err(ValidationError::CurrencyMismatch(money.to_string()));
        }
        Ok(money.multiply(self.usd_rate)?.to_currency(CurrencyCode::usd()))
    }

    /// Converts USD money into this currency.
    pub fn exchange_from_usd(&self, money: &Money) -> Result<Money, ValidationError> {
        if !money.currency().is_usd() {
            return Err(ValidationError::CurrencyMismatch(money.to_string()));
        }
        Ok(money.divide(self.usd_rate)?.to_currency(self.iso_code.clone()))
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal_to(other)
    }
}

impl Eq for Currency {}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.iso_code, self.name)
    }
}
