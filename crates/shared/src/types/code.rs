//! Three-letter currency codes.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// ISO-like currency code: exactly three ASCII letters, stored uppercase.
///
/// Any well-formed code is accepted here. Restricting codes to a closed set is
/// a configuration concern (see `CodePolicy`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Code of the pivot currency.
    pub const USD: &'static str = "USD";

    /// Validates and normalizes a raw code.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.is_empty() {
            return Err(ValidationError::EmptyCurrency);
        }
        if raw.chars().count() != 3 || !raw.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::InvalidIsoCode(raw.to_string()));
        }
        Ok(Self(raw.to_ascii_uppercase()))
    }

    /// The US dollar code.
    #[must_use]
    pub fn usd() -> Self {
        Self(Self::USD.to_string())
    }

    /// Returns true for the pivot currency.
    #[must_use]
    pub fn is_usd(&self) -> bool {
        self.0 == Self::USD
    }

    /// Borrow the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl PartialEq<str> for CurrencyCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CurrencyCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
