//! Domain validation and application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Caller-input faults raised by the money and currency kernel.
///
/// Every variant is deterministic: retrying with the same input fails the
/// same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Currency code missing.
    #[error("The incoming currency is empty")]
    EmptyCurrency,

    /// Currency code is not three ASCII letters.
    #[error("The incoming currency '{0}' is not a valid ISO format")]
    InvalidIsoCode(String),

    /// Amount below zero.
    #[error("The incoming value is less than 0")]
    NegativeValue,

    /// Multiply/divide factor below zero.
    #[error("The target number is less than 0")]
    NegativeFactor,

    /// Divide by a zero factor.
    #[error("The target number must not be 0 when dividing")]
    DivisionByZero,

    /// Result does not fit in a decimal.
    #[error("The resulting amount is out of range")]
    AmountOverflow,

    /// Operand money uses another currency.
    #[error("The target money has a different currency: {0}")]
    CurrencyMismatch(String),

    /// Discount larger than the available amount.
    #[error("The target money {target} is greater than current money {current}")]
    InsufficientFunds {
        /// Rendering of the money being discounted.
        target: String,
        /// Rendering of the money being discounted from.
        current: String,
    },

    /// Currency display name missing.
    #[error("The incoming name is empty")]
    EmptyName,

    /// USD rate below zero.
    #[error("The incoming usdRate is less than 0")]
    NegativeRate,
}

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication failed.
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Conflict (e.g., duplicate currency).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Unauthorized(_) => 401,
            Self::Validation(_) => 400,
            Self::Conflict(_) => 409,
            Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// True for faults caused by the caller's input.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}
