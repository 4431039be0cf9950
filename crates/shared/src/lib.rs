//! Shared types, errors, and configuration for Cambio.
//!
//! This crate provides common types used across all other crates:
//! - `CurrencyCode` and the immutable `Money` value object
//! - Domain validation and application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, AuthConfig, CodePolicy, CurrenciesConfig, SeedCurrency, ServerConfig};
pub use error::{AppError, AppResult, ValidationError};
pub use types::{CurrencyCode, Money, amount};
