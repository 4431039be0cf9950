//! Core business logic for Cambio.
//!
//! This crate contains pure business logic with ZERO web or storage dependencies.
//!
//! # Modules
//!
//! - `currency` - The `Currency` entity and its USD pivot conversions
//! - `exchange` - Single and multi-target exchange services, ports, and the
//!   application service that orchestrates them

pub mod currency;
pub mod exchange;

pub use currency::{CodeRules, Currency};
pub use exchange::{
    CreateCurrencyInput, CurrencyAppService, CurrencyExchanger, CurrencyRepository,
    ExchangeInput, ExchangeService, LocalCurrencyExchanger, MultiExchangeService,
};
