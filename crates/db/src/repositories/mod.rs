//! Repository implementations for data access.
//!
//! Repositories implement the ports declared in `cambio-core`, hiding the
//! storage details from the rest of the application.

pub mod currency;

pub use currency::CurrencyStore;
