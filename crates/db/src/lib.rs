//! Storage layer for Cambio.
//!
//! This crate provides:
//! - The in-memory `CurrencyStore` implementing `CurrencyRepository`
//! - Startup seeding from the configured currency table

pub mod repositories;

pub use repositories::CurrencyStore;
