//! Common types used across the application.

pub mod amount;
pub mod code;
pub mod money;

#[cfg(test)]
mod money_props;

pub use code::CurrencyCode;
pub use money::{Money, round_amount};
