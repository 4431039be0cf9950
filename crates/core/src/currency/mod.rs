//! Currencies and their USD exchange rates.

pub mod codes;
pub mod entity;

#[cfg(test)]
mod props;

pub use codes::CodeRules;
pub use entity::Currency;
