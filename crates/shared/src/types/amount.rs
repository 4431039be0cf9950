//! JSON number encoding for decimal amounts.
//!
//! Amounts travel as plain JSON numbers: whole values without a fraction
//! (`380`, not `380.0`) and strings are rejected on the way in.
//!
//! ```ignore
//! #[serde(serialize_with = "amount::serialize", deserialize_with = "amount::deserialize")]
//! value: Decimal,
//! ```

use std::fmt;

use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{
    Deserializer, Serializer,
    de::{self, Visitor},
    ser,
};

/// Writes a decimal as the shortest JSON number that represents it.
pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let value = value.normalize();
    if value.scale() == 0
        && let Some(whole) = value.to_i64()
    {
        return serializer.serialize_i64(whole);
    }
    match value.to_f64() {
        Some(float) => serializer.serialize_f64(float),
        None => Err(ser::Error::custom(format!(
            "amount {value} is not representable"
        ))),
    }
}

/// Reads a decimal from a JSON number, refusing strings and other types.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(NumberVisitor)
}

struct NumberVisitor;

impl Visitor<'_> for NumberVisitor {
    type Value = Decimal;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a number")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Decimal, E> {
        Ok(Decimal::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Decimal, E> {
        Ok(Decimal::from(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Decimal, E> {
        // Display keeps the shortest round-trip digits, so 0.19 stays 0.19.
        value
            .to_string()
            .parse::<Decimal>()
            .map_err(|_| E::invalid_value(de::Unexpected::Float(value), &self))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    struct Amount {
        #[serde(serialize_with = "serialize", deserialize_with = "deserialize")]
        value: Decimal,
    }

    fn render(value: Decimal) -> String {
        serde_json::to_string(&Amount { value }).unwrap()
    }

    fn parse(json: &str) -> Result<Decimal, serde_json::Error> {
        serde_json::from_str::<Amount>(json).map(|amount| amount.value)
    }

    #[test]
    fn test_whole_amounts_have_no_fraction() {
        assert_eq!(render(dec!(380)), r#"{"value":380}"#);
        assert_eq!(render(dec!(6964.00)), r#"{"value":6964}"#);
        assert_eq!(render(dec!(0)), r#"{"value":0}"#);
    }

    #[test]
    fn test_fractional_amounts() {
        assert_eq!(render(dec!(1.9)), r#"{"value":1.9}"#);
        assert_eq!(render(dec!(7.04)), r#"{"value":7.04}"#);
        assert_eq!(render(dec!(0.19)), r#"{"value":0.19}"#);
    }

    #[test]
    fn test_reads_numbers() {
        assert_eq!(parse(r#"{"value":10}"#).unwrap(), dec!(10));
        assert_eq!(parse(r#"{"value":-5}"#).unwrap(), dec!(-5));
        assert_eq!(parse(r#"{"value":0.27}"#).unwrap(), dec!(0.27));
        assert_eq!(parse(r#"{"value":183.26}"#).unwrap(), dec!(183.26));
    }

    #[test]
    fn test_rejects_non_numbers() {
        assert!(parse(r#"{"value":"10"}"#).is_err());
        assert!(parse(r#"{"value":"0.5"}"#).is_err());
        assert!(parse(r#"{"value":null}"#).is_err());
        assert!(parse(r#"{"value":true}"#).is_err());
    }

    #[test]
    fn test_value_json_matches_number_literal() {
        let value = serde_json::to_value(Amount { value: dec!(380) }).unwrap();
        assert_eq!(value, json!({ "value": 380 }));
    }
}
