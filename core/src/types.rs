//! Domain DTOs for the products API.
//!
//! # Design
//! The server owns the wire format and it is loose in two places: ids may be
//! numeric keys or UUID strings, and prices backed by SQL `DECIMAL` columns
//! arrive as strings. Both are normalized here so the rest of the crate sees
//! one shape.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned product identifier. Kept in whatever JSON form the
/// server chose, and displayed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{n}"),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        ProductId::Number(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId::Text(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        ProductId::Text(id)
    }
}

/// A decimal amount. Serialized as a JSON number, displayed with two
/// fraction digits.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn new(amount: f64) -> Self {
        Self(amount)
    }

}

impl fmt::Display for Price {
    /// Cents are rounded half away from zero, so `2.125` shows as `2.13`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", (self.0 * 100.0).round() / 100.0)
    }
}

impl From<f64> for Price {
    fn from(amount: f64) -> Self {
        Self(amount)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawPrice::deserialize(deserializer)? {
            RawPrice::Number(amount) => Ok(Price(amount)),
            RawPrice::Text(text) => text
                .trim()
                .parse::<f64>()
                .map(Price)
                .map_err(|_| D::Error::custom(format!("invalid price: {text:?}"))),
        }
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A persisted product as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

/// Request payload for both create and update. Updates replace every field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub description: String,
}

impl ProductInput {
    pub fn new(name: impl Into<String>, price: f64, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: Price(price),
            description: description.into(),
        }
    }
}

impl From<&Product> for ProductInput {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price,
            description: product.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_string_ids_both_parse() {
        let numeric: Product =
            serde_json::from_str(r#"{"id":7,"name":"A","price":1,"description":""}"#).unwrap();
        assert_eq!(numeric.id, ProductId::Number(7));
        assert_eq!(numeric.id.to_string(), "7");

        let text: Product = serde_json::from_str(
            r#"{"id":"5f0c7a4e-0000-0000-0000-000000000000","name":"A","price":1,"description":""}"#,
        )
        .unwrap();
        assert_eq!(
            text.id.to_string(),
            "5f0c7a4e-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn decimal_string_price_parses() {
        let product: Product =
            serde_json::from_str(r#"{"id":1,"name":"A","price":"19.50","description":"x"}"#)
                .unwrap();
        assert_eq!(product.price, Price::new(19.5));
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let result: Result<Product, _> =
            serde_json::from_str(r#"{"id":1,"name":"A","price":"cheap","description":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn price_displays_two_fraction_digits() {
        assert_eq!(Price::new(9.9).to_string(), "9.90");
        assert_eq!(Price::new(10.0).to_string(), "10.00");
        assert_eq!(Price::new(12.3456).to_string(), "12.35");
    }

    #[test]
    fn price_rounds_half_cents_up() {
        for (amount, shown) in [
            (0.125, "0.13"),
            (2.125, "2.13"),
            (1.375, "1.38"),
            (0.005, "0.01"),
            (1.005, "1.00"),
            (2.675, "2.67"),
        ] {
            assert_eq!(Price::new(amount).to_string(), shown, "amount {amount}");
        }
    }

    #[test]
    fn null_or_missing_description_reads_as_empty() {
        let null: Product =
            serde_json::from_str(r#"{"id":1,"name":"A","price":1,"description":null}"#).unwrap();
        assert_eq!(null.description, "");
        let missing: Product = serde_json::from_str(r#"{"id":1,"name":"A","price":1}"#).unwrap();
        assert_eq!(missing.description, "");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let product: Product = serde_json::from_str(
            r#"{"id":1,"name":"A","price":1,"description":"","created_at":"2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!(product.name, "A");
    }

    #[test]
    fn input_serializes_price_as_number() {
        let input = ProductInput::new("Widget", 9.9, "desc");
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["name"], "Widget");
        assert_eq!(json["price"], 9.9);
        assert_eq!(json["description"], "desc");
        assert!(json.get("id").is_none());
    }
}
