//! Inventory Product
//!
//! The single entity managed by the dashboard. The server is the source of
//! truth; instances held client-side are a disposable cache replaced on every
//! successful refresh.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;

/// Fixed set of product categories known to the inventory API.
#[derive(
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Category {
    Grocery,
    Cosmetics,
    Electronics,
    Stationery,
    Household,
}

/// A product as returned by the inventory API.
///
/// The transport occasionally delivers `quantity` and `threshold` as JSON
/// strings; both are coerced to numbers at this boundary so every comparison
/// downstream is numeric. A missing or null quantity deserializes as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque server-assigned identifier, immutable once created.
    pub product_id: String,

    pub product_name: String,

    pub category: Category,

    /// Non-negative price. No decimal-precision contract with the server.
    #[serde(deserialize_with = "number_or_string", default)]
    pub price: f64,

    /// Minimum desired stock level.
    #[serde(deserialize_with = "integer_or_string", default)]
    pub threshold: u32,

    /// Current stock level.
    #[serde(deserialize_with = "integer_or_string", default)]
    pub quantity: u32,
}

impl Product {
    /// A product is low stock iff its quantity is strictly below its threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantity < self.threshold
    }

    /// Maximum amount the add-stock control may top up: stock can only be
    /// raised to the threshold through it, never past it.
    pub fn max_addable(&self) -> u32 {
        self.threshold.saturating_sub(self.quantity)
    }
}

impl Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] price {:.2}, stock {}/{}",
            self.product_name, self.category, self.price, self.quantity, self.threshold
        )
    }
}

/// Payload for creating a product. All fields are required; numeric fields
/// are sent as numbers, never strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub product_name: String,
    pub category: Category,
    pub price: f64,
    pub threshold: u32,
    pub quantity: u32,
}

/// Accepts a JSON integer, a numeric string, or null (treated as 0).
fn integer_or_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
        Missing(Option<()>),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse::<u32>().map_err(serde::de::Error::custom),
        Raw::Missing(_) => Ok(0),
    }
}

/// Accepts a JSON number, a numeric string, or null (treated as 0.0).
fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Missing(Option<()>),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
        Raw::Missing(_) => Ok(0.0),
    }
}
