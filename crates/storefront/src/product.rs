//! Catalog product types.
//!
//! [`Product`] is the record exchanged with the catalog API. [`StockTier`]
//! is the derived display classification of a product's stock count.

use serde::{Deserialize, Deserializer, Serialize};

/// Stock count at or above which a product is considered fully in stock.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// A catalog item as returned by the catalog API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Identifier assigned by the backend.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,

    /// Category used for filtering and grouping.
    pub category: String,

    /// Unit price.
    pub price: f64,

    /// Size label (exact-match filter value).
    pub size: String,

    /// Color name (exact-match filter value).
    pub color: String,

    /// Units on hand. The backend stores `null` when a client submitted a
    /// non-numeric stock value; that reads as zero. Negative counts are
    /// stored as submitted and decode as-is.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub stock: i64,

    /// Product image location.
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Product {
    /// The description, treating an empty string as absent.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        non_empty(self.description.as_deref())
    }

    /// The image URL, treating an empty string as absent.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        non_empty(self.image_url.as_deref())
    }

    /// Stock tier for this product.
    #[must_use]
    pub fn stock_tier(&self) -> StockTier {
        StockTier::classify(self.stock)
    }
}

fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(0))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Display classification derived from a stock count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockTier {
    /// No units left.
    OutOfStock,
    /// Fewer than ten units left, but not exactly zero.
    LowStock(i64),
    /// Ten or more units.
    InStock,
}

impl StockTier {
    /// Classify a stock count.
    ///
    /// Only an exact zero is out of stock; anything below the threshold,
    /// negative counts included, is low stock.
    #[must_use]
    pub fn classify(stock: i64) -> Self {
        match stock {
            0 => Self::OutOfStock,
            n if n < LOW_STOCK_THRESHOLD => Self::LowStock(n),
            _ => Self::InStock,
        }
    }

    /// Style tag for the tier.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::OutOfStock => "out-of-stock",
            Self::LowStock(_) => "low-stock",
            Self::InStock => "in-stock",
        }
    }

    /// Human-readable label for the tier.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::OutOfStock => "Out of Stock".to_string(),
            Self::LowStock(n) => format!("Only {n} left"),
            Self::InStock => "In Stock".to_string(),
        }
    }
}

impl std::fmt::Display for StockTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.class())
    }
}

/// Style tag for a stock count.
#[must_use]
pub fn stock_class(stock: i64) -> &'static str {
    StockTier::classify(stock).class()
}

/// Label text for a stock count.
#[must_use]
pub fn stock_text(stock: i64) -> String {
    StockTier::classify(stock).label()
}

/// Format a price with exactly two fraction digits.
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("{price:.2}")
}

#[cfg(test)]
pub(crate) fn sample_product(id: i64, name: &str, stock: i64) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: Some(format!("{name} description")),
        category: "Shirts".to_string(),
        price: 19.99,
        size: "M".to_string(),
        color: "White".to_string(),
        stock,
        image_url: Some(format!("https://img.example/{id}.png")),
    }
}
