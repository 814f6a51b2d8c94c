//! Catalog Domain Models
//!
//! Products are immutable once the catalog is built. Discounts never touch
//! them; they price a separate quote instead.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Identifiers
// =============================================================================

/// Product identifier, always stored uppercase (e.g. `P001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Normalizes user input into a product id. Lookups are case-insensitive.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Product
// =============================================================================

/// Product category. Discount rules target categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Fashion,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Electronics => f.write_str("Electronics"),
            Category::Fashion => f.write_str("Fashion"),
        }
    }
}

/// A purchasable product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Base unit price in USD
    pub price: Decimal,

    pub category: Category,
}

impl Product {
    pub fn new(id: &str, name: &str, price: Decimal, category: Category) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.to_string(),
            price,
            category,
        }
    }
}
