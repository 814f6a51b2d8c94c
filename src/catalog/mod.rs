//! Product Catalog Module
//!
//! A fixed registry of products, built once at startup and only read after.

pub mod models;

pub use models::{Category, Product, ProductId};

use rust_decimal_macros::dec;
use std::sync::Arc;

/// Read-only product registry. Products are handed out as `Arc` so cart
/// items reference the catalog entry instead of copying it.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: products.into_iter().map(Arc::new).collect(),
        }
    }

    /// The seed catalog shipped with the demo.
    pub fn standard() -> Self {
        Self::new(vec![
            Product::new("P001", "Laptop", dec!(1000.00), Category::Electronics),
            Product::new("P002", "Phone", dec!(500.00), Category::Electronics),
            Product::new("P003", "T-Shirt", dec!(20.00), Category::Fashion),
        ])
    }

    pub fn find(&self, id: &ProductId) -> Option<Arc<Product>> {
        self.products.iter().find(|p| &p.id == id).cloned()
    }
}
