//! Shopping Cart Domain Models
//!
//! This module contains the cart itself and the validated quantity type
//! used by every cart operation.

use crate::catalog::{Product, ProductId};
use crate::error::{ShopError, ShopResult};
use rust_decimal::Decimal;
use serde::Serialize;
use std::{fmt, str::FromStr, sync::Arc};

// =============================================================================
// Quantity
// =============================================================================

/// A strictly positive item count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// Returns `None` for zero.
    pub fn new(value: u32) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for Quantity {
    type Err = ShopError;

    fn from_str(s: &str) -> ShopResult<Self> {
        s.trim()
            .parse::<u32>()
            .ok()
            .and_then(Quantity::new)
            .ok_or_else(|| ShopError::InvalidQuantity(s.to_string()))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// Represents an item in the shopping cart
#[derive(Debug, Clone)]
pub struct CartItem {
    /// Shared catalog entry
    pub product: Arc<Product>,

    pub quantity: Quantity,
}

impl CartItem {
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity.get())
    }
}

/// What a removal actually did to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// Quantity was reduced; the item is still in the cart.
    Decremented { remaining: Quantity },
    /// The whole line was removed.
    Removed,
    /// The product was not in the cart.
    NotInCart,
}

/// Ordered collection of cart items, at most one per product id.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` of `product`, aggregating with an existing line.
    ///
    /// Returns the quantity now held for that product. Fails without
    /// touching the cart when the new count would not fit in a `u32`.
    pub fn add(&mut self, product: Arc<Product>, quantity: Quantity) -> ShopResult<Quantity> {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            let held = existing
                .quantity
                .0
                .checked_add(quantity.0)
                .ok_or_else(|| ShopError::QuantityOverflow(product.id.to_string()))?;
            existing.quantity = Quantity(held);
            Ok(existing.quantity)
        } else {
            self.items.push(CartItem { product, quantity });
            Ok(quantity)
        }
    }

    /// Removes `quantity` of a product, or the whole line when `quantity` is
    /// `None` or not smaller than what the cart holds.
    pub fn remove(&mut self, product_id: &ProductId, quantity: Option<Quantity>) -> Removal {
        let Some(index) = self.items.iter().position(|i| &i.product.id == product_id) else {
            return Removal::NotInCart;
        };

        match quantity {
            Some(q) if self.items[index].quantity > q => {
                let item = &mut self.items[index];
                item.quantity = Quantity(item.quantity.0 - q.0);
                Removal::Decremented {
                    remaining: item.quantity,
                }
            }
            _ => {
                self.items.remove(index);
                Removal::Removed
            }
        }
    }

    /// Sum of all line totals at current prices.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.product.id == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn qty(n: u32) -> Quantity {
        Quantity::new(n).unwrap()
    }

    fn product(catalog: &Catalog, id: &str) -> Arc<Product> {
        catalog.find(&ProductId::new(id)).unwrap()
    }

    #[test]
    fn test_quantity_parsing() {
        assert_eq!("3".parse::<Quantity>().unwrap().get(), 3);
        assert!(matches!(
            "0".parse::<Quantity>(),
            Err(ShopError::InvalidQuantity(_))
        ));
        assert!("-2".parse::<Quantity>().is_err());
        assert!("two".parse::<Quantity>().is_err());
        assert!("".parse::<Quantity>().is_err());
    }

    #[test]
    fn test_add_same_product_accumulates() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add(product(&catalog, "P001"), qty(1)).unwrap();
        let now = cart.add(product(&catalog, "P001"), qty(2)).unwrap();

        assert_eq!(now.get(), 3);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity.get(), 3);
    }

    #[test]
    fn test_add_rejects_quantity_overflow() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add(product(&catalog, "P001"), qty(u32::MAX)).unwrap();

        let err = cart.add(product(&catalog, "P001"), qty(5)).unwrap_err();
        assert!(matches!(err, ShopError::QuantityOverflow(ref id) if id == "P001"));
        assert_eq!(cart.items()[0].quantity.get(), u32::MAX);
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add(product(&catalog, "P003"), qty(1)).unwrap();
        cart.add(product(&catalog, "P001"), qty(1)).unwrap();
        cart.add(product(&catalog, "P003"), qty(1)).unwrap();

        let ids: Vec<_> = cart.items().iter().map(|i| i.product.id.as_str()).collect();
        assert_eq!(ids, vec!["P003", "P001"]);
    }

    #[test]
    fn test_partial_remove_decrements() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add(product(&catalog, "P002"), qty(5)).unwrap();

        let removal = cart.remove(&ProductId::new("P002"), Some(qty(2)));
        assert_eq!(removal, Removal::Decremented { remaining: qty(3) });
        assert_eq!(cart.items()[0].quantity.get(), 3);
    }

    #[test]
    fn test_remove_at_or_above_quantity_removes_line() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add(product(&catalog, "P002"), qty(2)).unwrap();
        cart.add(product(&catalog, "P003"), qty(2)).unwrap();

        assert_eq!(cart.remove(&ProductId::new("P002"), Some(qty(2))), Removal::Removed);
        assert_eq!(cart.remove(&ProductId::new("P003"), Some(qty(9))), Removal::Removed);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_without_quantity_removes_line() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add(product(&catalog, "P001"), qty(4)).unwrap();

        assert_eq!(cart.remove(&ProductId::new("p001"), None), Removal::Removed);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_absent_product_is_noop() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add(product(&catalog, "P001"), qty(1)).unwrap();

        assert_eq!(cart.remove(&ProductId::new("P003"), None), Removal::NotInCart);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_total_is_sum_of_lines() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        assert_eq!(cart.total(), Decimal::ZERO);

        cart.add(product(&catalog, "P001"), qty(1)).unwrap();
        cart.add(product(&catalog, "P003"), qty(3)).unwrap();
        assert_eq!(cart.total(), dec!(1060.00));
    }

    proptest! {
        #[test]
        fn prop_repeated_adds_sum_quantities(a in 1u32..1000, b in 1u32..1000) {
            let catalog = Catalog::standard();
            let mut cart = Cart::new();
            cart.add(product(&catalog, "P002"), qty(a)).unwrap();
            cart.add(product(&catalog, "P002"), qty(b)).unwrap();

            prop_assert_eq!(cart.len(), 1);
            prop_assert_eq!(cart.items()[0].quantity.get(), a + b);
            prop_assert_eq!(cart.total(), dec!(500.00) * Decimal::from(a + b));
        }
    }
}
