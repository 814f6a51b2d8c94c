//! Discount engine: ordered application of discount rules.

use super::models::{Discount, DiscountRule, Quote};
use crate::cart::models::Cart;
use crate::catalog::Category;
use rust_decimal_macros::dec;
use tracing::debug;

/// Ordered list of discounts. Rules run in list order with no priority
/// resolution beyond that order.
#[derive(Debug, Clone)]
pub struct DiscountEngine {
    discounts: Vec<Discount>,
}

impl Default for DiscountEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl DiscountEngine {
    pub fn new(discounts: Vec<Discount>) -> Self {
        Self { discounts }
    }

    /// The two promotions shipped with the demo.
    pub fn standard() -> Self {
        Self::new(vec![
            Discount::new(
                "Buy 1 Get 1 Free on Fashion items",
                DiscountRule::BuyOneGetOneFree {
                    category: Category::Fashion,
                },
            ),
            Discount::new(
                "10% Off on Electronics",
                DiscountRule::PercentOff {
                    category: Category::Electronics,
                    percent: dec!(10),
                },
            ),
        ])
    }

    pub fn discounts(&self) -> &[Discount] {
        &self.discounts
    }

    /// Applies every discount, in order, to an existing quote.
    pub fn apply(&self, quote: &mut Quote) {
        for discount in &self.discounts {
            let touched = discount.apply(quote);
            debug!(discount = %discount.name, lines = touched, "discount applied");
        }
    }

    /// Prices a cart from base prices and applies all discounts.
    pub fn price(&self, cart: &Cart) -> Quote {
        let mut quote = Quote::from_cart(cart);
        self.apply(&mut quote);
        quote
    }

    /// Discount listing, 1-indexed.
    pub fn list(&self) -> Vec<String> {
        std::iter::once("Available Discounts:".to_string())
            .chain(
                self.discounts
                    .iter()
                    .enumerate()
                    .map(|(i, d)| format!("{}. {}", i + 1, d.name)),
            )
            .collect()
    }
}
