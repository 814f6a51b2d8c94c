//! Discount Domain Models
//!
//! Discounts price a [`Quote`] built from the cart. The catalog and the cart
//! are never touched, so repeated checkouts always start from base prices.

use crate::cart::models::Cart;
use crate::catalog::{Category, ProductId};
use rust_decimal::Decimal;
use serde::Serialize;

// =============================================================================
// Quote
// =============================================================================

/// One cart line as priced at checkout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedLine {
    pub product_id: ProductId,
    pub name: String,
    pub category: Category,

    /// Unit price after discounts
    pub unit_price: Decimal,

    /// Quantity the customer pays for after discounts
    pub quantity: u32,

    /// Names of the discounts that changed this line, in application order
    pub applied: Vec<String>,
}

impl PricedLine {
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Priced view of a cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Quote {
    pub lines: Vec<PricedLine>,
}

impl Quote {
    /// Prices every cart line at its base catalog price.
    pub fn from_cart(cart: &Cart) -> Self {
        let lines = cart
            .items()
            .iter()
            .map(|item| PricedLine {
                product_id: item.product.id.clone(),
                name: item.product.name.clone(),
                category: item.product.category,
                unit_price: item.product.price,
                quantity: item.quantity.get(),
                applied: Vec::new(),
            })
            .collect();
        Self { lines }
    }

    pub fn total(&self) -> Decimal {
        self.lines.iter().map(PricedLine::line_total).sum()
    }

    pub fn line(&self, product_id: &ProductId) -> Option<&PricedLine> {
        self.lines.iter().find(|l| &l.product_id == product_id)
    }
}

// =============================================================================
// Discount rules
// =============================================================================

/// Pricing adjustment scoped to one category.
#[derive(Debug, Clone, PartialEq)]
pub enum DiscountRule {
    /// Pay for half the items, rounded up.
    BuyOneGetOneFree { category: Category },
    /// Reduce the unit price by `percent` percent.
    PercentOff { category: Category, percent: Decimal },
}

impl DiscountRule {
    fn category(&self) -> Category {
        match self {
            DiscountRule::BuyOneGetOneFree { category }
            | DiscountRule::PercentOff { category, .. } => *category,
        }
    }

    /// Applies the rule to a single line. Returns whether the line changed.
    fn apply_to(&self, line: &mut PricedLine) -> bool {
        if line.category != self.category() {
            return false;
        }
        match self {
            DiscountRule::BuyOneGetOneFree { .. } => {
                let payable = bogo_payable(line.quantity);
                let changed = payable != line.quantity;
                line.quantity = payable;
                changed
            }
            DiscountRule::PercentOff { percent, .. } => {
                let factor = (Decimal::ONE_HUNDRED - percent) / Decimal::ONE_HUNDRED;
                line.unit_price *= factor;
                true
            }
        }
    }
}

/// Payable count under buy-one-get-one: `floor(q / 2) + q mod 2`.
pub fn bogo_payable(quantity: u32) -> u32 {
    quantity / 2 + quantity % 2
}

/// A named discount rule
#[derive(Debug, Clone, PartialEq)]
pub struct Discount {
    pub name: String,
    pub rule: DiscountRule,
}

impl Discount {
    pub fn new(name: impl Into<String>, rule: DiscountRule) -> Self {
        Self {
            name: name.into(),
            rule,
        }
    }

    /// Applies this discount to every matching line of the quote.
    ///
    /// Returns how many lines changed.
    pub fn apply(&self, quote: &mut Quote) -> usize {
        let mut touched = 0;
        for line in &mut quote.lines {
            if self.rule.apply_to(line) {
                line.applied.push(self.name.clone());
                touched += 1;
            }
        }
        touched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::models::Quantity;
    use crate::catalog::Catalog;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn quote_of(entries: &[(&str, u32)]) -> Quote {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        for (id, n) in entries {
            cart.add(
                catalog.find(&ProductId::new(id)).unwrap(),
                Quantity::new(*n).unwrap(),
            )
            .unwrap();
        }
        Quote::from_cart(&cart)
    }

    fn ten_off_electronics() -> Discount {
        Discount::new(
            "10% Off on Electronics",
            DiscountRule::PercentOff {
                category: Category::Electronics,
                percent: dec!(10),
            },
        )
    }

    #[test]
    fn test_bogo_payable() {
        assert_eq!(bogo_payable(5), 3);
        assert_eq!(bogo_payable(4), 2);
        assert_eq!(bogo_payable(1), 1);
    }

    #[test]
    fn test_percent_off_compounds_on_same_quote() {
        let mut quote = quote_of(&[("P001", 1)]);
        let discount = ten_off_electronics();

        discount.apply(&mut quote);
        assert_eq!(quote.lines[0].unit_price, dec!(900.00));

        discount.apply(&mut quote);
        assert_eq!(quote.lines[0].unit_price, dec!(810.00));
        assert_eq!(quote.lines[0].applied.len(), 2);
    }

    #[test]
    fn test_rule_skips_other_categories() {
        let mut quote = quote_of(&[("P003", 2)]);
        assert_eq!(ten_off_electronics().apply(&mut quote), 0);
        assert_eq!(quote.lines[0].unit_price, dec!(20.00));
        assert!(quote.lines[0].applied.is_empty());
    }

    #[test]
    fn test_bogo_single_item_is_not_marked_applied() {
        let mut quote = quote_of(&[("P003", 1)]);
        let bogo = Discount::new(
            "Buy 1 Get 1 Free on Fashion items",
            DiscountRule::BuyOneGetOneFree {
                category: Category::Fashion,
            },
        );
        assert_eq!(bogo.apply(&mut quote), 0);
        assert_eq!(quote.lines[0].quantity, 1);
    }

    proptest! {
        #[test]
        fn prop_bogo_pays_for_at_least_half(q in 1u32..10_000) {
            let payable = bogo_payable(q);
            prop_assert!(payable * 2 >= q);
            prop_assert!(payable * 2 <= q + 1);
        }
    }
}
