//! Shopping Cart Formatting Helpers
//!
//! This module turns cart contents into the lines the console prints.

use super::models::{Cart, CartItem};
use crate::helpers::format_amount;

/// Renders one cart line, e.g.
/// `"Laptop - Quantity: 1, Price: 1000.00 USD, Total: 1000.00 USD"`.
pub fn format_cart_line(item: &CartItem) -> String {
    format!(
        "{} - Quantity: {}, Price: {} USD, Total: {} USD",
        item.product.name,
        item.quantity,
        format_amount(item.product.price),
        format_amount(item.line_total())
    )
}

/// Produces the full cart listing with the pre-discount total.
///
/// An empty cart yields the single line `"Your cart is empty."`.
pub fn render_cart(cart: &Cart) -> Vec<String> {
    if cart.is_empty() {
        return vec!["Your cart is empty.".to_string()];
    }

    let mut lines = Vec::with_capacity(cart.len() + 2);
    lines.push("Your Cart:".to_string());
    lines.extend(cart.items().iter().map(format_cart_line));
    lines.push(format!(
        "Total (before discounts): {} USD",
        format_amount(cart.total())
    ));
    lines
}

/// Produces a human-readable one-line summary for the cart.
///
/// Example output: `"1x Laptop, 3x T-Shirt"`.
pub fn format_item_summary(cart: &Cart) -> String {
    cart.items()
        .iter()
        .map(|i| format!("{}x {}", i.quantity, i.product.name))
        .collect::<Vec<_>>()
        .join(", ")
}
