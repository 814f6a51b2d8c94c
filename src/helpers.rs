//! Helper utilities shared across the shopping cart modules
//!
//! Small, pure functions for money handling. Every amount shown to the user
//! goes through [`format_amount`] so rounding is consistent everywhere.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to cents, half away from zero.
pub fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Renders an amount with exactly two decimal places.
///
/// Example output: `"1000.00"`, `"20.50"`.
pub fn format_amount(amount: Decimal) -> String {
    let mut cents = round_amount(amount);
    cents.rescale(2);
    cents.to_string()
}
