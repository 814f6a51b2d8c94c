//! Discount Module
//!
//! - Discount rules and the priced quote they operate on
//! - The engine applying rules in a fixed order

pub mod engine;
pub mod models;

pub use engine::DiscountEngine;
pub use models::{Discount, DiscountRule, PricedLine, Quote};
