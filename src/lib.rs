//! Shopping Cart Library
//!
//! This library provides the core functionality for a console shopping cart:
//! a fixed catalog, a cart, discount rules and a checkout flow with currency
//! conversion.

// Domain modules
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod command;
pub mod discount;

// Infrastructure
pub mod console;
pub mod error;
pub mod helpers;
pub mod telemetry;

pub use cart::Session;
pub use error::{ShopError, ShopResult};
