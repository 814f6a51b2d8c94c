//! Shopping Cart Domain Module
//!
//! This module contains the cart and its session, including:
//! - Domain models (Cart, CartItem, Quantity)
//! - Formatting helpers (cart listing, summaries)
//! - Session state (catalog, cart, discounts, currencies)

pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use models::{Cart, CartItem, Quantity, Removal};
pub use state::Session;
