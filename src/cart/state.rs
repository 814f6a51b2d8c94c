//! Shopping Cart Session State
//!
//! This module owns everything a single shopping session works with:
//! the catalog, the cart, the discount rules and the currency table.
//! The session is passed explicitly to the command dispatcher.

use super::models::Cart;
use crate::catalog::Catalog;
use crate::checkout::{CheckoutFlow, CurrencyTable};
use crate::discount::DiscountEngine;
use tracing::info;
use uuid::Uuid;

// =============================================================================
// Session State
// =============================================================================

/// Core session state
#[derive(Debug)]
pub struct Session {
    /// Identifier used in log spans and on the receipt
    pub id: String,

    /// Read-only product registry
    pub catalog: Catalog,

    pub cart: Cart,

    pub discounts: DiscountEngine,

    pub currencies: CurrencyTable,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with the standard catalog, discounts and rates,
    /// and an empty cart.
    pub fn new() -> Self {
        Self::with_parts(
            Catalog::standard(),
            DiscountEngine::standard(),
            CurrencyTable::standard(),
        )
    }

    pub fn with_parts(
        catalog: Catalog,
        discounts: DiscountEngine,
        currencies: CurrencyTable,
    ) -> Self {
        let id = new_session_id();
        info!(session_id = %id, "session started");

        Self {
            id,
            catalog,
            cart: Cart::new(),
            discounts,
            currencies,
        }
    }

    /// Starts checkout against the current cart.
    pub fn begin_checkout(&self) -> (CheckoutFlow, Vec<String>) {
        CheckoutFlow::begin(
            self.id.clone(),
            &self.cart,
            &self.discounts,
            self.currencies.clone(),
        )
    }
}

/// Creates a fresh session identifier.
pub fn new_session_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductId;

    #[test]
    fn test_new_session_starts_empty() {
        let session = Session::new();
        assert!(session.cart.is_empty());
        assert!(session.catalog.find(&ProductId::new("P003")).is_some());
        assert_eq!(session.discounts.discounts().len(), 2);
    }

    #[test]
    fn test_session_ids_are_unique() {
        let a = Session::new();
        let b = Session::new();
        assert_ne!(a.id, b.id);
        assert_eq!(a.id.len(), 32);
    }
}
