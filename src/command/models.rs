//! Command Models and Constants
//!
//! This module contains the command vocabulary of the console and the
//! parser turning a raw input line into a typed [`Command`].

use crate::cart::models::Quantity;
use crate::catalog::ProductId;
use crate::error::{ShopError, ShopResult};
use std::str::FromStr;

// =============================================================================
// Command Constants
// =============================================================================

pub const ADD_TO_CART: &str = "add_to_cart";
pub const REMOVE_FROM_CART: &str = "remove_from_cart";
pub const VIEW_CART: &str = "view_cart";
pub const LIST_DISCOUNTS: &str = "list_discounts";
pub const CHECKOUT: &str = "checkout";

/// Prompt shown before every command read
pub const COMMAND_PROMPT: &str = "Enter command: ";

// =============================================================================
// Commands
// =============================================================================

/// A parsed console command: `action [productId] [quantity]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddToCart {
        product_id: ProductId,
        quantity: Quantity,
    },
    /// A missing quantity removes the whole line.
    RemoveFromCart {
        product_id: ProductId,
        quantity: Option<Quantity>,
    },
    ViewCart,
    ListDiscounts,
    Checkout,
}

impl FromStr for Command {
    type Err = ShopError;

    fn from_str(line: &str) -> ShopResult<Self> {
        let mut parts = line.split_whitespace();
        let action = parts.next().unwrap_or_default().to_lowercase();
        let product_id = parts.next().map(ProductId::new);
        let quantity = parts.next();

        match action.as_str() {
            ADD_TO_CART => Ok(Command::AddToCart {
                product_id: product_id.ok_or(ShopError::MissingProductId)?,
                quantity: quantity.ok_or(ShopError::MissingQuantity)?.parse::<Quantity>()?,
            }),
            REMOVE_FROM_CART => Ok(Command::RemoveFromCart {
                product_id: product_id.ok_or(ShopError::MissingProductId)?,
                quantity: quantity.map(str::parse::<Quantity>).transpose()?,
            }),
            VIEW_CART => Ok(Command::ViewCart),
            LIST_DISCOUNTS => Ok(Command::ListDiscounts),
            CHECKOUT => Ok(Command::Checkout),
            _ => Err(ShopError::UnknownCommand(action)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qty(n: u32) -> Quantity {
        Quantity::new(n).unwrap()
    }

    #[test]
    fn test_parse_add() {
        assert_eq!(
            "add_to_cart p001 2".parse::<Command>().unwrap(),
            Command::AddToCart {
                product_id: ProductId::new("P001"),
                quantity: qty(2),
            }
        );
    }

    #[test]
    fn test_action_is_case_insensitive() {
        assert_eq!("VIEW_CART".parse::<Command>().unwrap(), Command::ViewCart);
        assert_eq!(
            "  List_Discounts  ".parse::<Command>().unwrap(),
            Command::ListDiscounts
        );
    }

    #[test]
    fn test_parse_remove_with_and_without_quantity() {
        assert_eq!(
            "remove_from_cart P002".parse::<Command>().unwrap(),
            Command::RemoveFromCart {
                product_id: ProductId::new("P002"),
                quantity: None,
            }
        );
        assert_eq!(
            "remove_from_cart P002 4".parse::<Command>().unwrap(),
            Command::RemoveFromCart {
                product_id: ProductId::new("P002"),
                quantity: Some(qty(4)),
            }
        );
    }

    #[test]
    fn test_malformed_arguments_fail_fast() {
        assert!(matches!(
            "add_to_cart".parse::<Command>(),
            Err(ShopError::MissingProductId)
        ));
        assert!(matches!(
            "add_to_cart P001".parse::<Command>(),
            Err(ShopError::MissingQuantity)
        ));
        assert!(matches!(
            "add_to_cart P001 lots".parse::<Command>(),
            Err(ShopError::InvalidQuantity(q)) if q == "lots"
        ));
        assert!(matches!(
            "remove_from_cart P001 0".parse::<Command>(),
            Err(ShopError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn test_unknown_and_empty_commands() {
        assert!(matches!(
            "dance".parse::<Command>(),
            Err(ShopError::UnknownCommand(a)) if a == "dance"
        ));
        assert!(matches!(
            "".parse::<Command>(),
            Err(ShopError::UnknownCommand(_))
        ));
    }
}
