//! Command handlers
//!
//! This module executes parsed commands against a [`Session`]. Handlers do no
//! I/O; they return the lines the console should print, or hand over a
//! [`CheckoutFlow`] for the console to drive interactively.

use super::models::Command;
use crate::cart::helpers::{format_item_summary, render_cart};
use crate::cart::models::{Quantity, Removal};
use crate::cart::state::Session;
use crate::catalog::ProductId;
use crate::checkout::CheckoutFlow;
use crate::error::{ShopError, ShopResult};
use tracing::{debug, info};

/// Result of running one command.
#[derive(Debug)]
pub enum Outcome {
    /// Lines to print; the loop continues.
    Reply(Vec<String>),
    /// Checkout has begun. `lines` were produced by the discounting and
    /// reporting stages; the console drives the remaining prompts.
    Checkout {
        flow: CheckoutFlow,
        lines: Vec<String>,
    },
}

/// Parses and runs one input line.
pub fn handle_line(session: &mut Session, line: &str) -> ShopResult<Outcome> {
    let command: Command = line.parse()?;
    handle_command(session, command)
}

/// Runs a parsed command against the session.
pub fn handle_command(session: &mut Session, command: Command) -> ShopResult<Outcome> {
    debug!(session_id = %session.id, ?command, "command");
    match command {
        Command::AddToCart {
            product_id,
            quantity,
        } => handle_add_to_cart(session, product_id, quantity),
        Command::RemoveFromCart {
            product_id,
            quantity,
        } => Ok(handle_remove_from_cart(session, product_id, quantity)),
        Command::ViewCart => Ok(Outcome::Reply(render_cart(&session.cart))),
        Command::ListDiscounts => Ok(Outcome::Reply(session.discounts.list())),
        Command::Checkout => {
            info!(session_id = %session.id, cart = %format_item_summary(&session.cart), "checkout");
            let (flow, lines) = session.begin_checkout();
            Ok(Outcome::Checkout { flow, lines })
        }
    }
}

fn handle_add_to_cart(
    session: &mut Session,
    product_id: ProductId,
    quantity: Quantity,
) -> ShopResult<Outcome> {
    let product = session
        .catalog
        .find(&product_id)
        .ok_or_else(|| ShopError::ProductNotFound(product_id.to_string()))?;

    let message = format!("{} {} added to the cart.", quantity, product.name);
    let held = session.cart.add(product, quantity)?;
    info!(product = %product_id, %quantity, %held, "added to cart");

    Ok(Outcome::Reply(vec![message]))
}

/// Always reports the removal, even when the product was not in the cart.
fn handle_remove_from_cart(
    session: &mut Session,
    product_id: ProductId,
    quantity: Option<Quantity>,
) -> Outcome {
    let removal = session.cart.remove(&product_id, quantity);
    match removal {
        Removal::NotInCart => info!(product = %product_id, "remove requested for product not in cart"),
        _ => info!(product = %product_id, ?removal, "removed from cart"),
    }

    let amount = quantity.map_or_else(|| "All".to_string(), |q| q.to_string());
    Outcome::Reply(vec![format!(
        "{} of product with ID {} removed.",
        amount, product_id
    )])
}
