//! Error types for the shopping cart
//!
//! The `Display` text of every variant is exactly what the console prints
//! back to the user, so recoverable errors can be reported verbatim.

use thiserror::Error;

/// Errors produced while parsing or executing cart commands.
#[derive(Error, Debug)]
pub enum ShopError {
    #[error("Unknown command.")]
    UnknownCommand(String),

    #[error("Product not found.")]
    ProductNotFound(String),

    #[error("Missing product id.")]
    MissingProductId,

    #[error("Missing quantity.")]
    MissingQuantity,

    #[error("Invalid quantity: {0}.")]
    InvalidQuantity(String),

    #[error("Quantity too large for product {0}.")]
    QuantityOverflow(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShopError {
    /// Whether the command loop can report this error and keep going.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ShopError::Io(_))
    }
}

pub type ShopResult<T> = Result<T, ShopError>;
