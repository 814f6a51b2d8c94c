//! Checkout Module
//!
//! - Static currency table and conversion
//! - The checkout state machine and its receipt

pub mod currency;
pub mod flow;

pub use currency::CurrencyTable;
pub use flow::{CheckoutFlow, CheckoutStage, Conversion, Receipt};
