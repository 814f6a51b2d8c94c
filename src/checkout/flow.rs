//! Checkout flow
//!
//! A small state machine driven by the console: it prices the cart, reports
//! the USD total, then walks through the optional currency conversion one
//! answer at a time. It performs no I/O itself; every step returns the lines
//! to print, and [`CheckoutFlow::prompt`] says what to ask next.

use super::currency::CurrencyTable;
use crate::cart::models::Cart;
use crate::discount::{DiscountEngine, PricedLine, Quote};
use crate::helpers::{format_amount, round_amount};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

pub const CONVERT_PROMPT: &str = "Would you like to view it in a different currency? (yes/no): ";
pub const CURRENCY_PROMPT: &str = "Enter currency: ";

/// Where the flow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStage {
    Discounting,
    Reporting,
    ConfirmConversion,
    ChooseCurrency,
    Finished,
}

/// A successful currency conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub currency: String,
    pub amount: Decimal,
}

/// Summary of a finished checkout
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub session_id: String,
    pub lines: Vec<PricedLine>,
    pub total_usd: Decimal,
    pub conversion: Option<Conversion>,
}

#[derive(Debug)]
pub struct CheckoutFlow {
    session_id: String,
    stage: CheckoutStage,
    quote: Quote,
    total_usd: Decimal,
    currencies: CurrencyTable,
    conversion: Option<Conversion>,
}

impl CheckoutFlow {
    /// Runs the discounting and reporting stages.
    ///
    /// Returns the flow, now waiting on the conversion question, and the
    /// lines produced so far.
    pub fn begin(
        session_id: impl Into<String>,
        cart: &Cart,
        engine: &DiscountEngine,
        currencies: CurrencyTable,
    ) -> (Self, Vec<String>) {
        let mut flow = Self {
            session_id: session_id.into(),
            stage: CheckoutStage::Discounting,
            quote: Quote::default(),
            total_usd: Decimal::ZERO,
            currencies,
            conversion: None,
        };
        let mut lines = vec!["Applying discounts...".to_string()];

        flow.quote = engine.price(cart);
        flow.advance(CheckoutStage::Reporting);

        flow.total_usd = flow.quote.total();
        lines.push(format!(
            "Final Total in USD: {} USD",
            format_amount(flow.total_usd)
        ));
        info!(session_id = %flow.session_id, total_usd = %round_amount(flow.total_usd), "checkout total");
        flow.advance(CheckoutStage::ConfirmConversion);

        (flow, lines)
    }

    fn advance(&mut self, next: CheckoutStage) {
        debug!(from = ?self.stage, to = ?next, "checkout stage");
        self.stage = next;
    }

    /// Question to ask the user, if the flow is waiting on one.
    pub fn prompt(&self) -> Option<&'static str> {
        match self.stage {
            CheckoutStage::ConfirmConversion => Some(CONVERT_PROMPT),
            CheckoutStage::ChooseCurrency => Some(CURRENCY_PROMPT),
            _ => None,
        }
    }

    /// Feeds one answer to the pending prompt.
    pub fn respond(&mut self, answer: &str) -> Vec<String> {
        match self.stage {
            CheckoutStage::ConfirmConversion => {
                if answer.trim().eq_ignore_ascii_case("yes") {
                    self.advance(CheckoutStage::ChooseCurrency);
                    let codes = self.currencies.codes().collect::<Vec<_>>().join(", ");
                    vec![format!("Available Currencies: {}", codes)]
                } else {
                    self.advance(CheckoutStage::Finished);
                    Vec::new()
                }
            }
            CheckoutStage::ChooseCurrency => {
                let code = CurrencyTable::normalize(answer);
                self.advance(CheckoutStage::Finished);
                match self.currencies.convert(self.total_usd, &code) {
                    Some(amount) => {
                        let line =
                            format!("Final Total in {code}: {} {code}", format_amount(amount));
                        self.conversion = Some(Conversion {
                            currency: code,
                            amount,
                        });
                        vec![line]
                    }
                    None => {
                        debug!(currency = %code, "unknown currency");
                        vec!["Invalid currency.".to_string()]
                    }
                }
            }
            _ => Vec::new(),
        }
    }

    pub fn stage(&self) -> CheckoutStage {
        self.stage
    }

    pub fn is_finished(&self) -> bool {
        self.stage == CheckoutStage::Finished
    }

    pub fn total_usd(&self) -> Decimal {
        self.total_usd
    }

    pub fn conversion(&self) -> Option<&Conversion> {
        self.conversion.as_ref()
    }

    pub fn into_receipt(self) -> Receipt {
        let lines = self
            .quote
            .lines
            .into_iter()
            .map(|line| PricedLine {
                unit_price: round_amount(line.unit_price),
                ..line
            })
            .collect();
        Receipt {
            session_id: self.session_id,
            lines,
            total_usd: round_amount(self.total_usd),
            conversion: self.conversion,
        }
    }
}
