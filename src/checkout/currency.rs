//! Static USD exchange rates used at checkout.

use crate::helpers::round_amount;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

/// Currency code → USD-relative rate.
#[derive(Debug, Clone)]
pub struct CurrencyTable {
    rates: BTreeMap<String, Decimal>,
}

impl Default for CurrencyTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl CurrencyTable {
    pub fn standard() -> Self {
        let rates = [("EUR", dec!(0.85)), ("GBP", dec!(0.75))]
            .into_iter()
            .map(|(code, rate)| (code.to_string(), rate))
            .collect();
        Self { rates }
    }

    /// Normalizes a user-typed code: trimmed and uppercased.
    pub fn normalize(code: &str) -> String {
        code.trim().to_uppercase()
    }

    pub fn rate(&self, code: &str) -> Option<Decimal> {
        self.rates.get(&Self::normalize(code)).copied()
    }

    /// Converts a USD amount, rounded to cents. `None` for unknown codes.
    pub fn convert(&self, amount_usd: Decimal, code: &str) -> Option<Decimal> {
        self.rate(code).map(|rate| round_amount(amount_usd * rate))
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }
}
