//! Payment link format: `?to=<address-or-name>&amount=<decimal>&type=<enum>`
//!
//! Produced by share/QR flows and consumed by the payment-confirmation page.
//! Missing `amount` defaults to 0 and missing `type` to `direct_payment`,
//! matching the page's fallbacks.

use crate::error::{EngineError, Result};
use crate::loan::PaymentType;

/// Parsed payment link parameters
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentLink {
    /// Recipient wallet address or ENS name
    pub to: String,
    pub amount: f64,
    pub payment_type: PaymentType,
}

impl PaymentLink {
    pub fn new(to: impl Into<String>, amount: f64, payment_type: PaymentType) -> Self {
        Self {
            to: to.into(),
            amount,
            payment_type,
        }
    }

    /// Render the query string (no leading `?`)
    pub fn to_query(&self) -> String {
        format!("to={}&amount={}&type={}", self.to, self.amount, self.payment_type)
    }

    /// Parse a query string, with or without a leading `?`
    pub fn parse(query: &str) -> Result<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut to = String::new();
        let mut amount = 0.0;
        let mut payment_type = PaymentType::DirectPayment;

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| EngineError::InvalidPaymentLink(format!("malformed pair: {pair}")))?;
            match key {
                "to" => to = value.to_string(),
                "amount" => {
                    amount = value.parse().map_err(|_| {
                        EngineError::InvalidPaymentLink(format!("bad amount: {value}"))
                    })?;
                }
                "type" => {
                    payment_type = value
                        .parse()
                        .map_err(EngineError::InvalidPaymentLink)?;
                }
                // Unknown keys are ignored, like query params on the page
                _ => {}
            }
        }

        Ok(Self { to, amount, payment_type })
    }
}
