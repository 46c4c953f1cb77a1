//! Loan cost calculation
//!
//! Single-period simple interest: the monthly rate is charged once on the
//! principal regardless of the repayment period. The duration only moves the
//! due date.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Interest due on a principal at a monthly rate (percent)
pub fn simple_interest(principal: f64, monthly_rate_percent: f64) -> f64 {
    principal * monthly_rate_percent / 100.0
}

/// Principal plus single-period interest
pub fn total_repayment(principal: f64, monthly_rate_percent: f64) -> f64 {
    principal + simple_interest(principal, monthly_rate_percent)
}

/// Round to 2 decimal places for currency display
///
/// Pricing keeps full f64 precision internally; apply this only at the
/// display or export boundary.
pub fn round_currency(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Priced loan terms before the loan is opened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanQuote {
    pub principal: f64,
    pub monthly_rate_percent: f64,
    pub interest: f64,
    pub total_repayment: f64,
    pub duration_days: i64,
    pub start_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
}

impl LoanQuote {
    /// Price a loan at the given rate and repayment period
    pub fn price(
        principal: f64,
        monthly_rate_percent: f64,
        duration_days: i64,
        start_date: DateTime<Utc>,
    ) -> Self {
        let interest = simple_interest(principal, monthly_rate_percent);
        Self {
            principal,
            monthly_rate_percent,
            interest,
            total_repayment: principal + interest,
            duration_days,
            start_date,
            due_date: start_date + Duration::days(duration_days),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::TimeZone;

    #[test]
    fn test_simple_interest() {
        assert_relative_eq!(simple_interest(100.0, 3.0), 3.0);
        assert_relative_eq!(total_repayment(100.0, 3.0), 103.0);
        assert_relative_eq!(total_repayment(500.0, 3.0), 515.0);
        assert_relative_eq!(total_repayment(250.0, 2.5), 256.25);

        // Zero principal and zero rate are both valid
        assert_eq!(simple_interest(0.0, 4.0), 0.0);
        assert_eq!(total_repayment(100.0, 0.0), 100.0);
    }

    #[test]
    fn test_round_currency() {
        assert_eq!(round_currency(103.005), 103.01);
        assert_eq!(round_currency(103.004), 103.0);
        assert_eq!(round_currency(256.25), 256.25);
    }

    #[test]
    fn test_quote_due_date() {
        let start = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let quote = LoanQuote::price(100.0, 3.0, 30, start);

        assert_relative_eq!(quote.interest, 3.0);
        assert_relative_eq!(quote.total_repayment, 103.0);
        assert_eq!(quote.due_date, Utc.with_ymd_and_hms(2024, 2, 14, 12, 0, 0).unwrap());

        // Duration moves the due date but never the interest
        let longer = LoanQuote::price(100.0, 3.0, 90, start);
        assert_relative_eq!(longer.interest, quote.interest);
        assert_eq!(longer.due_date, start + Duration::days(90));
    }
}
