//! Loan and payment record data structures

use super::quote::{simple_interest, total_repayment};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Loan lifecycle state
///
/// Active -> Repaid (terminal) on full repayment; Active -> Overdue when the
/// due date passes unpaid. Overdue loans may still be repaid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    Active,
    Repaid,
    Overdue,
}

/// An open or settled microloan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: u64,
    /// Borrower wallet address
    pub borrower: String,
    /// ENS identity the loan is attributed to
    pub ens_name: Option<String>,
    /// Free-text purpose from the request form
    pub purpose: Option<String>,
    pub principal: f64,
    pub monthly_rate_percent: f64,
    pub duration_days: i64,
    pub start_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub status: LoanStatus,
}

impl Loan {
    /// Single-period interest on this loan
    pub fn interest(&self) -> f64 {
        simple_interest(self.principal, self.monthly_rate_percent)
    }

    /// Principal plus interest
    pub fn total_repayment(&self) -> f64 {
        total_repayment(self.principal, self.monthly_rate_percent)
    }

    /// Amount still owed; 0 once repaid
    pub fn amount_due(&self) -> f64 {
        match self.status {
            LoanStatus::Repaid => 0.0,
            LoanStatus::Active | LoanStatus::Overdue => self.total_repayment(),
        }
    }

    /// Whether the due date has passed while the loan is unpaid
    pub fn is_past_due(&self, now: DateTime<Utc>) -> bool {
        self.status != LoanStatus::Repaid && now > self.due_date
    }
}

/// Category of a recorded payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    LoanRepayment,
    DirectPayment,
    ServicePayment,
    Invoice,
}

impl PaymentType {
    /// Wire name used by the payment link and JSON payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::LoanRepayment => "loan_repayment",
            PaymentType::DirectPayment => "direct_payment",
            PaymentType::ServicePayment => "service_payment",
            PaymentType::Invoice => "invoice",
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "loan_repayment" => Ok(PaymentType::LoanRepayment),
            "direct_payment" => Ok(PaymentType::DirectPayment),
            "service_payment" => Ok(PaymentType::ServicePayment),
            "invoice" => Ok(PaymentType::Invoice),
            other => Err(format!("unknown payment type: {other}")),
        }
    }
}

/// Append-only record of a received payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
    pub payment_type: PaymentType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{Duration, TimeZone};

    fn sample_loan(status: LoanStatus) -> Loan {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        Loan {
            id: 1,
            borrower: "0x1234".to_string(),
            ens_name: Some("maria.latam.eth".to_string()),
            purpose: None,
            principal: 500.0,
            monthly_rate_percent: 3.0,
            duration_days: 30,
            start_date: start,
            due_date: start + Duration::days(30),
            status,
        }
    }

    #[test]
    fn test_amount_due() {
        let active = sample_loan(LoanStatus::Active);
        assert_relative_eq!(active.amount_due(), 515.0);

        let overdue = sample_loan(LoanStatus::Overdue);
        assert_relative_eq!(overdue.amount_due(), 515.0);

        let repaid = sample_loan(LoanStatus::Repaid);
        assert_eq!(repaid.amount_due(), 0.0);
    }

    #[test]
    fn test_past_due() {
        let loan = sample_loan(LoanStatus::Active);

        assert!(!loan.is_past_due(loan.due_date));
        assert!(loan.is_past_due(loan.due_date + Duration::hours(1)));

        // Repaid loans are never past due
        let repaid = sample_loan(LoanStatus::Repaid);
        assert!(!repaid.is_past_due(repaid.due_date + Duration::days(10)));
    }

    #[test]
    fn test_payment_type_wire_names() {
        assert_eq!(PaymentType::LoanRepayment.as_str(), "loan_repayment");
        assert_eq!("invoice".parse::<PaymentType>().unwrap(), PaymentType::Invoice);
        assert!("card_payment".parse::<PaymentType>().is_err());

        // serde uses the same snake_case names
        let json = serde_json::to_string(&PaymentType::ServicePayment).unwrap();
        assert_eq!(json, "\"service_payment\"");
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&LoanStatus::Overdue).unwrap();
        assert_eq!(json, "\"overdue\"");
        let status: LoanStatus = serde_json::from_str("\"repaid\"").unwrap();
        assert_eq!(status, LoanStatus::Repaid);
    }
}
