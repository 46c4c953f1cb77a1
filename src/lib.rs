//! Microloan credit and pricing engine
//!
//! Pure-computation core for an ENS-identity microloan product:
//! - Credit tier classification (score -> tier -> monthly rate)
//! - Simple-interest loan pricing (principal, rate -> interest, total due)
//! - Repayment-rate aggregation over loan history
//! - Loan lifecycle (Active -> Repaid / Overdue) over an in-memory loan book
//! - Payment-link query format shared with the payment page
//!
//! All computation is synchronous and single-writer; there is no server,
//! no on-chain interaction, and no persistence beyond CSV portfolio files.

pub mod credit;
pub mod loan;
pub mod payment;

mod error;

pub use credit::{CreditHistory, CreditProfile, CreditTier, RateSchedule};
pub use error::{EngineError, Result};
pub use loan::{Loan, LoanBook, LoanQuote, LoanRequest, LoanStatus, PaymentRecord, PaymentType};
pub use payment::PaymentLink;
