//! Loan data structures, pricing, lifecycle, and portfolio I/O

mod book;
mod data;
pub mod loader;
mod quote;

pub use book::{BookStats, LoanBook, LoanRequest, ProductLimits};
pub use data::{Loan, LoanStatus, PaymentRecord, PaymentType};
pub use loader::{load_loans, load_loans_from_reader, write_loans};
pub use quote::{round_currency, simple_interest, total_repayment, LoanQuote};
