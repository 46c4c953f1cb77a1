//! Typed errors for loan-request validation and portfolio I/O

use thiserror::Error;

/// Engine-wide result alias
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors surfaced by the loan book and portfolio loader
#[derive(Debug, Error)]
pub enum EngineError {
    /// Score is below the minimum eligible score (500)
    #[error("credit score {score} is below the minimum eligible score {minimum}")]
    IneligibleScore { score: u16, minimum: u16 },

    /// Principal outside the product limits
    #[error("principal {principal:.2} is outside the allowed range {min:.2}-{max:.2}")]
    PrincipalOutOfRange { principal: f64, min: f64, max: f64 },

    /// Repayment period is not one of the offered terms
    #[error("unsupported repayment period: {0} days")]
    UnsupportedDuration(i64),

    /// Loan id not present in the book
    #[error("loan {0} not found")]
    LoanNotFound(u64),

    /// Repayment against a loan that is already settled
    #[error("loan {0} is already repaid")]
    AlreadyRepaid(u64),

    /// Partial repayments are not supported; the full amount due is required
    #[error("repayment {paid:.2} does not cover amount due {due:.2} for loan {id}")]
    InsufficientRepayment { id: u64, paid: f64, due: f64 },

    /// Malformed payment link query
    #[error("invalid payment link: {0}")]
    InvalidPaymentLink(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
