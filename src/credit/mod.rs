//! Credit scoring: tier classification and history aggregates

mod profile;
mod tier;

pub use profile::{repayment_rate, CreditHistory, CreditProfile};
pub use tier::{clamp_score, CreditTier, RateSchedule, MAX_SCORE, MIN_ELIGIBLE_SCORE, MIN_SCORE};
