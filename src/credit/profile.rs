//! Credit profile and repayment-history aggregates
//!
//! The profile is derived from the score on every read; the tier is never
//! stored alongside it.

use super::tier::{clamp_score, CreditTier, RateSchedule};
use serde::{Deserialize, Serialize};

/// Repayment rate as a percentage of resolved loans
///
/// `repaid / (repaid + defaulted) * 100`, defined as 0 when no loans have
/// resolved yet. No weighting by loan size or recency.
pub fn repayment_rate(repaid: u32, defaulted: u32) -> f64 {
    let resolved = repaid + defaulted;
    if resolved == 0 {
        return 0.0;
    }
    f64::from(repaid) / f64::from(resolved) * 100.0
}

/// Point-in-time view of a borrower's credit standing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditProfile {
    /// Clamped credit score in [300, 850]
    pub score: u16,
    /// Tier for the score; `None` below the eligibility floor
    pub tier: Option<CreditTier>,
    /// Identity verification flag from the ENS registry
    pub verified: bool,
}

impl CreditProfile {
    /// Derive a profile from a raw score
    pub fn from_score(score: u16, verified: bool, schedule: &RateSchedule) -> Self {
        let score = clamp_score(score);
        Self {
            score,
            tier: schedule.classify(score),
            verified,
        }
    }
}

/// Accumulated borrowing history behind a credit profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditHistory {
    pub score: u16,
    pub loans_repaid: u32,
    pub loans_defaulted: u32,
    pub total_borrowed: f64,
    pub total_repaid: f64,
    pub verified: bool,
}

impl CreditHistory {
    /// Repayment rate over this history's resolved loans
    pub fn repayment_rate(&self) -> f64 {
        repayment_rate(self.loans_repaid, self.loans_defaulted)
    }

    /// Derive the current profile from this history
    pub fn profile(&self, schedule: &RateSchedule) -> CreditProfile {
        CreditProfile::from_score(self.score, self.verified, schedule)
    }
}
