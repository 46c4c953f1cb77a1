//! Credit tier classification
//!
//! Maps a numeric credit score onto a named tier and its monthly interest
//! rate via fixed thresholds. Scores below the minimum eligible score have
//! no tier and cannot be priced.

use serde::{Deserialize, Serialize};

/// Lowest representable credit score
pub const MIN_SCORE: u16 = 300;

/// Highest representable credit score
pub const MAX_SCORE: u16 = 850;

/// Minimum score eligible to borrow
pub const MIN_ELIGIBLE_SCORE: u16 = 500;

/// Clamp a raw score into the valid [300, 850] range
///
/// Scores outside the range have no defined meaning upstream, so the
/// classifier treats 900 as 850 and 100 as 300.
pub fn clamp_score(score: u16) -> u16 {
    score.clamp(MIN_SCORE, MAX_SCORE)
}

/// Named credit-score bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CreditTier {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl CreditTier {
    /// Display label matching the dashboard
    pub fn label(&self) -> &'static str {
        match self {
            CreditTier::Poor => "Poor",
            CreditTier::Fair => "Fair",
            CreditTier::Good => "Good",
            CreditTier::Excellent => "Excellent",
        }
    }
}

/// One band of the rate schedule
///
/// Applies to scores at or above `min_score` and below the next band's floor.
#[derive(Debug, Clone)]
struct RateBand {
    min_score: u16,
    tier: CreditTier,
    monthly_rate_percent: f64,
}

/// Score-threshold table mapping tiers to monthly rates
#[derive(Debug, Clone)]
pub struct RateSchedule {
    /// Bands in descending order of `min_score`
    bands: Vec<RateBand>,
    /// Scores below this floor are ineligible
    min_eligible_score: u16,
}

impl Default for RateSchedule {
    fn default() -> Self {
        Self {
            bands: vec![
                RateBand { min_score: 750, tier: CreditTier::Excellent, monthly_rate_percent: 2.0 },
                RateBand { min_score: 700, tier: CreditTier::Good, monthly_rate_percent: 2.5 },
                RateBand { min_score: 650, tier: CreditTier::Fair, monthly_rate_percent: 3.0 },
                RateBand { min_score: 500, tier: CreditTier::Poor, monthly_rate_percent: 4.0 },
            ],
            min_eligible_score: MIN_ELIGIBLE_SCORE,
        }
    }
}

impl RateSchedule {
    /// Build a schedule from (min_score, tier, monthly rate %) rows
    ///
    /// Rows are sorted into descending threshold order; the lowest threshold
    /// becomes the eligibility floor.
    pub fn from_bands(rows: &[(u16, CreditTier, f64)]) -> Self {
        let mut bands: Vec<RateBand> = rows
            .iter()
            .map(|&(min_score, tier, monthly_rate_percent)| RateBand {
                min_score,
                tier,
                monthly_rate_percent,
            })
            .collect();
        bands.sort_by(|a, b| b.min_score.cmp(&a.min_score));
        let min_eligible_score = bands.last().map(|b| b.min_score).unwrap_or(MIN_ELIGIBLE_SCORE);
        Self { bands, min_eligible_score }
    }

    /// Minimum score eligible to borrow under this schedule
    pub fn min_eligible_score(&self) -> u16 {
        self.min_eligible_score
    }

    /// Whether a (clamped) score qualifies for any tier
    pub fn is_eligible(&self, score: u16) -> bool {
        clamp_score(score) >= self.min_eligible_score
    }

    /// Classify a score into a tier; `None` when ineligible
    pub fn classify(&self, score: u16) -> Option<CreditTier> {
        self.tier_and_rate(score).map(|(tier, _)| tier)
    }

    /// Monthly interest rate (percent) for a score; `None` when ineligible
    pub fn monthly_rate(&self, score: u16) -> Option<f64> {
        self.tier_and_rate(score).map(|(_, rate)| rate)
    }

    /// Tier and monthly rate for a score; `None` when ineligible
    pub fn tier_and_rate(&self, score: u16) -> Option<(CreditTier, f64)> {
        let score = clamp_score(score);
        self.bands
            .iter()
            .find(|band| score >= band.min_score)
            .map(|band| (band.tier, band.monthly_rate_percent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        let schedule = RateSchedule::default();

        assert_eq!(schedule.tier_and_rate(850), Some((CreditTier::Excellent, 2.0)));
        assert_eq!(schedule.tier_and_rate(750), Some((CreditTier::Excellent, 2.0)));
        assert_eq!(schedule.tier_and_rate(749), Some((CreditTier::Good, 2.5)));
        assert_eq!(schedule.tier_and_rate(720), Some((CreditTier::Good, 2.5)));
        assert_eq!(schedule.tier_and_rate(700), Some((CreditTier::Good, 2.5)));
        assert_eq!(schedule.tier_and_rate(699), Some((CreditTier::Fair, 3.0)));
        assert_eq!(schedule.tier_and_rate(650), Some((CreditTier::Fair, 3.0)));
        assert_eq!(schedule.tier_and_rate(649), Some((CreditTier::Poor, 4.0)));
        assert_eq!(schedule.tier_and_rate(500), Some((CreditTier::Poor, 4.0)));
    }

    #[test]
    fn test_ineligible_scores() {
        let schedule = RateSchedule::default();

        assert_eq!(schedule.classify(499), None);
        assert_eq!(schedule.monthly_rate(400), None);
        assert!(!schedule.is_eligible(499));
        assert!(schedule.is_eligible(500));
    }

    #[test]
    fn test_score_clamping() {
        let schedule = RateSchedule::default();

        // Above 850 clamps to 850 -> Excellent
        assert_eq!(schedule.classify(900), Some(CreditTier::Excellent));
        // Below 300 clamps to 300 -> still ineligible
        assert_eq!(schedule.classify(100), None);
        assert_eq!(clamp_score(100), 300);
        assert_eq!(clamp_score(900), 850);
        assert_eq!(clamp_score(720), 720);
    }

    #[test]
    fn test_custom_schedule() {
        // Stricter product: only two tiers, floor at 600
        let schedule = RateSchedule::from_bands(&[
            (600, CreditTier::Fair, 3.5),
            (760, CreditTier::Excellent, 1.8),
        ]);

        assert_eq!(schedule.min_eligible_score(), 600);
        assert_eq!(schedule.tier_and_rate(780), Some((CreditTier::Excellent, 1.8)));
        assert_eq!(schedule.tier_and_rate(650), Some((CreditTier::Fair, 3.5)));
        assert_eq!(schedule.classify(599), None);
    }
}
