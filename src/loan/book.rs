//! In-memory loan book: request validation, lifecycle transitions, stats
//!
//! Single-user, single-writer. Eligibility (score >= 500) is enforced here at
//! the request boundary; the classifier itself stays total over clamped
//! scores.

use super::data::{Loan, LoanStatus, PaymentRecord, PaymentType};
use super::quote::LoanQuote;
use crate::credit::RateSchedule;
use crate::error::{EngineError, Result};
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Principal and term limits from the product sheet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductLimits {
    #[serde(default = "default_min_principal")]
    pub min_principal: f64,
    #[serde(default = "default_max_principal")]
    pub max_principal: f64,
    /// Repayment periods offered by the request form, in days
    #[serde(default = "default_durations")]
    pub offered_durations: Vec<i64>,
}

fn default_min_principal() -> f64 { 10.0 }
fn default_max_principal() -> f64 { 1_000.0 }
fn default_durations() -> Vec<i64> { vec![30, 60, 90] }

impl Default for ProductLimits {
    fn default() -> Self {
        Self {
            min_principal: 10.0,
            max_principal: 1_000.0,
            offered_durations: vec![30, 60, 90],
        }
    }
}

/// A loan application from the request form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanRequest {
    pub borrower: String,
    pub ens_name: Option<String>,
    pub purpose: Option<String>,
    pub principal: f64,
    pub duration_days: i64,
    pub credit_score: u16,
}

/// Status counts and exposure totals across the book
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BookStats {
    pub active: usize,
    pub repaid: usize,
    pub overdue: usize,
    pub total_borrowed: f64,
    /// Amount due across unsettled loans
    pub outstanding: f64,
}

/// The loan book
pub struct LoanBook {
    schedule: RateSchedule,
    limits: ProductLimits,
    loans: Vec<Loan>,
    payments: Vec<PaymentRecord>,
    next_id: u64,
}

impl LoanBook {
    /// Create an empty book with the default rate schedule and limits
    pub fn new() -> Self {
        Self::with_schedule(RateSchedule::default(), ProductLimits::default())
    }

    /// Create an empty book with a custom schedule and limits
    pub fn with_schedule(schedule: RateSchedule, limits: ProductLimits) -> Self {
        Self {
            schedule,
            limits,
            loans: Vec::new(),
            payments: Vec::new(),
            next_id: 1,
        }
    }

    /// Seed the book with existing loans (e.g. from a portfolio CSV)
    pub fn with_loans(schedule: RateSchedule, limits: ProductLimits, loans: Vec<Loan>) -> Self {
        let next_id = loans.iter().map(|l| l.id + 1).max().unwrap_or(1);
        Self {
            schedule,
            limits,
            loans,
            payments: Vec::new(),
            next_id,
        }
    }

    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    pub fn payments(&self) -> &[PaymentRecord] {
        &self.payments
    }

    pub fn get(&self, id: u64) -> Option<&Loan> {
        self.loans.iter().find(|l| l.id == id)
    }

    /// Validate and open a loan; returns the id of the new Active loan
    pub fn request_loan(&mut self, request: &LoanRequest, now: DateTime<Utc>) -> Result<u64> {
        let quote = self.quote(request, now)?;

        let id = self.next_id;
        self.next_id += 1;
        self.loans.push(Loan {
            id,
            borrower: request.borrower.clone(),
            ens_name: request.ens_name.clone(),
            purpose: request.purpose.clone(),
            principal: quote.principal,
            monthly_rate_percent: quote.monthly_rate_percent,
            duration_days: quote.duration_days,
            start_date: quote.start_date,
            due_date: quote.due_date,
            status: LoanStatus::Active,
        });

        info!(
            "opened loan {} for {}: principal {:.2} at {:.1}%/month, due {}",
            id, request.borrower, quote.principal, quote.monthly_rate_percent, quote.due_date
        );
        Ok(id)
    }

    /// Price a request without opening a loan
    pub fn quote(&self, request: &LoanRequest, now: DateTime<Utc>) -> Result<LoanQuote> {
        let rate = self
            .schedule
            .monthly_rate(request.credit_score)
            .ok_or(EngineError::IneligibleScore {
                score: request.credit_score,
                minimum: self.schedule.min_eligible_score(),
            })?;

        if request.principal < self.limits.min_principal
            || request.principal > self.limits.max_principal
        {
            return Err(EngineError::PrincipalOutOfRange {
                principal: request.principal,
                min: self.limits.min_principal,
                max: self.limits.max_principal,
            });
        }

        if !self.limits.offered_durations.contains(&request.duration_days) {
            return Err(EngineError::UnsupportedDuration(request.duration_days));
        }

        Ok(LoanQuote::price(request.principal, rate, request.duration_days, now))
    }

    /// Apply a full repayment to a loan
    ///
    /// Partial repayments are rejected; the amount must cover the total due.
    /// Works from both Active and Overdue.
    pub fn record_repayment(&mut self, id: u64, amount: f64, now: DateTime<Utc>) -> Result<()> {
        let loan = self
            .loans
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(EngineError::LoanNotFound(id))?;

        if loan.status == LoanStatus::Repaid {
            return Err(EngineError::AlreadyRepaid(id));
        }

        let due = loan.total_repayment();
        // Small epsilon so a rounded display amount still settles the loan
        if amount + 1e-9 < due {
            return Err(EngineError::InsufficientRepayment { id, paid: amount, due });
        }

        loan.status = LoanStatus::Repaid;
        self.payments.push(PaymentRecord {
            amount,
            timestamp: now,
            payment_type: PaymentType::LoanRepayment,
        });

        info!("loan {} repaid: {:.2} received", id, amount);
        Ok(())
    }

    /// Sweep Active loans past their due date to Overdue; returns how many moved
    pub fn mark_overdue(&mut self, now: DateTime<Utc>) -> usize {
        let mut moved = 0;
        for loan in &mut self.loans {
            if loan.status == LoanStatus::Active && loan.is_past_due(now) {
                loan.status = LoanStatus::Overdue;
                debug!("loan {} overdue since {}", loan.id, loan.due_date);
                moved += 1;
            }
        }
        moved
    }

    /// Status counts and exposure totals
    pub fn stats(&self) -> BookStats {
        let mut stats = BookStats::default();
        for loan in &self.loans {
            match loan.status {
                LoanStatus::Active => stats.active += 1,
                LoanStatus::Repaid => stats.repaid += 1,
                LoanStatus::Overdue => stats.overdue += 1,
            }
            stats.total_borrowed += loan.principal;
            stats.outstanding += loan.amount_due();
        }
        stats
    }
}

impl Default for LoanBook {
    fn default() -> Self {
        Self::new()
    }
}
