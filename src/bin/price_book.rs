//! Reprice a microloan portfolio CSV and report book status
//!
//! Loads a portfolio, sweeps overdue loans as of the valuation date, reprices
//! every loan in parallel, and writes a priced CSV plus a summary block.

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use clap::Parser;
use microloan_engine::loan::{load_loans, round_currency, LoanBook, LoanStatus, ProductLimits};
use microloan_engine::RateSchedule;
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(about = "Reprice a microloan portfolio and report book status")]
struct Args {
    /// Portfolio CSV to load
    input: PathBuf,

    /// Priced output CSV path
    #[arg(long, default_value = "priced_portfolio.csv")]
    output: PathBuf,

    /// Valuation date (YYYY-MM-DD); defaults to the current date
    #[arg(long)]
    as_of: Option<NaiveDate>,
}

/// One priced output row
struct PricedRow {
    id: u64,
    borrower: String,
    status: LoanStatus,
    principal: f64,
    monthly_rate_percent: f64,
    interest: f64,
    total_repayment: f64,
    amount_due: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let as_of = match args.as_of {
        Some(date) => date
            .and_hms_opt(0, 0, 0)
            .context("invalid valuation date")?
            .and_utc(),
        None => Utc::now(),
    };

    let start = Instant::now();
    let loans = load_loans(&args.input)
        .with_context(|| format!("loading portfolio {}", args.input.display()))?;
    println!("Loaded {} loans in {:?}", loans.len(), start.elapsed());

    let mut book = LoanBook::with_loans(RateSchedule::default(), ProductLimits::default(), loans);
    let moved = book.mark_overdue(as_of);
    if moved > 0 {
        println!("{} loans moved to overdue as of {}", moved, as_of.date_naive());
    }

    let rows: Vec<PricedRow> = book
        .loans()
        .par_iter()
        .map(|loan| PricedRow {
            id: loan.id,
            borrower: loan.borrower.clone(),
            status: loan.status,
            principal: loan.principal,
            monthly_rate_percent: loan.monthly_rate_percent,
            interest: loan.interest(),
            total_repayment: loan.total_repayment(),
            amount_due: loan.amount_due(),
        })
        .collect();

    let mut file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    writeln!(file, "Id,Borrower,Status,Principal,RatePct,Interest,TotalRepayment,AmountDue")?;
    for row in &rows {
        writeln!(
            file,
            "{},{},{:?},{:.2},{:.2},{:.2},{:.2},{:.2}",
            row.id,
            row.borrower,
            row.status,
            round_currency(row.principal),
            row.monthly_rate_percent,
            round_currency(row.interest),
            round_currency(row.total_repayment),
            round_currency(row.amount_due),
        )?;
    }
    println!("Output written to {}", args.output.display());

    let stats = book.stats();
    println!("\nBook Summary (as of {}):", as_of.date_naive());
    println!("  Active:  {}", stats.active);
    println!("  Repaid:  {}", stats.repaid);
    println!("  Overdue: {}", stats.overdue);
    println!("  Total borrowed: ${:.2}", round_currency(stats.total_borrowed));
    println!("  Outstanding:    ${:.2}", round_currency(stats.outstanding));

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
