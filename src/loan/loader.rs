//! Portfolio CSV loading and writing
//!
//! Columns: id, borrower, ens_name, purpose, principal, monthly_rate_percent,
//! duration_days, start_date, due_date, status. Dates are RFC 3339; status is
//! one of active/repaid/overdue.

use super::data::Loan;
use crate::error::Result;
use log::info;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Load loans from a portfolio CSV file
pub fn load_loans<P: AsRef<Path>>(path: P) -> Result<Vec<Loan>> {
    let file = File::open(path.as_ref())?;
    let loans = load_loans_from_reader(file)?;
    info!("loaded {} loans from {}", loans.len(), path.as_ref().display());
    Ok(loans)
}

/// Load loans from any reader producing portfolio CSV
pub fn load_loans_from_reader<R: Read>(reader: R) -> Result<Vec<Loan>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut loans = Vec::new();
    for record in csv_reader.deserialize() {
        let loan: Loan = record?;
        loans.push(loan);
    }
    Ok(loans)
}

/// Write loans as portfolio CSV
pub fn write_loans<W: Write>(writer: W, loans: &[Loan]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for loan in loans {
        csv_writer.serialize(loan)?;
    }
    csv_writer.flush()?;
    Ok(())
}
