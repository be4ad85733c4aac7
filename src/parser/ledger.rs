//! CSV ledger reader.
//!
//! Reads a card-account export into `Transaction` records, in file order.
//! File order matters: month ordering downstream depends on it.

use super::schema::{LedgerRow, Transaction};
use crate::utils::config::DATE_FORMAT;
use crate::utils::error::ParseError;
use chrono::NaiveDate;
use log::{debug, info};
use rust_decimal::Decimal;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Parse a ledger CSV file
///
/// **Public** - main entry point for reading transactions
///
/// # Errors
/// * `ParseError::OpenFailed` - file missing or unreadable
/// * `ParseError::Csv` - malformed CSV or missing required column
/// * `ParseError::InvalidDate` / `ParseError::InvalidAmount` - bad cell values
pub fn parse_ledger(path: impl AsRef<Path>) -> Result<Vec<Transaction>, ParseError> {
    let path = path.as_ref();

    info!("Reading ledger: {}", path.display());

    let reader = csv_builder()
        .from_path(path)
        .map_err(|source| ParseError::OpenFailed {
            path: path.display().to_string(),
            source,
        })?;

    read_rows(reader)
}

/// Parse ledger CSV from any reader (used by tests and stdin-style callers)
pub fn parse_ledger_reader<R: Read>(input: R) -> Result<Vec<Transaction>, ParseError> {
    read_rows(csv_builder().from_reader(input))
}

fn csv_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).trim(csv::Trim::All);
    builder
}

fn read_rows<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<Transaction>, ParseError> {
    let mut transactions = Vec::new();

    for (index, result) in reader.deserialize::<LedgerRow>().enumerate() {
        let row = result?;
        transactions.push(to_transaction(row, index + 1)?);
    }

    debug!("Parsed {} transactions", transactions.len());

    Ok(transactions)
}

/// Convert a raw row into a typed transaction
///
/// `row_number` is 1-based over data rows (header excluded).
fn to_transaction(row: LedgerRow, row_number: usize) -> Result<Transaction, ParseError> {
    let date = parse_date(&row.date).ok_or_else(|| ParseError::InvalidDate {
        row: row_number,
        value: row.date.clone(),
    })?;

    let amount = parse_amount(&row.funding_amount).ok_or_else(|| ParseError::InvalidAmount {
        row: row_number,
        value: row.funding_amount.clone(),
    })?;

    Ok(Transaction {
        date,
        merchant: row.merchant,
        amount,
        currency: row.funding_currency,
        foreign_amount: row.foreign_amount,
        foreign_currency: row.foreign_currency,
        card_name: row.card_name,
        card_last4: row.card_last4,
        txn_type: row.txn_type,
        category: row.category.filter(|c| !c.is_empty()),
        notes: row.notes,
    })
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Parse a funding amount; an empty cell counts as zero
pub fn parse_amount(value: &str) -> Option<Decimal> {
    let value = value.trim();
    if value.is_empty() {
        return Some(Decimal::ZERO);
    }
    Decimal::from_str(value).ok()
}
