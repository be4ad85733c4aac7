//! Ledger parsing and record definitions.
//!
//! This module handles:
//! - Reading the CSV card-account export
//! - Converting raw rows into typed transactions
//! - Validating dates and amounts

pub mod ledger;
pub mod schema;

// Re-export main types
pub use ledger::{parse_amount, parse_date, parse_ledger, parse_ledger_reader};
pub use schema::{LedgerRow, Transaction, LEDGER_COLUMNS};
