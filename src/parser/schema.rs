//! Transaction record definitions.
//!
//! `LedgerRow` mirrors the CSV export column-for-column; `Transaction` is the
//! typed record the aggregator works on.

use crate::utils::config::{
    COL_CARD_LAST4, COL_CARD_NAME, COL_CATEGORY, COL_DATE, COL_FOREIGN_AMOUNT,
    COL_FOREIGN_CURRENCY, COL_FUNDING_AMOUNT, COL_FUNDING_CURRENCY, COL_MERCHANT, COL_NOTES,
    COL_TYPE, DECLINED_TYPE,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Raw ledger row as it appears in the CSV file
///
/// Only date, funding amount, type and category are required columns.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerRow {
    #[serde(rename = "Date (YYYY-MM-DD as UTC)")]
    pub date: String,

    #[serde(rename = "Merchant", default)]
    pub merchant: String,

    #[serde(rename = "Txn Amount (Funding Card)")]
    pub funding_amount: String,

    #[serde(rename = "Txn Currency (Funding Card)", default)]
    pub funding_currency: String,

    #[serde(rename = "Txn Amount (Foreign Spend)", default)]
    pub foreign_amount: String,

    #[serde(rename = "Txn Currency (Foreign Spend)", default)]
    pub foreign_currency: String,

    #[serde(rename = "Card Name", default)]
    pub card_name: String,

    #[serde(rename = "Card Last 4 Digits", default)]
    pub card_last4: String,

    #[serde(rename = "Type")]
    pub txn_type: String,

    #[serde(rename = "Category")]
    pub category: Option<String>,

    #[serde(rename = "Notes", default)]
    pub notes: String,
}

/// Column headers in export order
pub const LEDGER_COLUMNS: [&str; 11] = [
    COL_DATE,
    COL_MERCHANT,
    COL_FUNDING_AMOUNT,
    COL_FUNDING_CURRENCY,
    COL_FOREIGN_AMOUNT,
    COL_FOREIGN_CURRENCY,
    COL_CARD_NAME,
    COL_CARD_LAST4,
    COL_TYPE,
    COL_CATEGORY,
    COL_NOTES,
];

/// A single card transaction
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Transaction date (UTC calendar date)
    pub date: NaiveDate,

    pub merchant: String,

    /// Amount charged against the funding card, signed
    pub amount: Decimal,

    pub currency: String,

    /// Foreign-spend amount, kept verbatim
    pub foreign_amount: String,

    pub foreign_currency: String,

    pub card_name: String,

    pub card_last4: String,

    /// Transaction type/status (e.g. "Purchase", "Declined")
    pub txn_type: String,

    /// Category label; `None` when the cell is empty
    pub category: Option<String>,

    pub notes: String,
}

impl Transaction {
    /// Create a transaction with only the fields the aggregator reads
    pub fn new(
        date: NaiveDate,
        category: Option<&str>,
        amount: Decimal,
        txn_type: impl Into<String>,
    ) -> Self {
        Self {
            date,
            merchant: String::new(),
            amount,
            currency: String::new(),
            foreign_amount: String::new(),
            foreign_currency: String::new(),
            card_name: String::new(),
            card_last4: String::new(),
            txn_type: txn_type.into(),
            category: category.map(str::to_string),
            notes: String::new(),
        }
    }

    /// Returns true if this transaction was declined
    pub fn is_declined(&self) -> bool {
        self.txn_type == DECLINED_TYPE
    }

    /// Category label, treating an empty string like a missing one
    pub fn category_label(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}
