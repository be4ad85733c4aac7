//! Configuration and constants for the CLI.

/// Ledger column headers, in file order
pub const COL_DATE: &str = "Date (YYYY-MM-DD as UTC)";
pub const COL_MERCHANT: &str = "Merchant";
pub const COL_FUNDING_AMOUNT: &str = "Txn Amount (Funding Card)";
pub const COL_FUNDING_CURRENCY: &str = "Txn Currency (Funding Card)";
pub const COL_FOREIGN_AMOUNT: &str = "Txn Amount (Foreign Spend)";
pub const COL_FOREIGN_CURRENCY: &str = "Txn Currency (Foreign Spend)";
pub const COL_CARD_NAME: &str = "Card Name";
pub const COL_CARD_LAST4: &str = "Card Last 4 Digits";
pub const COL_TYPE: &str = "Type";
pub const COL_CATEGORY: &str = "Category";
pub const COL_NOTES: &str = "Notes";

/// Transaction type excluded from every aggregate
pub const DECLINED_TYPE: &str = "Declined";

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Decimal places kept for volumes and statistics
pub const MONEY_DP: u32 = 2;

// Synthetic column keys appended after the month columns, in this order
pub const AVERAGE_KEY: &str = "average";
pub const MEDIAN_KEY: &str = "median";
pub const AVERAGE_LABEL: &str = "Average";
pub const MEDIAN_LABEL: &str = "Median";

pub const DEFAULT_INPUT: &str = "./input-data/example-input.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "./output";
pub const DEFAULT_CHART_NAME: &str = "example-bar-chart";
pub const DEFAULT_CURRENCY: &str = "€";

pub const DEFAULT_CHART_WIDTH: u32 = 1000;
pub const DEFAULT_CHART_HEIGHT: u32 = 600;
pub const MIN_CHART_DIMENSION: u32 = 200;
pub const MAX_CHART_DIMENSION: u32 = 8000;
