//! Aggregation of ledger transactions into a month × category matrix.
//!
//! This module transforms parsed transactions into:
//! - Distinct month keys and category labels
//! - The per-category, per-month volume matrix
//! - Mean/median statistics over that matrix

pub mod categories;
pub mod metrics;
pub mod months;
pub mod volume;

// Re-export main types and functions
pub use categories::extract_categories;
pub use metrics::{analyze_volumes, mean, median, round_money, Analysis, CategoryStat};
pub use months::{extract_months, is_chronological, MonthKey, MonthOrder};
pub use volume::{build_volume_matrix, category_month_volume, CategoryVolumes, VolumeMatrix};

use crate::parser::Transaction;

/// Run month extraction, category partitioning and volume aggregation
///
/// **Public** - convenience wrapper over the three aggregation stages
pub fn aggregate(transactions: &[Transaction], order: MonthOrder) -> VolumeMatrix {
    let months = extract_months(transactions.iter().map(|t| t.date), order);
    let categories = extract_categories(transactions);
    build_volume_matrix(transactions, &months, &categories)
}
