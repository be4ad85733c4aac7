//! Summary statistics over the volume matrix.
//!
//! Overall statistics treat each category's total across all months as one
//! sample; per-category statistics run over that category's monthly volumes.

use super::volume::VolumeMatrix;
use crate::utils::config::MONEY_DP;
use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Round to 2 decimal places, halves away from zero
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Arithmetic mean; zero for an empty slice
pub fn mean(values: &[Decimal]) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }
    let total: Decimal = values.iter().sum();
    total / Decimal::from(values.len())
}

/// Median; mean of the two middle values for even lengths, zero when empty
pub fn median(values: &[Decimal]) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / Decimal::TWO
    } else {
        sorted[mid]
    }
}

/// A statistic for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStat {
    pub category: String,
    pub value: Decimal,
}

/// Analysis result
///
/// **Public** - returned from analyze_volumes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// Mean over categories of each category's total spend
    pub avg_expense: Decimal,

    /// Median over categories of each category's total spend
    pub median_expense: Decimal,

    /// Mean monthly spend per category, in category order
    pub avg_expense_per_category: Vec<CategoryStat>,

    /// Median monthly spend per category, in category order
    pub median_expense_per_category: Vec<CategoryStat>,
}

impl Analysis {
    pub fn avg_for(&self, category: &str) -> Option<Decimal> {
        lookup(&self.avg_expense_per_category, category)
    }

    pub fn median_for(&self, category: &str) -> Option<Decimal> {
        lookup(&self.median_expense_per_category, category)
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Categories: {} | Mean total: {} | Median total: {}",
            self.avg_expense_per_category.len(),
            self.avg_expense,
            self.median_expense
        )
    }
}

fn lookup(stats: &[CategoryStat], category: &str) -> Option<Decimal> {
    stats.iter().find(|s| s.category == category).map(|s| s.value)
}

/// Compute overall and per-category mean/median
///
/// **Public** - main entry point for the statistics pass
///
/// An empty matrix yields zero overall values and empty per-category lists;
/// a matrix without months yields zero per-category values.
pub fn analyze_volumes(matrix: &VolumeMatrix) -> Analysis {
    let totals: Vec<Decimal> = matrix
        .rows()
        .iter()
        .map(|row| row.volumes.iter().sum::<Decimal>())
        .collect();

    let analysis = Analysis {
        avg_expense: round_money(mean(&totals)),
        median_expense: round_money(median(&totals)),
        avg_expense_per_category: per_category(matrix, mean),
        median_expense_per_category: per_category(matrix, median),
    };

    debug!("Analysis: {}", analysis.summary());

    analysis
}

/// Apply `stat` to every category's monthly volumes
fn per_category(matrix: &VolumeMatrix, stat: fn(&[Decimal]) -> Decimal) -> Vec<CategoryStat> {
    matrix
        .rows()
        .iter()
        .map(|row| CategoryStat {
            category: row.category.clone(),
            value: round_money(stat(&row.volumes)),
        })
        .collect()
}
