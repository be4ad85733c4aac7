//! Month × category volume matrix.
//!
//! Each cell holds the summed funding amount of all non-declined transactions
//! of one category in one calendar month, rounded to 2 decimal places.

use super::metrics::round_money;
use super::months::MonthKey;
use crate::parser::Transaction;
use log::debug;
use rust_decimal::Decimal;
use serde::Serialize;

/// Monthly volumes of one category, one entry per month column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryVolumes {
    pub category: String,
    pub volumes: Vec<Decimal>,
}

/// Category-keyed volumes over an ordered list of months
///
/// Invariant: every row has exactly `months.len()` entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeMatrix {
    months: Vec<MonthKey>,
    rows: Vec<CategoryVolumes>,
}

impl VolumeMatrix {
    pub fn months(&self) -> &[MonthKey] {
        &self.months
    }

    pub fn rows(&self) -> &[CategoryVolumes] {
        &self.rows
    }

    /// Category labels in row order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.category.as_str())
    }

    /// Volumes of one category, if present
    pub fn row(&self, category: &str) -> Option<&[Decimal]> {
        self.rows
            .iter()
            .find(|r| r.category == category)
            .map(|r| r.volumes.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty() || self.rows.is_empty()
    }

    /// Rename a category in place
    ///
    /// Renaming onto an existing label merges both rows by summing month by
    /// month; the merged row keeps the target's position. Returns false if
    /// `from` does not exist.
    pub fn rename_category(&mut self, from: &str, to: &str) -> bool {
        let Some(source) = self.rows.iter().position(|r| r.category == from) else {
            return false;
        };
        if from == to {
            return true;
        }

        match self.rows.iter().position(|r| r.category == to) {
            Some(target) => {
                let merged = self.rows.remove(source);
                let target = if source < target { target - 1 } else { target };
                let row = &mut self.rows[target];
                for (cell, extra) in row.volumes.iter_mut().zip(merged.volumes) {
                    *cell = round_money(*cell + extra);
                }
                debug!("Merged category '{}' into '{}'", from, to);
            }
            None => {
                self.rows[source].category = to.to_string();
                debug!("Renamed category '{}' to '{}'", from, to);
            }
        }

        true
    }
}

/// Build the volume matrix
///
/// **Public** - main aggregation entry point
///
/// # Arguments
/// * `transactions` - Ledger records (declined ones are filtered here)
/// * `months` - Month columns, in display order
/// * `categories` - Category rows, in display order
pub fn build_volume_matrix(
    transactions: &[Transaction],
    months: &[MonthKey],
    categories: &[String],
) -> VolumeMatrix {
    debug!(
        "Aggregating {} transactions into {} categories x {} months",
        transactions.len(),
        categories.len(),
        months.len()
    );

    let rows = categories
        .iter()
        .map(|category| CategoryVolumes {
            category: category.clone(),
            volumes: months
                .iter()
                .map(|month| category_month_volume(transactions, category, *month))
                .collect(),
        })
        .collect();

    VolumeMatrix {
        months: months.to_vec(),
        rows,
    }
}

/// Sum of funding amounts for one (category, month) cell, rounded
pub fn category_month_volume(
    transactions: &[Transaction],
    category: &str,
    month: MonthKey,
) -> Decimal {
    let total: Decimal = transactions
        .iter()
        .filter(|t| !t.is_declined())
        .filter(|t| t.category_label() == Some(category))
        .filter(|t| month.contains(t.date))
        .map(|t| t.amount)
        .sum();

    round_money(total)
}
