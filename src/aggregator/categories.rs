//! Category partitioning.

use crate::parser::Transaction;
use log::debug;

/// Distinct category labels in first-occurrence order
///
/// Transactions without a category are not partitioned.
pub fn extract_categories(transactions: &[Transaction]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    let mut uncategorized = 0usize;

    for txn in transactions {
        match txn.category_label() {
            Some(label) => {
                if !categories.iter().any(|c| c == label) {
                    categories.push(label.to_string());
                }
            }
            None => uncategorized += 1,
        }
    }

    if uncategorized > 0 {
        debug!("Skipping {} transactions without category", uncategorized);
    }
    debug!("Found {} categories", categories.len());

    categories
}
