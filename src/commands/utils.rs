use super::models::CategoryRename;
use crate::aggregator::{aggregate, analyze_volumes, Analysis, MonthOrder, VolumeMatrix};
use crate::parser::parse_ledger;
use anyhow::{Context, Result};
use log::{debug, warn};
use std::path::Path;

/// Read the ledger, aggregate it, apply renames and analyze
///
/// Shared by the chart and analyze commands.
pub fn load_and_analyze(
    input: &Path,
    order: MonthOrder,
    renames: &[CategoryRename],
) -> Result<(VolumeMatrix, Analysis)> {
    let transactions = parse_ledger(input)
        .with_context(|| format!("Failed to read ledger {}", input.display()))?;

    debug!("Loaded {} transactions", transactions.len());

    let mut matrix = aggregate(&transactions, order);
    apply_renames(&mut matrix, renames);

    let analysis = analyze_volumes(&matrix);
    Ok((matrix, analysis))
}

/// Apply category renames in order, warning about unknown categories
pub fn apply_renames(matrix: &mut VolumeMatrix, renames: &[CategoryRename]) {
    for rename in renames {
        if !matrix.rename_category(&rename.from, &rename.to) {
            warn!("Cannot rename unknown category '{}'", rename.from);
        }
    }
}

/// Display version information
pub fn display_version() {
    println!("Spend Chart v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Monthly category-stacked expenditure charts from card transaction ledgers.");
}
