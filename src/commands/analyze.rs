//! Analyze command: statistics only, no chart.

use super::models::AnalyzeArgs;
use super::utils::load_and_analyze;
use crate::aggregator::{Analysis, MonthKey};
use crate::chart::generate_text_summary;
use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

/// JSON document printed by `analyze --json`
#[derive(Debug, Serialize)]
pub struct AnalysisReport<'a> {
    pub months: &'a [MonthKey],
    pub categories: Vec<&'a str>,
    #[serde(flatten)]
    pub analysis: &'a Analysis,
}

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
pub fn execute_analyze(args: AnalyzeArgs) -> Result<()> {
    info!("Analyzing ledger: {}", args.input.display());

    let (matrix, analysis) = load_and_analyze(&args.input, args.month_order, &args.renames)?;

    if args.json {
        let report = AnalysisReport {
            months: matrix.months(),
            categories: matrix.categories().collect(),
            analysis: &analysis,
        };
        let json = serde_json::to_string_pretty(&report)
            .context("Failed to serialize analysis")?;
        println!("{}", json);
    } else {
        println!("{}", generate_text_summary(&analysis, &args.currency));
    }

    Ok(())
}
