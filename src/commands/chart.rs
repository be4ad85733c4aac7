//! Chart command implementation.
//!
//! The chart command:
//! 1. Reads the ledger, aggregates months × categories and computes statistics
//! 2. Renders the stacked bar chart with the summary columns
//! 3. Writes output files

use super::models::ChartArgs;
use super::utils::load_and_analyze;
use crate::chart::{generate_chart, generate_text_summary, ChartData};
use crate::output::{write_png, write_svg};
use crate::utils::config::{MAX_CHART_DIMENSION, MIN_CHART_DIMENSION};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the chart command
///
/// **Public** - main entry point called from main.rs
///
/// Prints the overall average/median lines to stdout and writes the SVG
/// (and PNG, unless disabled) to `output_dir/name.{svg,png}`.
///
/// # Errors
/// * Ledger read or parse failures
/// * Empty ledger (nothing to chart)
/// * File write errors
pub fn execute_chart(args: ChartArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Starting chart for ledger: {}", args.input.display());

    info!("Step 1/3: Aggregating and analyzing ledger...");
    let (matrix, analysis) = load_and_analyze(&args.input, args.month_order, &args.renames)?;

    debug!(
        "Matrix: {} months, {} categories",
        matrix.months().len(),
        matrix.rows().len()
    );

    println!("{}", generate_text_summary(&analysis, &args.chart_config.currency));

    info!("Step 2/3: Rendering chart...");
    let chart_data = ChartData::assemble(&matrix, &analysis);
    let svg = generate_chart(&chart_data, Some(&args.chart_config))
        .context("Failed to generate chart")?;

    info!("Step 3/3: Writing output files...");
    let svg_path = args.svg_path();
    write_svg(&svg, &svg_path).context("Failed to write chart SVG")?;
    info!("✓ Chart SVG written to: {}", svg_path.display());

    if args.write_png {
        let png_path = args.png_path();
        write_png(&svg, &png_path).context("Failed to write chart PNG")?;
        info!("✓ Chart PNG written to: {}", png_path.display());
    }

    let elapsed = start_time.elapsed();
    info!("Chart completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Validate chart arguments
///
/// **Public** - can be called before execute_chart for early validation
pub fn validate_args(args: &ChartArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.name.is_empty() {
        anyhow::bail!("Chart name cannot be empty");
    }

    if args.name.contains('/') || args.name.contains('\\') {
        anyhow::bail!("Chart name must not contain path separators");
    }

    let dimensions = MIN_CHART_DIMENSION..=MAX_CHART_DIMENSION;
    let (width, height) = (args.chart_config.width, args.chart_config.height);
    if !dimensions.contains(&width) || !dimensions.contains(&height) {
        anyhow::bail!(
            "Chart size {}x{} out of range ({}..={} per side)",
            width,
            height,
            MIN_CHART_DIMENSION,
            MAX_CHART_DIMENSION
        );
    }

    for rename in &args.renames {
        if rename.from.is_empty() || rename.to.is_empty() {
            anyhow::bail!("Category renames need non-empty names");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartConfig;
    use crate::commands::models::CategoryRename;

    #[test]
    fn test_validate_args_default() {
        assert!(validate_args(&ChartArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_args_empty_input() {
        let args = ChartArgs {
            input: Default::default(),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_name_with_separator() {
        let args = ChartArgs {
            name: "../escape".to_string(),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_size_out_of_range() {
        let args = ChartArgs {
            chart_config: ChartConfig::new().with_size(100, 600),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());

        let args = ChartArgs {
            chart_config: ChartConfig::new().with_size(1000, 9000),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_rename() {
        let args = ChartArgs {
            renames: vec![CategoryRename {
                from: "Service".to_string(),
                to: String::new(),
            }],
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_output_paths() {
        let args = ChartArgs::default();
        assert!(args.svg_path().ends_with("example-bar-chart.svg"));
        assert!(args.png_path().ends_with("example-bar-chart.png"));
    }
}
