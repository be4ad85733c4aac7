//! Spend Chart CLI
//!
//! Reads a card transaction ledger and renders a monthly, category-stacked
//! expenditure chart with average and median columns.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use std::path::PathBuf;

use spend_chart::aggregator::MonthOrder;
use spend_chart::chart::ChartConfig;
use spend_chart::commands::{
    display_version, execute_analyze, execute_chart, validate_args, AnalyzeArgs, CategoryRename,
    ChartArgs,
};
use spend_chart::utils::config::{
    DEFAULT_CHART_HEIGHT, DEFAULT_CHART_NAME, DEFAULT_CHART_WIDTH, DEFAULT_CURRENCY,
    DEFAULT_INPUT, DEFAULT_OUTPUT_DIR,
};

/// Spend Chart - monthly expenditure charts from card ledgers
#[derive(Parser, Debug)]
#[command(name = "spend-chart")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Month column ordering
#[derive(ValueEnum, Clone, Copy, Debug)]
enum MonthOrderArg {
    /// First appearance in the ledger, reversed (chronological for newest-first ledgers)
    SourceReversed,
    /// Ascending calendar order
    Chronological,
}

impl From<MonthOrderArg> for MonthOrder {
    fn from(arg: MonthOrderArg) -> Self {
        match arg {
            MonthOrderArg::SourceReversed => MonthOrder::SourceReversed,
            MonthOrderArg::Chronological => MonthOrder::Chronological,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the stacked bar chart and print the summary
    Chart {
        /// Ledger CSV file
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Directory for the SVG and PNG files
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,

        /// File name (without extension) for the chart files
        #[arg(short, long, default_value = DEFAULT_CHART_NAME)]
        name: String,

        /// Chart title (defaults to the month range)
        #[arg(long)]
        title: Option<String>,

        /// Currency suffix
        #[arg(long, default_value = DEFAULT_CURRENCY)]
        currency: String,

        /// Chart width in pixels
        #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
        width: u32,

        /// Chart height in pixels
        #[arg(long, default_value_t = DEFAULT_CHART_HEIGHT)]
        height: u32,

        /// Month column ordering
        #[arg(long, value_enum, default_value = "source-reversed")]
        month_order: MonthOrderArg,

        /// Rename a category before analysis (OLD=NEW, repeatable)
        #[arg(long = "rename", value_name = "OLD=NEW")]
        renames: Vec<CategoryRename>,

        /// Skip the PNG export
        #[arg(long)]
        no_png: bool,
    },

    /// Print mean/median statistics without rendering
    Analyze {
        /// Ledger CSV file
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Month column ordering
        #[arg(long, value_enum, default_value = "source-reversed")]
        month_order: MonthOrderArg,

        /// Rename a category before analysis (OLD=NEW, repeatable)
        #[arg(long = "rename", value_name = "OLD=NEW")]
        renames: Vec<CategoryRename>,

        /// Currency suffix
        #[arg(long, default_value = DEFAULT_CURRENCY)]
        currency: String,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Chart {
            input,
            output_dir,
            name,
            title,
            currency,
            width,
            height,
            month_order,
            renames,
            no_png,
        } => {
            let mut chart_config = ChartConfig::new()
                .with_currency(currency)
                .with_size(width, height);

            if let Some(title_str) = title {
                chart_config = chart_config.with_title(title_str);
            }

            let args = ChartArgs {
                input,
                output_dir,
                name,
                chart_config,
                month_order: month_order.into(),
                renames,
                write_png: !no_png,
            };

            // Validate args first
            validate_args(&args)?;

            execute_chart(args)?;
        }

        Commands::Analyze {
            input,
            month_order,
            renames,
            currency,
            json,
        } => {
            execute_analyze(AnalyzeArgs {
                input,
                month_order: month_order.into(),
                renames,
                currency,
                json,
            })?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
