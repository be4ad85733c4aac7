//! Spend Chart
//!
//! Monthly, category-stacked expenditure charts with mean and median
//! summaries, built from card transaction ledgers.
//!
//! The pipeline runs strictly forward:
//! ledger CSV → months + categories → volume matrix → statistics →
//! chart data with summary columns → SVG/PNG.
//!
//! ## Getting Started
//!
//! ```bash
//! spend-chart chart --input ./input-data/example-input.csv
//! spend-chart --help
//! ```

pub mod aggregator;
pub mod chart;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
