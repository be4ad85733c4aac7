//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while reading the transaction ledger
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to open ledger {path}: {source}")]
    OpenFailed {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Row {row}: invalid date {value:?} (expected YYYY-MM-DD)")]
    InvalidDate { row: usize, value: String },

    #[error("Row {row}: invalid amount {value:?}")]
    InvalidAmount { row: usize, value: String },
}

/// Errors that can occur during chart generation
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Nothing to chart: matrix has {months} month(s) and {categories} categor(ies)")]
    EmptyMatrix { months: usize, categories: usize },

    #[error("Invalid chart size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Failed to rasterize chart: {0}")]
    RasterFailed(String),
}
