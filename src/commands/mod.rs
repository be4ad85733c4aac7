//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod analyze;
pub mod chart;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use analyze::{execute_analyze, AnalysisReport};
pub use chart::{execute_chart, validate_args};
pub use models::{AnalyzeArgs, CategoryRename, ChartArgs};
pub use utils::{apply_renames, display_version, load_and_analyze};
