//! Stacked bar chart rendering.
//!
//! This module converts the volume matrix and its summary statistics into
//! an SVG chart: months along the x-axis, one stacked series per category,
//! and the Average/Median summary columns at the end.

pub mod data;
pub mod generator;

// Re-export main types
pub use data::{format_month_label, ChartColumn, ChartData, ChartSeries};
pub use generator::{
    escape_xml,
    generate_chart,
    generate_text_summary,
    ChartConfig,
    StackedBarChart,
};
