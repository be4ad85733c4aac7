//! Chart input: the volume matrix plus the two summary columns.
//!
//! Built as a fresh value from the matrix and the analysis; neither input is
//! modified.

use crate::aggregator::{Analysis, MonthKey, VolumeMatrix};
use crate::utils::config::{AVERAGE_KEY, AVERAGE_LABEL, MEDIAN_KEY, MEDIAN_LABEL};
use rust_decimal::Decimal;

/// One x-axis column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartColumn {
    Month(MonthKey),
    Average,
    Median,
}

impl ChartColumn {
    /// Column key: `YYYY-MM`, `average` or `median`
    pub fn key(&self) -> String {
        match self {
            ChartColumn::Month(month) => month.to_string(),
            ChartColumn::Average => AVERAGE_KEY.to_string(),
            ChartColumn::Median => MEDIAN_KEY.to_string(),
        }
    }

    /// Axis label: `MM.YY` for months
    pub fn label(&self) -> String {
        match self {
            ChartColumn::Month(month) => format_month_label(month),
            ChartColumn::Average => AVERAGE_LABEL.to_string(),
            ChartColumn::Median => MEDIAN_LABEL.to_string(),
        }
    }

    pub fn is_summary(&self) -> bool {
        !matches!(self, ChartColumn::Month(_))
    }
}

/// Format a month as `MM.YY` (e.g. `2024-03` -> `03.24`)
pub fn format_month_label(month: &MonthKey) -> String {
    format!("{:02}.{:02}", month.month, month.year.rem_euclid(100))
}

/// One stacked series
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub category: String,
    pub values: Vec<Decimal>,
}

/// Columns and series ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub columns: Vec<ChartColumn>,
    pub series: Vec<ChartSeries>,
}

impl ChartData {
    /// Append the average and median columns to a copy of the matrix
    ///
    /// **Public** - the only way chart data is built
    ///
    /// Every series ends with the category's mean then median. A category
    /// missing from the analysis gets zeros.
    pub fn assemble(matrix: &VolumeMatrix, analysis: &Analysis) -> Self {
        let mut columns: Vec<ChartColumn> =
            matrix.months().iter().copied().map(ChartColumn::Month).collect();
        columns.push(ChartColumn::Average);
        columns.push(ChartColumn::Median);

        let series = matrix
            .rows()
            .iter()
            .map(|row| {
                let mut values = row.volumes.clone();
                values.push(analysis.avg_for(&row.category).unwrap_or_default());
                values.push(analysis.median_for(&row.category).unwrap_or_default());
                ChartSeries {
                    category: row.category.clone(),
                    values,
                }
            })
            .collect();

        Self { columns, series }
    }

    /// Month columns only
    pub fn months(&self) -> impl Iterator<Item = &MonthKey> {
        self.columns.iter().filter_map(|c| match c {
            ChartColumn::Month(m) => Some(m),
            _ => None,
        })
    }

    pub fn column_keys(&self) -> Vec<String> {
        self.columns.iter().map(ChartColumn::key).collect()
    }

    /// True when there is no month or no category to draw
    pub fn is_empty(&self) -> bool {
        self.series.is_empty() || self.months().next().is_none()
    }
}
