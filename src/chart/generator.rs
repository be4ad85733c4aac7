//! SVG stacked bar chart generation.
//!
//! Renders `ChartData` as a self-contained SVG document:
//! - One bar per column (months, then Average and Median)
//! - One stacked segment per category, positives up and negatives down from zero
//! - Centered value labels on segments tall enough to hold them
//! - Legend in category order

use super::data::{ChartColumn, ChartData};
use crate::aggregator::Analysis;
use crate::utils::config::{DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, DEFAULT_CURRENCY};
use crate::utils::error::ChartError;
use log::{debug, info};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt::Write;

const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 170.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 90.0;
const BAR_WIDTH_RATIO: f64 = 0.4;
const GRID_LINES: f64 = 5.0;
const MIN_LABEL_HEIGHT: f64 = 14.0;

/// Ten-color qualitative palette, cycled per category
const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd",
    "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
];

/// Chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Title override; derived from the month range when `None`
    pub title: Option<String>,
    pub width: u32,
    pub height: u32,
    /// Currency suffix for the axis label
    pub currency: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: None,
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Value axis range and tick spacing
#[derive(Debug, Clone, Copy, PartialEq)]
struct ValueAxis {
    min: f64,
    max: f64,
    step: f64,
}

impl ValueAxis {
    /// Axis covering `[low, high]` (zero always included) on round ticks
    fn fit(low: f64, high: f64) -> Self {
        let low = low.min(0.0);
        let mut high = high.max(0.0);
        if high - low < f64::EPSILON {
            high = low + 1.0;
        }

        let step = nice_step((high - low) / GRID_LINES);
        Self {
            min: (low / step).floor() * step,
            max: (high / step).ceil() * step,
            step,
        }
    }

    fn ticks(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.step).round() as usize;
        (0..=count).map(|i| self.min + i as f64 * self.step).collect()
    }
}

/// Smallest 1/2/5 × 10^n not below `raw`
fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let factor = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

/// Chart builder holding the data, layout and the SVG being written
///
/// Each `render_*` step appends to the document; `finish` closes it.
pub struct StackedBarChart<'a> {
    data: &'a ChartData,
    config: ChartConfig,
    axis: ValueAxis,
    plot_width: f64,
    plot_height: f64,
    svg: String,
}

impl<'a> StackedBarChart<'a> {
    /// Create a builder; fails on empty data or a size too small to plot in
    pub fn new(data: &'a ChartData, config: ChartConfig) -> Result<Self, ChartError> {
        if data.is_empty() {
            return Err(ChartError::EmptyMatrix {
                months: data.months().count(),
                categories: data.series.len(),
            });
        }

        let plot_width = config.width as f64 - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_height = config.height as f64 - MARGIN_TOP - MARGIN_BOTTOM;
        if plot_width <= 0.0 || plot_height <= 0.0 {
            return Err(ChartError::InvalidSize {
                width: config.width,
                height: config.height,
            });
        }

        let (low, high) = stack_extent(data);
        let axis = ValueAxis::fit(low, high);
        debug!("Value axis {} .. {} step {}", axis.min, axis.max, axis.step);

        Ok(Self {
            data,
            config,
            axis,
            plot_width,
            plot_height,
            svg: String::new(),
        })
    }

    fn y(&self, value: f64) -> f64 {
        MARGIN_TOP + self.plot_height * (self.axis.max - value) / (self.axis.max - self.axis.min)
    }

    fn band(&self) -> f64 {
        self.plot_width / self.data.columns.len() as f64
    }

    fn column_center(&self, index: usize) -> f64 {
        MARGIN_LEFT + self.band() * (index as f64 + 0.5)
    }

    fn title(&self) -> String {
        if let Some(title) = &self.config.title {
            return title.clone();
        }
        let first = self.data.months().next();
        let last = self.data.months().last();
        match (first, last) {
            (Some(first), Some(last)) => format!(
                "Categorized monthly expenses from {} to {}",
                ChartColumn::Month(*first).label(),
                ChartColumn::Month(*last).label()
            ),
            _ => "Categorized monthly expenses".to_string(),
        }
    }

    fn render_header(&mut self) {
        let (w, h) = (self.config.width, self.config.height);
        let _ = write!(
            self.svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#
        );
        let _ = write!(self.svg, r#"<rect width="{w}" height="{h}" fill="white"/>"#);
        let title = escape_xml(&self.title());
        let _ = write!(
            self.svg,
            r#"<text x="{:.1}" y="30" font-size="16" text-anchor="middle" font-weight="bold">{}</text>"#,
            MARGIN_LEFT + self.plot_width / 2.0,
            title
        );
    }

    fn render_value_axis(&mut self) {
        let right = MARGIN_LEFT + self.plot_width;
        for tick in self.axis.ticks() {
            let y = self.y(tick);
            let _ = write!(
                self.svg,
                r##"<line x1="{MARGIN_LEFT}" y1="{y:.1}" x2="{right:.1}" y2="{y:.1}" stroke="#dddddd" stroke-width="1"/>"##
            );
            let _ = write!(
                self.svg,
                r#"<text x="{:.1}" y="{:.1}" font-size="11" text-anchor="end">{}</text>"#,
                MARGIN_LEFT - 6.0,
                y + 4.0,
                format_tick(tick)
            );
        }

        let zero = self.y(0.0);
        let _ = write!(
            self.svg,
            r#"<line x1="{MARGIN_LEFT}" y1="{zero:.1}" x2="{right:.1}" y2="{zero:.1}" stroke="black" stroke-width="1"/>"#
        );

        let mid = MARGIN_TOP + self.plot_height / 2.0;
        let _ = write!(
            self.svg,
            r#"<text x="20" y="{mid:.1}" font-size="13" text-anchor="middle" transform="rotate(-90 20 {mid:.1})">Expenses in {}</text>"#,
            escape_xml(&self.config.currency)
        );
    }

    fn render_columns(&mut self) {
        let bottom = MARGIN_TOP + self.plot_height;
        let labels: Vec<(usize, String, bool)> = self
            .data
            .columns
            .iter()
            .enumerate()
            .map(|(i, c)| (i, c.label(), c.is_summary()))
            .collect();

        for (index, label, summary) in labels {
            let x = self.column_center(index);
            let y = bottom + 14.0;
            let _ = write!(
                self.svg,
                r#"<text x="{x:.1}" y="{y:.1}" font-size="11" text-anchor="end" transform="rotate(-45 {x:.1} {y:.1})">{}</text>"#,
                escape_xml(&label)
            );

            // Divider between the last month and the summary columns
            if summary && index > 0 && !self.data.columns[index - 1].is_summary() {
                let divider = MARGIN_LEFT + self.band() * index as f64;
                let _ = write!(
                    self.svg,
                    r##"<line x1="{divider:.1}" y1="{MARGIN_TOP}" x2="{divider:.1}" y2="{bottom:.1}" stroke="#999999" stroke-dasharray="4 3"/>"##
                );
            }
        }

        let _ = write!(
            self.svg,
            r#"<text x="{:.1}" y="{:.1}" font-size="13" text-anchor="middle">Month</text>"#,
            MARGIN_LEFT + self.plot_width / 2.0,
            self.config.height as f64 - 12.0
        );
    }

    fn render_bars(&mut self) {
        let data = self.data;
        let columns = data.columns.len();
        let bar_width = self.band() * BAR_WIDTH_RATIO;
        let mut positive = vec![0f64; columns];
        let mut negative = vec![0f64; columns];

        for (series_index, series) in data.series.iter().enumerate() {
            let color = PALETTE[series_index % PALETTE.len()];

            for (column, value) in series.values.iter().enumerate().take(columns) {
                let amount = to_f64(*value);
                if amount == 0.0 {
                    continue;
                }

                let base = if amount > 0.0 {
                    &mut positive[column]
                } else {
                    &mut negative[column]
                };
                let start = *base;
                *base += amount;
                let end = *base;

                let top = self.y(start.max(end));
                let height = (self.y(start.min(end)) - top).abs();
                let x = self.column_center(column) - bar_width / 2.0;

                let _ = write!(
                    self.svg,
                    r#"<rect x="{x:.2}" y="{top:.2}" width="{bar_width:.2}" height="{height:.2}" fill="{color}"><title>{}: {:.2}</title></rect>"#,
                    escape_xml(&series.category),
                    value
                );

                if height >= MIN_LABEL_HEIGHT {
                    let _ = write!(
                        self.svg,
                        r#"<text x="{:.2}" y="{:.2}" font-size="10" text-anchor="middle" dominant-baseline="central">{:.2}</text>"#,
                        x + bar_width / 2.0,
                        top + height / 2.0,
                        value
                    );
                }
            }
        }
    }

    fn render_legend(&mut self) {
        let data = self.data;
        let x = MARGIN_LEFT + self.plot_width + 20.0;
        for (index, series) in data.series.iter().enumerate() {
            let y = MARGIN_TOP + index as f64 * 20.0;
            let color = PALETTE[index % PALETTE.len()];
            let _ = write!(
                self.svg,
                r#"<rect x="{x:.1}" y="{y:.1}" width="14" height="14" fill="{color}" rx="2"/>"#
            );
            let _ = write!(
                self.svg,
                r#"<text x="{:.1}" y="{:.1}" font-size="12">{}</text>"#,
                x + 20.0,
                y + 11.0,
                escape_xml(&series.category)
            );
        }
    }

    /// Render every part and return the finished SVG document
    pub fn finish(mut self) -> String {
        self.render_header();
        self.render_value_axis();
        self.render_columns();
        self.render_bars();
        self.render_legend();
        self.svg.push_str("</svg>");
        self.svg
    }
}

/// Lowest negative stack and highest positive stack over all columns
fn stack_extent(data: &ChartData) -> (f64, f64) {
    let mut low = 0f64;
    let mut high = 0f64;

    for column in 0..data.columns.len() {
        let (mut pos, mut neg) = (0f64, 0f64);
        for series in &data.series {
            let amount = series.values.get(column).copied().map(to_f64).unwrap_or(0.0);
            if amount > 0.0 {
                pos += amount;
            } else {
                neg += amount;
            }
        }
        high = high.max(pos);
        low = low.min(neg);
    }

    (low, high)
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

fn format_tick(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Escape text for use in SVG content and attributes
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Generate an SVG stacked bar chart
///
/// **Public** - main entry point for chart rendering
///
/// # Errors
/// * `ChartError::EmptyMatrix` - no months or no categories
/// * `ChartError::InvalidSize` - size leaves no room for the plot area
pub fn generate_chart(data: &ChartData, config: Option<&ChartConfig>) -> Result<String, ChartError> {
    let config = config.cloned().unwrap_or_default();

    info!(
        "Generating chart with {} columns and {} categories",
        data.columns.len(),
        data.series.len()
    );

    let svg = StackedBarChart::new(data, config)?.finish();

    info!("Chart generated successfully ({} bytes)", svg.len());
    Ok(svg)
}

/// The two report lines for overall mean and median spend
pub fn generate_text_summary(analysis: &Analysis, currency: &str) -> String {
    format!(
        "Average expenses amount to {:.2}{}\nMedian expenses amount to {:.2}{}",
        analysis.avg_expense, currency, analysis.median_expense, currency
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_step() {
        assert_eq!(nice_step(3.0), 5.0);
        assert_eq!(nice_step(18.0), 20.0);
        assert_eq!(nice_step(0.7), 1.0);
        assert_eq!(nice_step(100.0), 100.0);
    }

    #[test]
    fn test_value_axis_includes_zero() {
        let axis = ValueAxis::fit(5.0, 42.0);
        assert_eq!(axis.min, 0.0);
        assert_eq!(axis.max, 50.0);
        assert_eq!(axis.step, 10.0);
        assert_eq!(axis.ticks().len(), 6);
    }

    #[test]
    fn test_value_axis_negative() {
        let axis = ValueAxis::fit(-12.0, 30.0);
        assert!(axis.min <= -12.0);
        assert!(axis.max >= 30.0);
        assert!(axis.ticks().contains(&0.0));
    }

    #[test]
    fn test_value_axis_all_zero() {
        let axis = ValueAxis::fit(0.0, 0.0);
        assert!(axis.max > axis.min);
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("Food & <Drinks>"), "Food &amp; &lt;Drinks&gt;");
        assert_eq!(escape_xml("\"q\" 'a'"), "&quot;q&quot; &apos;a&apos;");
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(20.0), "20");
        assert_eq!(format_tick(0.5), "0.50");
    }
}
