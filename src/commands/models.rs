use crate::aggregator::MonthOrder;
use crate::chart::ChartConfig;
use crate::utils::config::{DEFAULT_CHART_NAME, DEFAULT_INPUT, DEFAULT_OUTPUT_DIR};
use std::path::PathBuf;
use std::str::FromStr;

/// A category rename, written `OLD=NEW` on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRename {
    pub from: String,
    pub to: String,
}

impl FromStr for CategoryRename {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = s
            .split_once('=')
            .ok_or_else(|| format!("expected OLD=NEW, got {:?}", s))?;
        let (from, to) = (from.trim(), to.trim());
        if from.is_empty() || to.is_empty() {
            return Err(format!("both sides of {:?} must be non-empty", s));
        }
        Ok(Self {
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}

/// Arguments for the chart command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ChartArgs {
    /// Ledger CSV file
    pub input: PathBuf,

    /// Directory receiving the chart files
    pub output_dir: PathBuf,

    /// File stem shared by the SVG and PNG outputs
    pub name: String,

    /// Chart rendering configuration
    pub chart_config: ChartConfig,

    pub month_order: MonthOrder,

    /// Category renames applied before analysis, in order
    pub renames: Vec<CategoryRename>,

    /// Also write a PNG next to the SVG
    pub write_png: bool,
}

impl Default for ChartArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            name: DEFAULT_CHART_NAME.to_string(),
            chart_config: ChartConfig::default(),
            month_order: MonthOrder::default(),
            renames: Vec::new(),
            write_png: true,
        }
    }
}

impl ChartArgs {
    pub fn svg_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.svg", self.name))
    }

    pub fn png_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.png", self.name))
    }
}

/// Arguments for the analyze command
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    pub input: PathBuf,
    pub month_order: MonthOrder,
    pub renames: Vec<CategoryRename>,
    /// Currency suffix for the text report
    pub currency: String,
    /// Print JSON instead of the text report
    pub json: bool,
}
