//! Configuration types for the tree walker

use std::path::PathBuf;

use crate::output::ChartStyle;

const DEFAULT_STATS_COUNT: usize = 10;

/// Configuration for a single scan.
///
/// Built once by the CLI and passed by shared reference; the walk never mutates it.
#[derive(Debug, Clone)]
pub struct TreeConfig {
    /// Root directory to scan
    pub path: PathBuf,
    /// Directory names excluded by exact match
    pub exclude_folders: Vec<String>,
    pub show_files: bool,
    /// File name suffixes excluded case-insensitively (e.g. ".exe")
    pub exclude_extensions: Vec<String>,
    /// File names excluded by exact match
    pub exclude_names: Vec<String>,
    /// Deepest level to descend into. None = unlimited.
    pub max_depth: Option<usize>,
    pub unicode: bool,
    pub color: bool,
    pub bg_color: bool,
    pub compact: bool,
    pub show_stats: bool,
    /// Collect every visited file so the largest-files table can be printed
    pub stat_table: bool,
    /// Top-N cutoff for the largest-files table and the chart
    pub stats_count: usize,
    pub chart: bool,
    pub chart_style: ChartStyle,
}

impl TreeConfig {
    /// Whether any statistics section was requested.
    pub fn wants_report(&self) -> bool {
        self.show_stats || self.stat_table || self.chart
    }

    /// Whether the walker has passed the depth limit.
    pub fn beyond_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth > max)
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            exclude_folders: vec!["node_modules".to_string()],
            show_files: false,
            exclude_extensions: Vec::new(),
            exclude_names: Vec::new(),
            max_depth: None,
            unicode: true,
            color: true,
            bg_color: false,
            compact: false,
            show_stats: false,
            stat_table: false,
            stats_count: DEFAULT_STATS_COUNT,
            chart: false,
            chart_style: ChartStyle::Auto,
        }
    }
}
