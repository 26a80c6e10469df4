//! Hyperion - directory tree visualizer with size statistics and charts

pub mod output;
pub mod stats;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use output::{ChartStyle, TreeRenderer, format_size, write_json, write_report};
pub use stats::{FileInfo, Stats, TypeTotal};
pub use tree::{ScanError, TreeChars, TreeConfig, Walker, scan};
