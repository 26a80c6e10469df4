//! Tree rendering and statistics output
//!
//! # Module Structure
//!
//! - `renderer` - Tree line renderers (colored and plain)
//! - `chart` - File size distribution charts (block, ASCII, sparkline)
//! - `report` - Text statistics report
//! - `json` - JSON statistics report
//! - `utils` - Size formatting and column alignment

mod chart;
mod json;
mod renderer;
mod report;
mod utils;

pub use chart::{BAR_WIDTH, ChartStyle, bar_width, bar_widths, spark_char};
pub use json::{JsonFileItem, JsonReport, JsonTypeItem, write_json};
pub use renderer::TreeRenderer;
pub use report::write_report;
pub use utils::{align_columns, format_percentage, format_size};
