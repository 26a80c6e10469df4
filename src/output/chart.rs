//! File size distribution charts

use clap::ValueEnum;

use crate::stats::{Stats, TypeTotal};

use super::utils::format_size;

/// Width of the bar field in columns.
pub const BAR_WIDTH: usize = 50;

/// Sparkline glyphs from lowest to highest, in eighths.
const SPARK_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Chart style, resolved once per run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ChartStyle {
    /// Block bars with Unicode, `#` bars without
    #[default]
    Auto,
    /// Unicode block bars
    Block,
    /// ASCII `#` bars
    Ascii,
    /// One height glyph per extension
    Sparkline,
}

impl ChartStyle {
    /// Resolve `Auto` against the Unicode setting.
    pub fn resolve(self, unicode: bool) -> Self {
        match self {
            Self::Auto if unicode => Self::Block,
            Self::Auto => Self::Ascii,
            other => other,
        }
    }

    fn header(self) -> &'static str {
        match self {
            Self::Auto | Self::Block => "📊 File Size Distribution Chart:",
            Self::Ascii => "# File Size Distribution Chart:",
            Self::Sparkline => "⚡ File Size Distribution Sparklines:",
        }
    }

    /// Render the top `count` extensions of `stats`, starting with a blank line.
    pub fn render(self, stats: &Stats, count: usize) -> String {
        let entries = stats.top_types(count);
        let max_size = entries.iter().map(|t| t.size).max().unwrap_or(0);

        let mut out = String::new();
        out.push('\n');
        out.push_str(self.header());
        out.push('\n');

        for entry in &entries {
            let ratio = scale(entry.size, max_size);
            let percentage = stats.percentage(entry.size);
            let row = match self {
                Self::Sparkline => format!(
                    "  {:<15} {} {:>6.1}% ({})\n",
                    entry.label(),
                    spark_char(ratio),
                    percentage,
                    format_size(entry.size)
                ),
                Self::Auto | Self::Block | Self::Ascii => format!(
                    "  {:<15} [{:<width$}] {:>6.1}% ({})\n",
                    entry.label(),
                    self.bar(ratio),
                    percentage,
                    format_size(entry.size),
                    width = BAR_WIDTH
                ),
            };
            out.push_str(&row);
        }

        out
    }

    fn bar(self, ratio: f64) -> String {
        let glyph = if self == Self::Ascii { "#" } else { "█" };
        glyph.repeat(bar_width(ratio))
    }
}

/// Size as a fraction of the largest entry; 0 when every entry is empty.
fn scale(size: u64, max_size: u64) -> f64 {
    if max_size == 0 {
        0.0
    } else {
        size as f64 / max_size as f64
    }
}

/// Bar length for a ratio, rounded and never shorter than one column.
pub fn bar_width(ratio: f64) -> usize {
    ((ratio * BAR_WIDTH as f64).round() as usize).clamp(1, BAR_WIDTH)
}

/// Sparkline glyph for a ratio, truncated onto eight levels.
pub fn spark_char(ratio: f64) -> char {
    let top = SPARK_CHARS.len() - 1;
    let level = (ratio * top as f64) as usize;
    SPARK_CHARS[level.min(top)]
}

/// Bar widths for the top `count` extensions, largest first.
pub fn bar_widths(stats: &Stats, count: usize) -> Vec<(TypeTotal, usize)> {
    let entries = stats.top_types(count);
    let max_size = entries.iter().map(|t| t.size).max().unwrap_or(0);
    entries
        .into_iter()
        .map(|entry| {
            let width = bar_width(scale(entry.size, max_size));
            (entry, width)
        })
        .collect()
}
