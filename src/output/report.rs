//! Text statistics report printed after the tree

use std::io::{self, Write};

use termcolor::{ColorSpec, WriteColor};

use crate::stats::Stats;
use crate::tree::TreeConfig;

use super::utils::{align_columns, format_percentage, format_size};

/// Write the statistics sections requested by `config`.
pub fn write_report<W: WriteColor>(
    out: &mut W,
    config: &TreeConfig,
    stats: &Stats,
) -> io::Result<()> {
    let mut bold = ColorSpec::new();
    bold.set_bold(true);

    writeln!(out)?;
    out.set_color(&bold)?;
    writeln!(out, "📊 Statistics:")?;
    out.reset()?;
    writeln!(out, "  - Total Directories: {}", stats.total_dirs)?;
    writeln!(out, "  - Total Files: {}", stats.total_files)?;
    writeln!(out, "  - Total Size: {}", format_size(stats.total_size))?;
    if stats.errors > 0 {
        writeln!(out, "  - Unreadable Entries: {}", stats.errors)?;
    }

    if config.stat_table && !stats.large_files.is_empty() {
        writeln!(out)?;
        out.set_color(&bold)?;
        writeln!(out, "📈 Largest Files:")?;
        out.reset()?;
        for line in largest_files_table(config, stats) {
            writeln!(out, "{}", line)?;
        }
    }

    if !stats.file_types.is_empty() {
        writeln!(out)?;
        out.set_color(&bold)?;
        writeln!(out, "🗂️ File Type Distribution:")?;
        out.reset()?;
        for line in file_types_table(stats) {
            writeln!(out, "{}", line)?;
        }
    }

    if config.chart && !stats.file_types.is_empty() {
        let style = config.chart_style.resolve(config.unicode);
        write!(out, "{}", style.render(stats, config.stats_count))?;
    }

    Ok(())
}

/// Rows of the largest-files table, header included.
fn largest_files_table(config: &TreeConfig, stats: &Stats) -> Vec<String> {
    let columns = ["Size", "Path", "Type"];
    let mut rows = vec![header(&columns), underline(&columns)];
    for file in stats.largest_files(config.stats_count) {
        rows.push(vec![
            format_size(file.size),
            file.relative_path(&config.path).display().to_string(),
            file.extension.clone(),
        ]);
    }
    align_columns(&rows, "  ")
}

/// Rows of the file type table, header included.
fn file_types_table(stats: &Stats) -> Vec<String> {
    let columns = ["Type", "Size", "Percentage"];
    let mut rows = vec![header(&columns), underline(&columns)];
    for total in stats.type_totals() {
        rows.push(vec![
            total.label().to_string(),
            format_size(total.size),
            format_percentage(stats.percentage(total.size)),
        ]);
    }
    align_columns(&rows, "  ")
}

fn header(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|c| c.to_string()).collect()
}

fn underline(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|c| "-".repeat(c.len())).collect()
}
