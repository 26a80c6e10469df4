//! JSON statistics report

use std::io::{self, Write};

use serde::Serialize;

use crate::stats::Stats;
use crate::tree::TreeConfig;

use super::utils::format_size;

#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub total_dirs: usize,
    pub total_files: usize,
    pub total_size: u64,
    pub total_size_human: String,
    pub errors: usize,
    pub file_types: Vec<JsonTypeItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub largest_files: Option<Vec<JsonFileItem>>,
}

#[derive(Debug, Serialize)]
pub struct JsonTypeItem {
    pub extension: String,
    pub size: u64,
    pub percentage: f64,
}

#[derive(Debug, Serialize)]
pub struct JsonFileItem {
    /// Relative to the scan root
    pub path: String,
    pub size: u64,
    pub extension: String,
}

impl JsonReport {
    pub fn new(config: &TreeConfig, stats: &Stats) -> Self {
        let file_types = stats
            .type_totals()
            .into_iter()
            .map(|total| JsonTypeItem {
                percentage: stats.percentage(total.size),
                extension: total.extension,
                size: total.size,
            })
            .collect();

        let largest_files = config.stat_table.then(|| {
            stats
                .largest_files(config.stats_count)
                .into_iter()
                .map(|file| JsonFileItem {
                    path: file.relative_path(&config.path).display().to_string(),
                    size: file.size,
                    extension: file.extension.clone(),
                })
                .collect()
        });

        Self {
            total_dirs: stats.total_dirs,
            total_files: stats.total_files,
            total_size: stats.total_size,
            total_size_human: format_size(stats.total_size),
            errors: stats.errors,
            file_types,
            largest_files,
        }
    }
}

/// Write the statistics as pretty-printed JSON.
pub fn write_json<W: Write>(out: &mut W, config: &TreeConfig, stats: &Stats) -> io::Result<()> {
    let report = JsonReport::new(config, stats);
    let json = serde_json::to_string_pretty(&report).map_err(io::Error::other)?;
    writeln!(out, "{}", json)
}
