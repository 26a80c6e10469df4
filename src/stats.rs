//! Scan statistics
//!
//! `Stats` is the accumulator the walker mutates while it visits entries. Once the
//! walk returns it is read-only, and the report and chart layers only consume the
//! sorted projections defined here.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Label shown for files without an extension.
pub const NO_EXTENSION_LABEL: &str = "(no extension)";

/// A visited file kept for the largest-files report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Full traversal path. Made relative to the root only at report time.
    pub path: PathBuf,
    pub size: u64,
    /// Lowercased extension with leading dot, "" when none
    pub extension: String,
}

impl FileInfo {
    /// Path relative to the scan root, falling back to the full path.
    pub fn relative_path(&self, root: &Path) -> PathBuf {
        self.path
            .strip_prefix(root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| self.path.clone())
    }
}

/// Cumulative size of one extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTotal {
    pub extension: String,
    pub size: u64,
}

impl TypeTotal {
    /// Display label for the extension column.
    pub fn label(&self) -> &str {
        if self.extension.is_empty() {
            NO_EXTENSION_LABEL
        } else {
            &self.extension
        }
    }
}

/// Counts and sizes collected during a walk.
#[derive(Debug, Clone, Default)]
pub struct Stats {
    pub total_dirs: usize,
    pub total_files: usize,
    pub total_size: u64,
    /// Extension -> cumulative bytes
    pub file_types: HashMap<String, u64>,
    /// Every visited file, in visit order. Only populated in table mode.
    pub large_files: Vec<FileInfo>,
    /// Directories or entries that could not be read
    pub errors: usize,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visited directory.
    pub fn record_directory(&mut self) {
        self.total_dirs += 1;
    }

    /// Record a visited file. `keep` retains the file for the largest-files table.
    pub fn record_file(&mut self, path: &Path, size: u64, extension: String, keep: bool) {
        self.total_files += 1;
        self.total_size += size;
        *self.file_types.entry(extension.clone()).or_insert(0) += size;

        if keep {
            self.large_files.push(FileInfo {
                path: path.to_path_buf(),
                size,
                extension,
            });
        }
    }

    /// Record a directory or entry that was reported and skipped.
    pub fn record_error(&mut self) {
        self.errors += 1;
    }

    /// Share of the total size as a percentage. 0 when nothing was counted.
    pub fn percentage(&self, size: u64) -> f64 {
        if self.total_size == 0 {
            0.0
        } else {
            size as f64 / self.total_size as f64 * 100.0
        }
    }

    /// Per-extension totals, largest first. Ties are ordered by extension.
    pub fn type_totals(&self) -> Vec<TypeTotal> {
        let mut totals: Vec<TypeTotal> = self
            .file_types
            .iter()
            .map(|(ext, &size)| TypeTotal {
                extension: ext.clone(),
                size,
            })
            .collect();
        totals.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.extension.cmp(&b.extension)));
        totals
    }

    /// The `count` largest per-extension totals.
    pub fn top_types(&self, count: usize) -> Vec<TypeTotal> {
        let mut totals = self.type_totals();
        totals.truncate(count);
        totals
    }

    /// The `count` largest files, largest first. Equal sizes keep visit order.
    pub fn largest_files(&self, count: usize) -> Vec<&FileInfo> {
        let mut files: Vec<&FileInfo> = self.large_files.iter().collect();
        files.sort_by(|a, b| b.size.cmp(&a.size));
        files.truncate(count);
        files
    }
}
