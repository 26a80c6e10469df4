//! Walker - depth-first traversal that renders as it goes

use std::borrow::Cow;
use std::fs::{self, DirEntry};
use std::io::{self, Write};
use std::path::Path;

use log::{debug, warn};
use termcolor::WriteColor;

use crate::output::TreeRenderer;
use crate::stats::Stats;

use super::config::TreeConfig;
use super::error::ScanError;
use super::filter::{file_extension, should_exclude_file, should_exclude_folder};
use super::glyphs::TreeChars;

/// Scan `config.path`: render the root line, walk the tree beneath it and return the
/// collected statistics.
///
/// Only an inaccessible root or a failing output sink ends the scan early. Unreadable
/// subdirectories and entries are reported inline and skipped.
pub fn scan<W: WriteColor>(config: &TreeConfig, out: &mut W) -> Result<Stats, ScanError> {
    let metadata = fs::metadata(&config.path).map_err(|source| ScanError::RootInaccessible {
        path: config.path.clone(),
        source,
    })?;

    let walker = Walker::new(config);
    let mut stats = Stats::new();

    walker.renderer().render_root(out, &root_name(&config.path))?;
    if metadata.is_dir() {
        walker.walk(&config.path, "", 0, out, &mut stats)?;
    }
    out.flush()?;

    Ok(stats)
}

/// Display name of the scan root: its last component, or the path as given.
pub fn root_name(path: &Path) -> Cow<'_, str> {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy())
}

/// Depth-first tree walker.
pub struct Walker<'a> {
    config: &'a TreeConfig,
    renderer: TreeRenderer,
}

impl<'a> Walker<'a> {
    pub fn new(config: &'a TreeConfig) -> Self {
        let chars = TreeChars::select(config.unicode, config.compact);
        Self {
            config,
            renderer: TreeRenderer::new(chars, config.color, config.bg_color),
        }
    }

    pub fn renderer(&self) -> &TreeRenderer {
        &self.renderer
    }

    /// Render the contents of `path` below `prefix` and record them in `stats`.
    ///
    /// Directories come first, then files, each in the order the filesystem lists
    /// them. A directory is only drawn as the last item when no files follow it.
    pub fn walk<W: WriteColor>(
        &self,
        path: &Path,
        prefix: &str,
        depth: usize,
        out: &mut W,
        stats: &mut Stats,
    ) -> io::Result<()> {
        if self.config.beyond_max_depth(depth) {
            debug!("depth limit reached at {}", path.display());
            return Ok(());
        }

        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(e) => {
                let message = format!("Error reading directory {}: {}", path.display(), e);
                return report(out, stats, &message);
            }
        };

        let mut dirs: Vec<(DirEntry, String)> = Vec::new();
        let mut files: Vec<(DirEntry, String)> = Vec::new();

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let message = format!("Error reading directory {}: {}", path.display(), e);
                    report(out, stats, &message)?;
                    continue;
                }
            };
            let name = entry.file_name().to_string_lossy().into_owned();

            // Does not follow symlinks, so linked directories are listed as files.
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(e) => {
                    let message =
                        format!("Error getting file info for {}: {}", entry.path().display(), e);
                    report(out, stats, &message)?;
                    continue;
                }
            };

            if file_type.is_dir() {
                if should_exclude_folder(&name, &self.config.exclude_folders) {
                    debug!("excluded directory {}", entry.path().display());
                    continue;
                }
                dirs.push((entry, name));
            } else if self.config.show_files {
                if should_exclude_file(
                    &name,
                    &self.config.exclude_extensions,
                    &self.config.exclude_names,
                ) {
                    debug!("excluded file {}", entry.path().display());
                    continue;
                }
                files.push((entry, name));
            }
        }

        for (i, (entry, name)) in dirs.iter().enumerate() {
            let is_last = i == dirs.len() - 1 && files.is_empty();
            let (child_prefix, _) = self.renderer.render_dir(out, name, is_last, prefix)?;
            stats.record_directory();
            self.walk(&entry.path(), &child_prefix, depth + 1, out, stats)?;
        }

        for (i, (entry, name)) in files.iter().enumerate() {
            let is_last = i == files.len() - 1;
            let entry_path = entry.path();

            let metadata = match entry.metadata() {
                Ok(metadata) => metadata,
                Err(e) => {
                    let message =
                        format!("Error getting file info for {}: {}", entry_path.display(), e);
                    report(out, stats, &message)?;
                    continue;
                }
            };

            stats.record_file(
                &entry_path,
                metadata.len(),
                file_extension(name),
                self.config.stat_table,
            );

            let is_symlink = metadata.file_type().is_symlink();
            self.renderer.render_file(out, name, is_last, prefix, is_symlink)?;
        }

        Ok(())
    }
}

/// Write a non-fatal error inline and count it.
fn report<W: WriteColor>(out: &mut W, stats: &mut Stats, message: &str) -> io::Result<()> {
    warn!("{}", message);
    stats.record_error();
    out.reset()?;
    writeln!(out, "{}", message)
}
