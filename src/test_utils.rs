//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The tree is removed when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Write a file of `size` bytes.
    pub fn add_sized_file(&self, path: &str, size: usize) -> PathBuf {
        self.add_file(path, &"x".repeat(size))
    }

    /// Create a directory and any missing parents.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Populate a balanced tree: `width` subdirectories per level, `depth` levels,
    /// and `files` files in every directory.
    pub fn populate(&self, width: usize, depth: usize, files: usize) {
        fn fill(dir: &Path, width: usize, depth: usize, files: usize) {
            for f in 0..files {
                let ext = ["rs", "md", "json", "txt"][f % 4];
                fs::write(dir.join(format!("file_{}.{}", f, ext)), "x".repeat(f * 16))
                    .expect("Failed to write file");
            }
            if depth == 0 {
                return;
            }
            for d in 0..width {
                let sub = dir.join(format!("dir_{}", d));
                fs::create_dir_all(&sub).expect("Failed to create dir");
                fill(&sub, width, depth - 1, files);
            }
        }
        fill(self.dir.path(), width, depth, files);
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
