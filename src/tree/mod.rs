//! Directory tree walking
//!
//! The walker reads one directory at a time, renders each surviving entry through a
//! `TreeRenderer` and records it in `Stats`. Prefixes are threaded through the
//! recursion; no tree structure is built in memory.

mod config;
mod error;
mod filter;
mod glyphs;
mod walker;

pub use config::TreeConfig;
pub use error::ScanError;
pub use filter::{file_extension, should_exclude_file, should_exclude_folder};
pub use glyphs::TreeChars;
pub use walker::{Walker, root_name, scan};
