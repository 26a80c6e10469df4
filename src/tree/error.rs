//! Errors that end a scan

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal scan errors.
///
/// Unreadable subdirectories and entries are not errors at this level: the walker
/// reports them inline and keeps going.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Error accessing path {}: {source}", path.display())]
    RootInaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}
