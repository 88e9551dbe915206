//! Errors raised while scanning sources or resolving asset paths.

use std::io;
use std::path::PathBuf;

/// Failures that abort a check run.
///
/// Missing assets and case mismatches are findings, not errors; they are collected in a
/// [`crate::Report`] instead.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
  /// The public-assets root does not exist, so nothing can be resolved.
  #[error("missing public/ directory")]
  MissingPublicRoot {
    /// Expected location of the public-assets root.
    path: PathBuf,
  },
  /// A source file could not be read.
  #[error("failed to read {}", path.display())]
  Read {
    /// File that failed to read.
    path: PathBuf,
    /// Underlying I/O error.
    source: io::Error,
  },
  /// Walking one of the scanned source trees failed.
  #[error("failed to walk source tree")]
  Walk(#[from] walkdir::Error),
  /// Listing a directory under the public-assets root failed.
  #[error("failed to list {}", path.display())]
  ListDir {
    /// Directory that failed to list.
    path: PathBuf,
    /// Underlying I/O error.
    source: io::Error,
  },
}
