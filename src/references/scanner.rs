use std::collections::VecDeque;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::WalkDir;

use super::pattern::extract_references;
use crate::error::CheckError;
use crate::layout::{ProjectLayout, SOURCE_EXTENSIONS};
use crate::models::Reference;

/// Returns `true` when the file extension is on the source allow-list.
pub fn is_source_file(path: &Path) -> bool {
  path
    .extension()
    .and_then(OsStr::to_str)
    .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// Decode source bytes as UTF-8, replacing invalid sequences rather than failing.
pub fn decode_source(path: &Path, bytes: Vec<u8>) -> String {
  match String::from_utf8(bytes) {
    Ok(text) => text,
    Err(err) => {
      debug!(path = %path.display(), "source is not valid UTF-8, decoding lossily");
      String::from_utf8_lossy(err.as_bytes()).into_owned()
    }
  }
}

/// Lazy iterator over every asset reference under the project's scan roots.
///
/// Roots are visited in their fixed order and missing roots are skipped. Files within a root
/// come in directory traversal order, which is platform dependent. Read failures are yielded
/// as errors; the scanner does not try to recover from them.
pub struct ReferenceScanner {
  roots: std::vec::IntoIter<PathBuf>,
  walker: Option<walkdir::IntoIter>,
  pending: VecDeque<Reference>,
}

impl ReferenceScanner {
  /// Create a scanner over the source trees of `layout`.
  pub fn new(layout: &ProjectLayout) -> Self {
    Self {
      roots: layout.scan_roots().into_iter(),
      walker: None,
      pending: VecDeque::new(),
    }
  }

  fn next_source_file(&mut self) -> Option<Result<PathBuf, CheckError>> {
    loop {
      if self.walker.is_none() {
        let root = self.roots.next()?;
        if !root.is_dir() {
          debug!(root = %root.display(), "skipping missing source directory");
          continue;
        }
        self.walker = Some(WalkDir::new(root).into_iter());
      }

      let Some(walker) = self.walker.as_mut() else {
        continue;
      };

      match walker.next() {
        Some(Ok(entry)) => {
          // Symlinked files count as files; linked directories are not descended.
          if entry.path().is_file() && is_source_file(entry.path()) {
            return Some(Ok(entry.into_path()));
          }
        }
        Some(Err(err)) => return Some(Err(CheckError::Walk(err))),
        None => self.walker = None,
      }
    }
  }
}

impl Iterator for ReferenceScanner {
  type Item = Result<Reference, CheckError>;

  fn next(&mut self) -> Option<Self::Item> {
    loop {
      if let Some(reference) = self.pending.pop_front() {
        return Some(Ok(reference));
      }

      let path = match self.next_source_file()? {
        Ok(path) => path,
        Err(err) => return Some(Err(err)),
      };

      let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(source) => return Some(Err(CheckError::Read { path, source })),
      };

      let text = decode_source(&path, bytes);
      let references = extract_references(&path, &text);
      trace!(path = %path.display(), count = references.len(), "scanned source file");
      self.pending.extend(references);
    }
  }
}
