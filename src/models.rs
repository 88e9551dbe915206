//! Data structures produced while checking asset references.

use std::fmt;
use std::path::PathBuf;

/// A quoted asset path found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
  /// Source file containing the literal.
  pub source_file: PathBuf,
  /// Referenced path exactly as written, always starting with `/`.
  pub referenced_path: String,
  /// 1-based line of the literal's opening quote.
  pub line_number: usize,
}

impl fmt::Display for Reference {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}:{} -> {}",
      self.source_file.display(),
      self.line_number,
      self.referenced_path
    )
  }
}

/// Outcome of resolving a referenced path against the public-assets root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
  /// Every segment exists with identical case.
  ExactMatch,
  /// The path exists only case-insensitively; holds the on-disk spelling.
  CaseMismatch(String),
  /// Some segment has no match in any case.
  Missing,
}

/// A reference whose path only resolves case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseMismatch {
  /// Offending reference.
  pub reference: Reference,
  /// Path rebuilt from the real on-disk names.
  pub corrected: String,
}

impl fmt::Display for CaseMismatch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} (should be {})", self.reference, self.corrected)
  }
}
