//! Check orchestrator: extract every reference, then resolve and bucket each one.

use tracing::{debug, info};

use crate::error::CheckError;
use crate::layout::ProjectLayout;
use crate::models::Reference;
use crate::references::ReferenceScanner;
use crate::report::Report;
use crate::resolver::resolve_case_exact;

/// Runs the asset check for a single project.
pub struct AssetChecker {
  layout: ProjectLayout,
}

impl AssetChecker {
  /// Create a checker for the provided layout.
  pub fn new(layout: ProjectLayout) -> Self {
    Self { layout }
  }

  /// Scan the project and resolve every reference found.
  ///
  /// Fails before scanning when the public-assets root is absent. Extraction completes before
  /// any resolution starts, and the whole tree is scanned even once findings exist.
  pub fn run(&self) -> Result<Report, CheckError> {
    let public_root = &self.layout.public_root;
    if !public_root.exists() {
      return Err(CheckError::MissingPublicRoot {
        path: public_root.clone(),
      });
    }

    let references = ReferenceScanner::new(&self.layout).collect::<Result<Vec<Reference>, _>>()?;
    debug!(count = references.len(), "extracted asset references");

    let mut report = Report::default();
    for reference in references {
      let resolution = resolve_case_exact(public_root, &reference.referenced_path)?;
      report.record(reference, resolution);
    }

    info!(
      missing = report.missing.len(),
      case_mismatches = report.case_mismatches.len(),
      "asset check finished"
    );

    Ok(report)
  }
}
