//! Fixed project layout describing where sources and public assets live.

use std::path::{Path, PathBuf};

/// Directory under the project root holding the deployable static files.
pub const PUBLIC_DIR_NAME: &str = "public";

/// Source trees scanned for asset references, in scan order.
pub const SCAN_DIRS: [&str; 2] = ["app", "components"];

/// File extensions (without the dot) treated as scannable source files.
pub const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "css"];

/// Asset extensions recognised at the end of a referenced path.
pub const ASSET_EXTENSIONS: &[&str] = &[
  "png", "jpg", "jpeg", "svg", "webp", "gif", "mp4", "glb", "gltf", "otf", "ttf", "woff", "woff2",
  "eot",
];

/// Maximum number of findings printed per report section.
pub const REPORT_LIMIT: usize = 50;

/// Resolved locations of the project and its public-assets root.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
  /// Root of the web project being checked.
  pub project_root: PathBuf,
  /// Directory treated as the authoritative set of deployable files.
  pub public_root: PathBuf,
}

impl ProjectLayout {
  /// Build the conventional layout for a project root.
  pub fn discover(project_root: &Path) -> Self {
    Self {
      project_root: project_root.to_path_buf(),
      public_root: project_root.join(PUBLIC_DIR_NAME),
    }
  }

  /// Source directories to scan, in their fixed order. They may not exist.
  pub fn scan_roots(&self) -> Vec<PathBuf> {
    SCAN_DIRS
      .iter()
      .map(|dir| self.project_root.join(dir))
      .collect()
  }
}
