//! Case-exact resolution of referenced paths against the public-assets root.
//!
//! The walk lists one directory per path segment and never caches listings, so every answer
//! reflects the filesystem at the time of the call. Exact names win; otherwise the first
//! case-insensitive match in listing order is taken. When several siblings differ only by case
//! the chosen correction therefore depends on the platform's listing order.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::CheckError;
use crate::models::Resolution;

/// Drop a trailing `?query` or `#fragment` from a referenced path.
pub fn strip_query_and_fragment(path: &str) -> &str {
  path.split(['?', '#']).next().unwrap_or(path)
}

/// Split a referenced path into its non-empty segments.
pub fn path_segments(path: &str) -> Vec<&str> {
  strip_query_and_fragment(path)
    .split('/')
    .filter(|segment| !segment.is_empty())
    .collect()
}

/// Resolve `referenced_path` under `public_root`, segment by segment.
pub fn resolve_case_exact(
  public_root: &Path,
  referenced_path: &str,
) -> Result<Resolution, CheckError> {
  let requested = strip_query_and_fragment(referenced_path);
  let mut cursor = public_root.to_path_buf();
  let mut corrected = Vec::new();

  for segment in path_segments(requested) {
    if !cursor.is_dir() {
      return Ok(Resolution::Missing);
    }

    let Some(name) = match_entry(&cursor, segment)? else {
      return Ok(Resolution::Missing);
    };

    cursor.push(&name);
    corrected.push(name);
  }

  if !cursor.exists() {
    return Ok(Resolution::Missing);
  }

  let corrected = format!("/{}", corrected.join("/"));
  if corrected == requested {
    Ok(Resolution::ExactMatch)
  } else {
    Ok(Resolution::CaseMismatch(corrected))
  }
}

fn match_entry(dir: &Path, segment: &str) -> Result<Option<String>, CheckError> {
  let list_error = |source: io::Error| CheckError::ListDir {
    path: dir.to_path_buf(),
    source,
  };

  let mut names = Vec::new();
  for entry in fs::read_dir(dir).map_err(list_error)? {
    let entry = entry.map_err(list_error)?;
    // Non UTF-8 names can never equal a segment taken from source text.
    if let Ok(name) = entry.file_name().into_string() {
      names.push(name);
    }
  }

  if names.iter().any(|name| name == segment) {
    return Ok(Some(segment.to_string()));
  }

  let wanted = segment.to_lowercase();
  Ok(names.into_iter().find(|name| name.to_lowercase() == wanted))
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::{TempDir, tempdir};

  fn public_root() -> std::io::Result<TempDir> {
    let dir = tempdir()?;
    fs::create_dir_all(dir.path().join("images/team"))?;
    fs::create_dir_all(dir.path().join("icons"))?;
    fs::write(dir.path().join("images/logo.png"), b"png")?;
    fs::write(dir.path().join("images/team/Alice.JPG"), b"jpg")?;
    fs::write(dir.path().join("icons/star.svg"), b"svg")?;
    Ok(dir)
  }

  #[test]
  fn strips_query_and_fragment() {
    assert_eq!(strip_query_and_fragment("/a.png?v=2"), "/a.png");
    assert_eq!(strip_query_and_fragment("/a.svg#icon"), "/a.svg");
    assert_eq!(strip_query_and_fragment("/a.svg#x?y"), "/a.svg");
    assert_eq!(strip_query_and_fragment("/a.png"), "/a.png");
  }

  #[test]
  fn drops_empty_segments() {
    assert_eq!(path_segments("//images///logo.png/"), vec!["images", "logo.png"]);
    assert!(path_segments("/").is_empty());
  }

  #[test]
  fn exact_case_paths_match() -> std::io::Result<()> {
    let root = public_root()?;
    let resolution = resolve_case_exact(root.path(), "/icons/star.svg").unwrap();
    assert_eq!(resolution, Resolution::ExactMatch);
    Ok(())
  }

  #[test]
  fn reports_on_disk_spelling_for_case_drift() -> std::io::Result<()> {
    let root = public_root()?;
    assert_eq!(
      resolve_case_exact(root.path(), "/Images/Logo.PNG").unwrap(),
      Resolution::CaseMismatch("/images/logo.png".into())
    );
    assert_eq!(
      resolve_case_exact(root.path(), "/images/team/alice.jpg").unwrap(),
      Resolution::CaseMismatch("/images/team/Alice.JPG".into())
    );
    Ok(())
  }

  #[test]
  fn unmatched_segments_are_missing() -> std::io::Result<()> {
    let root = public_root()?;
    assert_eq!(
      resolve_case_exact(root.path(), "/fonts/Brand.woff2").unwrap(),
      Resolution::Missing
    );
    assert_eq!(
      resolve_case_exact(root.path(), "/images/banner.png").unwrap(),
      Resolution::Missing
    );
    Ok(())
  }

  #[test]
  fn cannot_descend_through_files() -> std::io::Result<()> {
    let root = public_root()?;
    assert_eq!(
      resolve_case_exact(root.path(), "/images/logo.png/extra.png").unwrap(),
      Resolution::Missing
    );
    Ok(())
  }

  #[test]
  fn query_and_fragment_do_not_affect_classification() -> std::io::Result<()> {
    let root = public_root()?;
    assert_eq!(
      resolve_case_exact(root.path(), "/icons/star.svg#section").unwrap(),
      Resolution::ExactMatch
    );
    assert_eq!(
      resolve_case_exact(root.path(), "/images/logo.png?v=2").unwrap(),
      Resolution::ExactMatch
    );
    assert_eq!(
      resolve_case_exact(root.path(), "/IMAGES/logo.png?v=2").unwrap(),
      Resolution::CaseMismatch("/images/logo.png".into())
    );
    Ok(())
  }

  #[test]
  fn bare_root_resolves_to_itself() -> std::io::Result<()> {
    let root = public_root()?;
    assert_eq!(
      resolve_case_exact(root.path(), "/").unwrap(),
      Resolution::ExactMatch
    );
    Ok(())
  }

  #[test]
  fn repeated_slashes_count_as_mismatch() -> std::io::Result<()> {
    let root = public_root()?;
    assert_eq!(
      resolve_case_exact(root.path(), "/images//logo.png").unwrap(),
      Resolution::CaseMismatch("/images/logo.png".into())
    );
    Ok(())
  }

  #[test]
  fn case_colliding_siblings_still_report_a_mismatch() -> std::io::Result<()> {
    let root = public_root()?;
    fs::write(root.path().join("icons/Foo.png"), b"a")?;
    fs::write(root.path().join("icons/FOO.png"), b"b")?;

    let resolution = resolve_case_exact(root.path(), "/icons/foo.png").unwrap();
    assert!(matches!(resolution, Resolution::CaseMismatch(_)));
    Ok(())
  }

  #[test]
  fn resolution_is_idempotent() -> std::io::Result<()> {
    let root = public_root()?;
    for path in ["/Images/Logo.PNG", "/icons/star.svg", "/nope.gif"] {
      let first = resolve_case_exact(root.path(), path).unwrap();
      let second = resolve_case_exact(root.path(), path).unwrap();
      assert_eq!(first, second);
    }
    Ok(())
  }
}
