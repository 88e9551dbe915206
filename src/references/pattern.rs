use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::layout::ASSET_EXTENSIONS;
use crate::models::Reference;

fn asset_reference_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| {
    let extensions = ASSET_EXTENSIONS.join("|");
    // No backreferences in `regex`, so each quote style gets its own branch.
    Regex::new(&format!(
      r#""(/[^"'\n]+?\.(?i:{extensions}))"|'(/[^"'\n]+?\.(?i:{extensions}))'"#
    ))
    .expect("invalid asset reference regex")
  })
}

/// Collect every quoted asset path in `text`, in left-to-right order.
///
/// The line number is the 1-based line holding the opening quote.
pub fn extract_references(source_file: &Path, text: &str) -> Vec<Reference> {
  let mut references = Vec::new();
  let mut line_number = 1;
  let mut counted_to = 0;

  for captures in asset_reference_pattern().captures_iter(text) {
    let (Some(literal), Some(path)) = (captures.get(0), captures.get(1).or_else(|| captures.get(2)))
    else {
      continue;
    };

    line_number += text[counted_to..literal.start()]
      .bytes()
      .filter(|byte| *byte == b'\n')
      .count();
    counted_to = literal.start();

    references.push(Reference {
      source_file: source_file.to_path_buf(),
      referenced_path: path.as_str().to_string(),
      line_number,
    });
  }

  references
}
