//! Bucketing of resolution outcomes and the textual report printed on failure.

use std::fmt;
use std::process::ExitCode;

use crate::layout::REPORT_LIMIT;
use crate::models::{CaseMismatch, Reference, Resolution};

/// Findings accumulated over a whole scan. References are never deduplicated.
#[derive(Debug, Default)]
pub struct Report {
  /// References whose path does not exist in any case.
  pub missing: Vec<Reference>,
  /// References that only resolve case-insensitively.
  pub case_mismatches: Vec<CaseMismatch>,
}

impl Report {
  /// File a resolved reference into the matching bucket.
  pub fn record(&mut self, reference: Reference, resolution: Resolution) {
    match resolution {
      Resolution::ExactMatch => {}
      Resolution::CaseMismatch(corrected) => self.case_mismatches.push(CaseMismatch {
        reference,
        corrected,
      }),
      Resolution::Missing => self.missing.push(reference),
    }
  }

  /// Returns `true` when there is nothing to report.
  pub fn is_clean(&self) -> bool {
    self.missing.is_empty() && self.case_mismatches.is_empty()
  }

  /// Process exit status for this report.
  pub fn exit_code(&self) -> ExitCode {
    if self.is_clean() {
      ExitCode::SUCCESS
    } else {
      ExitCode::FAILURE
    }
  }
}

impl fmt::Display for Report {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if !self.missing.is_empty() {
      writeln!(f, "Missing assets (path not found under public/):")?;
      write_capped(f, &self.missing)?;
    }

    if !self.case_mismatches.is_empty() {
      writeln!(f, "Case mismatches (works on macOS, breaks on Linux):")?;
      write_capped(f, &self.case_mismatches)?;
    }

    Ok(())
  }
}

fn write_capped<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
  for item in items.iter().take(REPORT_LIMIT) {
    writeln!(f, "- {item}")?;
  }

  if items.len() > REPORT_LIMIT {
    writeln!(f, "... and {} more", items.len() - REPORT_LIMIT)?;
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use super::*;

  fn reference(line_number: usize, path: &str) -> Reference {
    Reference {
      source_file: PathBuf::from("app/page.tsx"),
      referenced_path: path.into(),
      line_number,
    }
  }

  #[test]
  fn exact_matches_leave_report_clean() {
    let mut report = Report::default();
    report.record(reference(1, "/a.png"), Resolution::ExactMatch);
    assert!(report.is_clean());
    assert_eq!(report.to_string(), "");
  }

  #[test]
  fn renders_both_sections() {
    let mut report = Report::default();
    report.record(reference(3, "/fonts/Brand.woff2"), Resolution::Missing);
    report.record(
      reference(9, "/Images/Logo.PNG"),
      Resolution::CaseMismatch("/images/logo.png".into()),
    );

    assert!(!report.is_clean());
    assert_eq!(
      report.to_string(),
      "Missing assets (path not found under public/):\n\
       - app/page.tsx:3 -> /fonts/Brand.woff2\n\
       Case mismatches (works on macOS, breaks on Linux):\n\
       - app/page.tsx:9 -> /Images/Logo.PNG (should be /images/logo.png)\n"
    );
  }

  #[test]
  fn caps_sections_and_summarises_remainder() {
    let mut report = Report::default();
    for line in 1..=REPORT_LIMIT + 7 {
      report.record(reference(line, "/gone.gif"), Resolution::Missing);
    }

    let rendered = report.to_string();
    let listed = rendered.lines().filter(|line| line.starts_with("- ")).count();
    assert_eq!(listed, REPORT_LIMIT);
    assert!(rendered.ends_with("... and 7 more\n"));
    assert!(!rendered.contains("Case mismatches"));
  }
}
