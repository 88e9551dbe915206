//! Extraction of quoted asset paths from project source files.
//!
//! Matching is lexical: any single- or double-quoted literal that starts with `/` and ends in
//! a known asset extension counts, whatever the host language. Unquoted or templated paths are
//! not seen at all.

mod pattern;
mod scanner;

pub use pattern::extract_references;
pub use scanner::{ReferenceScanner, decode_source, is_source_file};
