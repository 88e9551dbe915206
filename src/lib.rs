#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod check;
pub mod error;
pub mod layout;
pub mod models;
pub mod references;
pub mod report;
pub mod resolver;

pub use check::AssetChecker;
pub use error::CheckError;
pub use layout::ProjectLayout;
pub use models::{CaseMismatch, Reference, Resolution};
pub use report::Report;
