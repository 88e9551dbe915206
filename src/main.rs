//! Command-line entry point: checks one project and exits non-zero on any finding.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use asset_case_check::{AssetChecker, ProjectLayout};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
  name = "asset-case-check",
  about = "Verify that asset paths referenced from app/ and components/ exist under public/ with exact case",
  version
)]
struct Cli {
  /// Project root containing public/, app/ and components/ (defaults to the current directory)
  #[arg(default_value = ".")]
  project_root: PathBuf,
}

fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    )
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();
  match run(&cli) {
    Ok(code) => code,
    Err(err) => {
      eprintln!("{err:#}");
      ExitCode::FAILURE
    }
  }
}

fn run(cli: &Cli) -> Result<ExitCode> {
  let project_root = cli.project_root.canonicalize().with_context(|| {
    format!(
      "failed to resolve project root {}",
      cli.project_root.display()
    )
  })?;

  let report = AssetChecker::new(ProjectLayout::discover(&project_root)).run()?;
  eprint!("{report}");
  Ok(report.exit_code())
}
