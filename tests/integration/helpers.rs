//! Test helpers for integration tests

use anyhow::Result;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// A throwaway project directory to run the packager in
pub struct TestProject {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestProject {
  /// Create a project directory containing the given Cargo.toml text
  pub fn with_manifest(manifest: &str) -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();
    std::fs::write(path.join("Cargo.toml"), manifest)?;
    Ok(Self { _root: root, path })
  }

  /// Create a project directory with no manifest at all
  pub fn empty() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();
    Ok(Self { _root: root, path })
  }
}

/// Run the cargo-stevedore binary inside the project directory
pub fn run_stevedore(project: &TestProject, args: &[&str]) -> Result<Output> {
  let output = Command::new(env!("CARGO_BIN_EXE_cargo-stevedore"))
    .current_dir(&project.path)
    .args(args)
    .output()?;
  Ok(output)
}
