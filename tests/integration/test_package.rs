//! Integration tests for manifest failure modes and the CLI surface
//!
//! Everything here exercises paths that terminate before the first
//! toolchain invocation; full-matrix runs need cross linkers the test
//! environment does not have.

use crate::helpers::{TestProject, run_stevedore};
use anyhow::Result;

#[test]
fn test_missing_version_fails_loudly() -> Result<()> {
  let project = TestProject::with_manifest("[package]\nname = \"app\"\nedition = \"2021\"\n")?;

  let output = run_stevedore(&project, &["stevedore"])?;
  assert!(!output.status.success());
  assert_eq!(output.status.code(), Some(2));

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("version"), "stderr should name the missing field: {}", stderr);
  Ok(())
}

#[test]
fn test_missing_manifest_fails_loudly() -> Result<()> {
  let project = TestProject::empty()?;

  let output = run_stevedore(&project, &["stevedore"])?;
  assert_eq!(output.status.code(), Some(2));

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("cannot read manifest"), "unexpected stderr: {}", stderr);
  Ok(())
}

#[test]
fn test_garbled_version_is_rejected() -> Result<()> {
  let project = TestProject::with_manifest("[package]\nname = \"app\"\nversion = \"one.two\"\n")?;

  let output = run_stevedore(&project, &["stevedore"])?;
  assert_eq!(output.status.code(), Some(2));

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("not valid semver"), "unexpected stderr: {}", stderr);
  Ok(())
}

#[test]
fn test_version_below_scan_window_is_rejected() -> Result<()> {
  let mut manifest = String::from("[package]\nname = \"app\"\n");
  for _ in 0..12 {
    manifest.push_str("# padding\n");
  }
  manifest.push_str("version = \"1.0.0\"\n");
  let project = TestProject::with_manifest(&manifest)?;

  let output = run_stevedore(&project, &["stevedore"])?;
  assert_eq!(output.status.code(), Some(2));
  Ok(())
}

#[test]
fn test_help_describes_the_pipeline() -> Result<()> {
  let project = TestProject::empty()?;

  let output = run_stevedore(&project, &["stevedore", "--help"])?;
  assert!(output.status.success());

  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("dist"), "help should mention the output directory: {}", stdout);
  Ok(())
}

#[test]
fn test_version_flag() -> Result<()> {
  let project = TestProject::empty()?;

  let output = run_stevedore(&project, &["stevedore", "--version"])?;
  assert!(output.status.success());
  Ok(())
}
