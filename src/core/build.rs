//! Toolchain invocation: one release build per matrix entry
//!
//! Builds run sequentially in matrix order. Concurrent `cargo build`
//! invocations would serialize on the shared target-dir lock anyway, so the
//! pipeline keeps a single blocking child process at a time. Compiler
//! output streams straight through to the operator.

use crate::core::error::{ResultExt, StevedoreError, StevedoreResult};
use crate::core::target::BuildTarget;
use std::path::Path;
use std::process::Command;

/// Compile the program for every target in the matrix, fail-fast
///
/// The first non-zero compiler exit aborts the run before the output
/// directory is touched; already-built targets stay in cargo's cache but
/// are never collected.
pub fn build_all(root: &Path, matrix: &[BuildTarget]) -> StevedoreResult<()> {
  for (i, target) in matrix.iter().enumerate() {
    println!("🔨 [{}/{}] Building {} ({})", i + 1, matrix.len(), target, target.triple());
    build_release(root, *target)?;
  }
  Ok(())
}

/// Run one release-mode compilation for a single target
pub fn build_release(root: &Path, target: BuildTarget) -> StevedoreResult<()> {
  let status = build_command(root, target)
    .status()
    .with_context(|| format!("failed to invoke cargo for {}", target))?;

  if !status.success() {
    return Err(StevedoreError::Build {
      target,
      code: status.code(),
    });
  }

  Ok(())
}

/// The exact command line used for one target
fn build_command(root: &Path, target: BuildTarget) -> Command {
  let mut cmd = Command::new("cargo");
  cmd
    .current_dir(root)
    .args(["build", "--release", "--target", target.triple()]);
  cmd
}
