//! `cargo stevedore` - Package release binaries for every platform target
//!
//! The pipeline runs end-to-end with no knobs:
//! 1. Extract the program name and version from Cargo.toml
//! 2. Compile release binaries for the full build matrix, fail-fast
//! 3. Collect and rename artifacts into a fresh `dist/` directory
//!
//! Partial releases are never published: a compiler failure stops the run
//! before `dist/` is touched, and collection stages into a temporary
//! directory that is swapped in only on full success.

use crate::core::build;
use crate::core::error::{ResultExt, StevedoreResult};
use crate::core::manifest::Manifest;
use crate::core::publish;
use crate::core::target::BUILD_MATRIX;

/// Run the packaging pipeline in the current directory
pub fn run_package() -> StevedoreResult<()> {
  let root = std::env::current_dir().with_context(|| "failed to get current directory".to_string())?;

  let manifest = Manifest::load(&root)?;
  display_plan(&manifest);

  build::build_all(&root, &BUILD_MATRIX)?;

  println!();
  let published = publish::publish(&root, &manifest, &BUILD_MATRIX)?;

  println!("\n✅ Published {} artifacts to {}/", published.len(), publish::OUTPUT_DIR);
  for path in &published {
    if let Some(name) = path.file_name() {
      println!("  📦 {}", name.to_string_lossy());
    }
  }

  Ok(())
}

/// Display what this run will produce
fn display_plan(manifest: &Manifest) {
  println!("📦 Packaging {} v{}", manifest.name, manifest.version);
  println!("════════════════════════════════════════");
  println!("Build matrix: {} targets", BUILD_MATRIX.len());
  for target in &BUILD_MATRIX {
    println!(
      "  {} ({}) -> {}",
      target,
      target.triple(),
      target.artifact_filename(&manifest.name, &manifest.version)
    );
  }
  println!();
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::target::BuildTarget;

  #[test]
  fn test_plan_covers_the_whole_matrix() {
    // The plan and the build loop iterate the same constant; a target added
    // to the enum without a matrix entry fails the exhaustiveness checks in
    // core::target, so the only thing to pin here is that the matrix is
    // non-empty and leads with linux.
    assert!(!BUILD_MATRIX.is_empty());
    assert_eq!(BUILD_MATRIX[0], BuildTarget::LinuxAmd64);
  }
}
