//! Artifact collection: rename binaries into a fresh output directory
//!
//! Publishing is atomic at the directory level. Artifacts are copied into a
//! staging directory first; only once every matrix entry has been staged is
//! the previous `dist/` removed and the staging directory renamed into
//! place. A missing artifact therefore never leaves a half-populated
//! output directory behind.

use crate::core::error::{ResultExt, StevedoreError, StevedoreResult};
use crate::core::manifest::Manifest;
use crate::core::target::BuildTarget;
use crate::ui::progress::CollectProgress;
use std::fs;
use std::path::{Path, PathBuf};

/// Output directory, relative to the invocation root
pub const OUTPUT_DIR: &str = "dist";

const STAGING_SUFFIX: &str = ".staging";

/// Collect and rename every artifact, then swap the output directory in
///
/// Returns the published paths in matrix order. On failure any existing
/// `dist/` is left untouched and the staging directory is removed.
pub fn publish(root: &Path, manifest: &Manifest, matrix: &[BuildTarget]) -> StevedoreResult<Vec<PathBuf>> {
  let dist = root.join(OUTPUT_DIR);
  let staging = root.join(format!("{}{}", OUTPUT_DIR, STAGING_SUFFIX));

  // Leftover staging from a crashed run
  if staging.exists() {
    fs::remove_dir_all(&staging).with_context(|| format!("removing stale {}", staging.display()))?;
  }
  fs::create_dir_all(&staging).with_context(|| format!("creating {}", staging.display()))?;

  let staged = stage_artifacts(root, &staging, manifest, matrix).inspect_err(|_| {
    let _ = fs::remove_dir_all(&staging);
  })?;

  // Reset + populate becomes a single swap
  if dist.exists() {
    fs::remove_dir_all(&dist).with_context(|| format!("removing previous {}", dist.display()))?;
  }
  fs::rename(&staging, &dist).with_context(|| format!("publishing {}", dist.display()))?;

  Ok(staged.into_iter().map(|name| dist.join(name)).collect())
}

/// Copy each artifact into the staging directory under its release name
fn stage_artifacts(
  root: &Path,
  staging: &Path,
  manifest: &Manifest,
  matrix: &[BuildTarget],
) -> StevedoreResult<Vec<String>> {
  let mut progress = CollectProgress::new(matrix.len(), format!("Collecting {} artifacts", manifest.name));
  let mut staged = Vec::with_capacity(matrix.len());

  for target in matrix {
    let source = target.artifact_source(root, &manifest.name);
    if !source.exists() {
      return Err(StevedoreError::MissingArtifact {
        target: *target,
        path: source,
      });
    }

    let filename = target.artifact_filename(&manifest.name, &manifest.version);
    fs::copy(&source, staging.join(&filename))
      .with_context(|| format!("copying {} for {}", source.display(), target))?;
    staged.push(filename);
    progress.inc();
  }

  Ok(staged)
}
