//! Error types for cargo-stevedore with contextual help messages
//!
//! Every fatal condition in the pipeline maps to a distinct variant so the
//! exit status distinguishes manifest problems, compiler failures, and
//! missing artifacts from one another.

use crate::core::target::BuildTarget;
use std::fmt;
use std::io;
use std::path::PathBuf;

pub type StevedoreResult<T> = Result<T, StevedoreError>;

/// Top-level error for all pipeline operations
#[derive(Debug)]
pub enum StevedoreError {
  /// Manifest unreadable, or the version/name field missing or malformed
  Manifest(ManifestError),
  /// A toolchain invocation exited non-zero
  Build { target: BuildTarget, code: Option<i32> },
  /// The compiler reported success but left no executable at the expected path
  MissingArtifact { target: BuildTarget, path: PathBuf },
  /// Filesystem or process-spawn failure with context
  Io { context: String, source: io::Error },
}

/// Why the manifest could not yield a usable version identifier
#[derive(Debug)]
pub enum ManifestError {
  Unreadable { path: PathBuf, source: io::Error },
  FieldNotFound { field: &'static str },
  InvalidVersion { value: String, reason: String },
}

/// Process exit codes, one per failure kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  Failure = 1,
  Manifest = 2,
  Build = 3,
  Collect = 4,
}

impl ExitCode {
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

impl StevedoreError {
  /// Exit code reported to the invoking environment
  pub fn exit_code(&self) -> ExitCode {
    match self {
      StevedoreError::Manifest(_) => ExitCode::Manifest,
      StevedoreError::Build { .. } => ExitCode::Build,
      StevedoreError::MissingArtifact { .. } => ExitCode::Collect,
      StevedoreError::Io { .. } => ExitCode::Failure,
    }
  }

  /// Optional hint printed below the error message
  pub fn help(&self) -> Option<String> {
    match self {
      StevedoreError::Manifest(ManifestError::FieldNotFound { field }) => Some(format!(
        "Expected a line like `{} = \"...\"` near the top of Cargo.toml",
        field
      )),
      StevedoreError::Build { target, .. } => Some(format!(
        "Is the toolchain installed? Try: rustup target add {}",
        target.triple()
      )),
      StevedoreError::MissingArtifact { target, .. } => Some(format!(
        "cargo reported success for {} but produced no executable; check [[bin]] configuration",
        target
      )),
      _ => None,
    }
  }
}

impl fmt::Display for StevedoreError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      StevedoreError::Manifest(e) => write!(f, "{}", e),
      StevedoreError::Build { target, code } => match code {
        Some(code) => write!(f, "build failed for {} (exit code {})", target, code),
        None => write!(f, "build failed for {} (terminated by signal)", target),
      },
      StevedoreError::MissingArtifact { target, path } => {
        write!(f, "no artifact for {} at {}", target, path.display())
      }
      StevedoreError::Io { context, source } => write!(f, "{}: {}", context, source),
    }
  }
}

impl fmt::Display for ManifestError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ManifestError::Unreadable { path, source } => {
        write!(f, "cannot read manifest {}: {}", path.display(), source)
      }
      ManifestError::FieldNotFound { field } => {
        write!(f, "no quoted `{}` field found near the top of the manifest", field)
      }
      ManifestError::InvalidVersion { value, reason } => {
        write!(f, "manifest version '{}' is not valid semver: {}", value, reason)
      }
    }
  }
}

impl std::error::Error for StevedoreError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      StevedoreError::Manifest(ManifestError::Unreadable { source, .. }) => Some(source),
      StevedoreError::Io { source, .. } => Some(source),
      _ => None,
    }
  }
}

impl From<ManifestError> for StevedoreError {
  fn from(e: ManifestError) -> Self {
    StevedoreError::Manifest(e)
  }
}

/// Print an error (and its help hint, if any) to stderr
pub fn print_error(err: &StevedoreError) {
  eprintln!("Error: {}", err);
  if let Some(help) = err.help() {
    eprintln!("  hint: {}", help);
  }
}

/// Attach context to io errors when converting into pipeline errors
pub trait ResultExt<T> {
  fn with_context<F: FnOnce() -> String>(self, context: F) -> StevedoreResult<T>;
}

impl<T> ResultExt<T> for Result<T, io::Error> {
  fn with_context<F: FnOnce() -> String>(self, context: F) -> StevedoreResult<T> {
    self.map_err(|source| StevedoreError::Io {
      context: context(),
      source,
    })
  }
}
