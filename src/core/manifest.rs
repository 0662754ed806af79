//! Manifest reading: program name and version identifier
//!
//! Both fields live in the `[package]` table at the very top of Cargo.toml,
//! so only a bounded leading window of the file is scanned instead of
//! parsing the whole manifest. A missing or unquoted field is a hard error,
//! and the version must parse as semver before it can reach a filename.

use crate::core::error::{ManifestError, StevedoreResult};
use std::fs;
use std::path::Path;

/// How many leading lines of the manifest are scanned for fields
const SCAN_LINES: usize = 10;

/// Program identity extracted from the project manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
  /// Package name; also the name of the compiled executable
  pub name: String,
  /// Declared version, validated as semver
  pub version: String,
}

impl Manifest {
  /// Load the manifest at `root/Cargo.toml`
  pub fn load(root: &Path) -> StevedoreResult<Self> {
    let path = root.join("Cargo.toml");
    let text = fs::read_to_string(&path).map_err(|source| ManifestError::Unreadable { path, source })?;
    Self::parse(&text)
  }

  /// Parse name and version out of manifest text
  pub fn parse(text: &str) -> StevedoreResult<Self> {
    let name = scan_field(text, "name").ok_or(ManifestError::FieldNotFound { field: "name" })?;
    let version = scan_field(text, "version").ok_or(ManifestError::FieldNotFound { field: "version" })?;

    if let Err(e) = semver::Version::parse(&version) {
      return Err(
        ManifestError::InvalidVersion {
          value: version,
          reason: e.to_string(),
        }
        .into(),
      );
    }

    Ok(Self { name, version })
  }
}

/// Find `field = "value"` within the scanned window and return the value
///
/// Returns None when the field is absent from the window or its value is
/// not enclosed in double quotes.
fn scan_field(text: &str, field: &str) -> Option<String> {
  for line in text.lines().take(SCAN_LINES) {
    let line = line.trim();
    let Some(rest) = line.strip_prefix(field) else {
      continue;
    };
    let rest = rest.trim_start();
    let Some(rest) = rest.strip_prefix('=') else {
      continue;
    };
    let rest = rest.trim_start();

    // Value must be properly quoted: `"..."` with a closing quote
    let rest = rest.strip_prefix('"')?;
    let end = rest.find('"')?;
    return Some(rest[..end].to_string());
  }
  None
}
