//! Build targets: the fixed platform/architecture matrix
//!
//! The matrix is a closed set known at compile time. Adding a platform is a
//! single edit here: one enum variant, one `BUILD_MATRIX` entry, and the
//! match arms below — exhaustiveness checking catches anything missed.

use std::fmt;
use std::path::{Path, PathBuf};

/// One (OS, architecture, toolchain triple) combination to compile for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildTarget {
  LinuxAmd64,
  LinuxArm64,
  MacosAmd64,
  MacosArm64,
  WindowsAmd64,
}

/// The full static build matrix for a release, in build order
pub const BUILD_MATRIX: [BuildTarget; 5] = [
  BuildTarget::LinuxAmd64,
  BuildTarget::LinuxArm64,
  BuildTarget::MacosAmd64,
  BuildTarget::MacosArm64,
  BuildTarget::WindowsAmd64,
];

impl BuildTarget {
  /// Toolchain target triple passed to `cargo build --target`
  pub const fn triple(self) -> &'static str {
    match self {
      BuildTarget::LinuxAmd64 => "x86_64-unknown-linux-gnu",
      BuildTarget::LinuxArm64 => "aarch64-unknown-linux-gnu",
      BuildTarget::MacosAmd64 => "x86_64-apple-darwin",
      BuildTarget::MacosArm64 => "aarch64-apple-darwin",
      BuildTarget::WindowsAmd64 => "x86_64-pc-windows-gnu",
    }
  }

  /// Human-readable OS label used in artifact filenames
  pub const fn os_label(self) -> &'static str {
    match self {
      BuildTarget::LinuxAmd64 | BuildTarget::LinuxArm64 => "linux",
      BuildTarget::MacosAmd64 | BuildTarget::MacosArm64 => "macos",
      BuildTarget::WindowsAmd64 => "windows",
    }
  }

  /// Human-readable architecture label used in artifact filenames
  pub const fn arch_label(self) -> &'static str {
    match self {
      BuildTarget::LinuxAmd64 | BuildTarget::MacosAmd64 | BuildTarget::WindowsAmd64 => "amd64",
      BuildTarget::LinuxArm64 | BuildTarget::MacosArm64 => "arm64",
    }
  }

  /// Platform executable suffix; empty everywhere except Windows
  pub const fn extension(self) -> &'static str {
    match self {
      BuildTarget::WindowsAmd64 => ".exe",
      _ => "",
    }
  }

  /// Filename an artifact is published under: `{name}_{os}_{arch}_v{version}{ext}`
  pub fn artifact_filename(self, program: &str, version: &str) -> String {
    format!(
      "{}_{}_{}_v{}{}",
      program,
      self.os_label(),
      self.arch_label(),
      version,
      self.extension()
    )
  }

  /// Where cargo leaves the compiled executable for this target
  pub fn artifact_source(self, root: &Path, program: &str) -> PathBuf {
    root
      .join("target")
      .join(self.triple())
      .join("release")
      .join(format!("{}{}", program, self.extension()))
  }
}

impl fmt::Display for BuildTarget {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}", self.os_label(), self.arch_label())
  }
}
