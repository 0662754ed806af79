//! Core engine for the packaging pipeline
//!
//! This module contains the building blocks the `package` command composes:
//!
//! - **build**: release-mode toolchain invocation per build target
//! - **error**: structured error types with exit codes and help messages
//! - **manifest**: program name and version extraction from Cargo.toml
//! - **publish**: atomic collection of artifacts into the output directory
//! - **target**: the closed build-target set and its label/triple tables

pub mod build;
pub mod error;
pub mod manifest;
pub mod publish;
pub mod target;
