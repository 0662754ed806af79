//! CLI commands for cargo-stevedore
//!
//! One user-facing command:
//!
//! - **package**: run the whole release pipeline end-to-end (extract
//!   version, build the full matrix, collect renamed artifacts into a
//!   fresh `dist/`)

pub mod package;

pub use package::run_package;
