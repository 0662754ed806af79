//! Integration tests for the cargo-stevedore binary

mod helpers;
mod test_package;
