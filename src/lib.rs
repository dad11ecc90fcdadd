//! Workspace-level integration tests for the largeint crates.
//!
//! See `tests/` for the golden scenarios and pool reuse suites.
