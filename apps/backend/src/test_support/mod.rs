//! Shared helpers for integration tests.
//!
//! Compiled into the library (not `#[cfg(test)]`) so the `tests/`
//! directory can use the same harness the unit tests do.

pub mod app_builder;

pub use app_builder::{create_test_app, create_test_app_builder, TestAppBuilder};
