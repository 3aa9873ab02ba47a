//! Backend test support utilities
//!
//! This crate provides utilities specifically for backend testing,
//! currently unified logging initialization shared between unit and
//! integration tests.

pub mod test_logging;
