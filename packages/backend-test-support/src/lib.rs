//! Backend test support utilities
//!
//! Shared helpers for the recipes backend test suites: idempotent logging
//! initialization, Problem Details assertions and unique test data.

pub mod problem_details;
pub mod test_logging;
pub mod unique_helpers;
