//! Test logging for unit tests inside this crate. Integration tests use
//! `backend_test_support::test_logging` instead.

pub fn init() {
    backend_test_support::test_logging::init();
}
