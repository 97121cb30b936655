#![allow(dead_code)]

pub mod app_builder;
pub mod auth;
pub mod recording_store;

pub use app_builder::{create_test_app, test_state};
pub use recording_store::{RecordingStore, StoreCall};

// Logging is auto-installed for every test binary that pulls in `support`.
#[ctor::ctor]
fn init_logging() {
    backend_test_support::test_logging::init();
}
