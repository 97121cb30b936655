//! Token helpers for tests.

use recipes_backend::auth::TokenMaker;
use recipes_backend::state::app_state::AppState;
use recipes_backend::state::security_config::SecurityConfig;
use time::Duration;

pub const TEST_KEY: &[u8; 32] = b"recipes-test-key-0123456789abcde";
pub const OTHER_KEY: &[u8; 32] = b"some-other-key-0123456789abcdefg";

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_KEY.to_vec(), Duration::minutes(15))
}

/// Token for `username` issued by the app's own maker.
pub fn token_for(state: &AppState, username: &str) -> String {
    state
        .token_maker
        .create_token(username, Duration::minutes(15))
        .expect("should create token")
}

/// Full `authorization` header value for `username`.
pub fn bearer(state: &AppState, username: &str) -> String {
    format!("Bearer {}", token_for(state, username))
}

/// Header value carrying a token that expired a minute ago.
pub fn expired_bearer(state: &AppState, username: &str) -> String {
    let token = state
        .token_maker
        .create_token(username, Duration::minutes(-1))
        .expect("should create pre-expired token");
    format!("Bearer {token}")
}
