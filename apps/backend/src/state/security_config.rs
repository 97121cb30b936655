use std::fmt;

use crate::auth::{PasetoMaker, TokenError};
use crate::error::AppError;

/// Upper bound on the lifetime of an access token.
pub const MAX_TOKEN_DURATION: time::Duration = time::Duration::days(30);

/// Token key material and lifetime.
#[derive(Clone)]
pub struct SecurityConfig {
    /// PASETO v4.local symmetric key; must be exactly 32 bytes.
    pub symmetric_key: Vec<u8>,
    /// Lifetime of access tokens issued at login.
    pub token_duration: time::Duration,
}

impl SecurityConfig {
    pub fn new(symmetric_key: impl Into<Vec<u8>>, token_duration: time::Duration) -> Self {
        Self {
            symmetric_key: symmetric_key.into(),
            token_duration,
        }
    }

    /// Build the token maker for this key. Fails on a wrong-length key.
    pub fn token_maker(&self) -> Result<PasetoMaker, TokenError> {
        PasetoMaker::new(&self.symmetric_key)
    }

    /// Token lifetime must be positive and at most [`MAX_TOKEN_DURATION`].
    pub fn check_token_duration(&self) -> Result<(), AppError> {
        if !self.token_duration.is_positive() || self.token_duration > MAX_TOKEN_DURATION {
            return Err(AppError::config(format!(
                "token duration must be between 1s and {}s, got {}s",
                MAX_TOKEN_DURATION.whole_seconds(),
                self.token_duration.whole_seconds()
            )));
        }
        Ok(())
    }
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("symmetric_key", &"<redacted>")
            .field("token_duration", &self.token_duration)
            .finish()
    }
}
