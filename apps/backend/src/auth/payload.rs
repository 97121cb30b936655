//! Claims carried inside an access token.

use rand::rngs::OsRng;
use rand::TryRngCore;
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use super::errors::TokenError;

/// Payload sealed inside every token.
///
/// Created once at issuance and never mutated. Its only storage is the
/// encrypted token itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    pub id: Uuid,
    pub username: String,
    #[serde(with = "time::serde::rfc3339")]
    pub issued_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub expired_at: OffsetDateTime,
}

impl Payload {
    /// Build a payload for `username` that expires `duration` from now.
    ///
    /// Zero or negative durations are accepted and yield a payload that is
    /// already expired.
    pub fn new(username: &str, duration: Duration) -> Result<Self, TokenError> {
        let id = new_token_id()?;
        let issued_at = OffsetDateTime::now_utc();
        let expired_at = issued_at
            .checked_add(duration)
            .ok_or(TokenError::ExpiryOutOfRange {
                seconds: duration.whole_seconds(),
            })?;

        Ok(Self {
            id,
            username: username.to_string(),
            issued_at,
            expired_at,
        })
    }

    /// Check the expiry against the current time.
    pub fn valid(&self) -> Result<(), TokenError> {
        if OffsetDateTime::now_utc() > self.expired_at {
            return Err(TokenError::ExpiredToken);
        }
        Ok(())
    }
}

fn new_token_id() -> Result<Uuid, TokenError> {
    let mut bytes = [0u8; 16];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| TokenError::IdGeneration(e.to_string()))?;
    Ok(uuid::Builder::from_random_bytes(bytes).into_uuid())
}
