//! PASETO `v4.local` token maker.
//!
//! Tokens are the JSON-encoded [`Payload`] sealed with authenticated
//! encryption under a 32-byte symmetric key. No footer and no implicit
//! assertion are used.

use std::fmt;

use pasetors::keys::SymmetricKey;
use pasetors::token::UntrustedToken;
use pasetors::version4::{LocalToken, V4};
use pasetors::Local;
use time::Duration;

use super::errors::TokenError;
use super::payload::Payload;

/// Exact key length required by the `v4.local` construction.
pub const SYMMETRIC_KEY_SIZE: usize = 32;

/// Issues and verifies access tokens.
pub trait TokenMaker: Send + Sync {
    /// Create a token for `username` valid for `duration`.
    fn create_token(&self, username: &str, duration: Duration) -> Result<String, TokenError>;

    /// Decrypt and authenticate `token`, then check its expiry.
    fn verify_token(&self, token: &str) -> Result<Payload, TokenError>;
}

pub struct PasetoMaker {
    key: SymmetricKey<V4>,
}

impl PasetoMaker {
    /// Build a maker from raw key bytes.
    ///
    /// The key must be exactly [`SYMMETRIC_KEY_SIZE`] bytes long.
    pub fn new(symmetric_key: &[u8]) -> Result<Self, TokenError> {
        let invalid_size = || TokenError::InvalidKeySize {
            expected: SYMMETRIC_KEY_SIZE,
            actual: symmetric_key.len(),
        };

        if symmetric_key.len() != SYMMETRIC_KEY_SIZE {
            return Err(invalid_size());
        }

        let key = SymmetricKey::<V4>::from(symmetric_key).map_err(|_| invalid_size())?;
        Ok(Self { key })
    }
}

impl fmt::Debug for PasetoMaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasetoMaker")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

impl TokenMaker for PasetoMaker {
    fn create_token(&self, username: &str, duration: Duration) -> Result<String, TokenError> {
        let payload = Payload::new(username, duration)?;
        let message =
            serde_json::to_vec(&payload).map_err(|e| TokenError::Encoding(e.to_string()))?;

        LocalToken::encrypt(&self.key, &message, None, None)
            .map_err(|e| TokenError::Encoding(format!("{e:?}")))
    }

    fn verify_token(&self, token: &str) -> Result<Payload, TokenError> {
        let untrusted =
            UntrustedToken::<Local, V4>::try_from(token).map_err(|_| TokenError::InvalidToken)?;
        let trusted = LocalToken::decrypt(&self.key, &untrusted, None, None)
            .map_err(|_| TokenError::InvalidToken)?;
        let payload: Payload =
            serde_json::from_str(trusted.payload()).map_err(|_| TokenError::InvalidToken)?;

        payload.valid()?;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use time::{Duration, OffsetDateTime};

    use super::*;

    const KEY_A: &[u8; 32] = b"12345678901234567890123456789012";
    const KEY_B: &[u8; 32] = b"abcdefghijklmnopqrstuvwxyzABCDEF";

    #[test]
    fn create_and_verify_roundtrip() {
        let maker = PasetoMaker::new(KEY_A).unwrap();
        let duration = Duration::minutes(1);
        let before = OffsetDateTime::now_utc();

        let token = maker.create_token("alice", duration).unwrap();
        let payload = maker.verify_token(&token).unwrap();

        assert!(token.starts_with("v4.local."));
        assert_eq!(payload.username, "alice");
        assert!(payload.issued_at >= before);
        assert!(payload.issued_at - before < Duration::seconds(1));
        assert_eq!(payload.expired_at, payload.issued_at + duration);
    }

    #[test]
    fn expired_token_is_rejected() {
        let maker = PasetoMaker::new(KEY_A).unwrap();
        let token = maker.create_token("alice", -Duration::minutes(1)).unwrap();

        assert_eq!(maker.verify_token(&token), Err(TokenError::ExpiredToken));
    }

    #[test]
    fn foreign_key_token_is_invalid() {
        let maker_a = PasetoMaker::new(KEY_A).unwrap();
        let maker_b = PasetoMaker::new(KEY_B).unwrap();
        let token = maker_a.create_token("alice", Duration::minutes(1)).unwrap();

        assert_eq!(maker_b.verify_token(&token), Err(TokenError::InvalidToken));
    }

    #[test]
    fn tampered_token_is_invalid() {
        let maker = PasetoMaker::new(KEY_A).unwrap();
        let token = maker.create_token("alice", Duration::minutes(1)).unwrap();

        let mut tampered = token.into_bytes();
        let idx = "v4.local.".len() + 10;
        tampered[idx] = if tampered[idx] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(tampered).unwrap();

        assert_eq!(maker.verify_token(&tampered), Err(TokenError::InvalidToken));
    }

    #[test]
    fn garbage_is_invalid() {
        let maker = PasetoMaker::new(KEY_A).unwrap();

        for token in ["", "garbage", "v4.local.", "v4.public.abc", "v2.local.AAAA"] {
            assert_eq!(maker.verify_token(token), Err(TokenError::InvalidToken));
        }
    }

    #[test]
    fn short_and_long_keys_are_rejected() {
        assert_eq!(
            PasetoMaker::new(b"short").unwrap_err(),
            TokenError::InvalidKeySize {
                expected: 32,
                actual: 5
            }
        );
        assert!(matches!(
            PasetoMaker::new(&[0u8; 33]),
            Err(TokenError::InvalidKeySize { actual: 33, .. })
        ));
    }

    #[test]
    fn verifying_twice_is_idempotent() {
        let maker = PasetoMaker::new(KEY_A).unwrap();
        let token = maker.create_token("alice", Duration::minutes(1)).unwrap();

        let first = maker.verify_token(&token).unwrap();
        let second = maker.verify_token(&token).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn debug_output_hides_key() {
        let maker = PasetoMaker::new(KEY_A).unwrap();
        let rendered = format!("{maker:?}");
        assert!(!rendered.contains("1234567890"));
    }
}
