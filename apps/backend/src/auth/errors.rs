use thiserror::Error;

/// Failures raised while issuing or verifying access tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("invalid key size: key must be exactly {expected} bytes, got {actual}")]
    InvalidKeySize { expected: usize, actual: usize },
    #[error("failed to generate token id: {0}")]
    IdGeneration(String),
    #[error("failed to encode token: {0}")]
    Encoding(String),
    #[error("token expiry is out of range for a lifetime of {seconds}s")]
    ExpiryOutOfRange { seconds: i64 },
    #[error("token is invalid")]
    InvalidToken,
    #[error("token has expired")]
    ExpiredToken,
}
