//! Mutation endpoints may only touch resources owned by the token subject.

use crate::auth::Payload;
use crate::error::AppError;
use crate::logging::security;

/// `Ok` when `payload.username == owner`; otherwise logs the attempt and
/// returns `UnauthorizedUser`. Callers run this before any mutating store call.
pub fn ensure_owner(payload: &Payload, owner: &str, resource: &str) -> Result<(), AppError> {
    if payload.username == owner {
        return Ok(());
    }
    security::ownership_denied(&payload.username, resource, owner);
    Err(AppError::unauthorized_user())
}
