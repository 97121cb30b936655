//! `SECURITY_*` warn events. Free-form inputs go through [`Redacted`].

use tracing::warn;

use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// A bearer credential was refused by the authorization middleware.
pub fn token_rejected(reason: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_TOKEN_REJECTED",
        %trace_id,
        reason = %Redacted(reason),
        "Bearer token rejected"
    );
}

/// An authenticated subject tried to mutate a resource it does not own.
pub fn ownership_denied(subject: &str, resource: &str, owner: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_OWNERSHIP_DENIED",
        %trace_id,
        subject,
        resource,
        owner,
        "Mutation of foreign resource refused"
    );
}

/// A login attempt failed.
pub fn login_failed(reason: &str, username: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_LOGIN_FAILED",
        %trace_id,
        username = %Redacted(username),
        reason,
        "Authentication failure"
    );
}
