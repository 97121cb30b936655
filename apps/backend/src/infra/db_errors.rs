//! SeaORM -> DomainError translation.
//!
//! Constraint violations are classified with `DbErr::sql_err()`, which reads
//! the driver error code (SQLSTATE on PostgreSQL, extended result codes on
//! SQLite) instead of matching on message text.

use sea_orm::{ConnAcquireErr, DbErr, SqlErr};
use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
/// Raw driver messages only go to the log, redacted.
pub fn map_db_err(e: DbErr) -> DomainError {
    let trace_id = trace_ctx::trace_id();

    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(raw)) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&raw), "Unique constraint violation");
            return DomainError::conflict(ConflictKind::Unique, "Resource already exists");
        }
        Some(SqlErr::ForeignKeyConstraintViolation(raw)) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&raw), "Foreign key constraint violation");
            return DomainError::conflict(
                ConflictKind::ForeignKey,
                "Referenced resource is missing or still in use",
            );
        }
        _ => {}
    }

    match &e {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => {
            DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found")
        }
        DbErr::ConnectionAcquire(ConnAcquireErr::Timeout) => {
            warn!(trace_id = %trace_id, "Database pool timeout");
            DomainError::infra(InfraErrorKind::Timeout, "Database timeout")
        }
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => {
            let raw = e.to_string();
            warn!(trace_id = %trace_id, raw_error = %Redacted(&raw), "Database unavailable");
            DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable")
        }
        _ => {
            let raw = e.to_string();
            error!(trace_id = %trace_id, raw_error = %Redacted(&raw), "Unhandled database error");
            DomainError::infra(
                InfraErrorKind::Other("DbErr".into()),
                "Database operation failed",
            )
        }
    }
}
