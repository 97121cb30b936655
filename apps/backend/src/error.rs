use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::auth::{PasswordError, TokenError};
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::errors::ErrorCode;
use crate::trace_ctx;

#[derive(Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Unauthorized: {detail}")]
    Unauthorized { code: ErrorCode, detail: String },
    #[error("Forbidden: {detail}")]
    Forbidden { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Database error: {detail}")]
    Db { code: ErrorCode, detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::Unauthorized { code, .. } => *code,
            AppError::Forbidden { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::Db { code, .. } => *code,
            AppError::Internal { .. } => ErrorCode::Internal,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            AppError::Validation { detail, .. }
            | AppError::Unauthorized { detail, .. }
            | AppError::Forbidden { detail, .. }
            | AppError::NotFound { detail, .. }
            | AppError::Db { detail, .. }
            | AppError::Internal { detail }
            | AppError::Config { detail } => detail.clone(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Db { code, .. } => match code {
                ErrorCode::DbUnavailable => StatusCode::SERVICE_UNAVAILABLE,
                ErrorCode::DbTimeout => StatusCode::GATEWAY_TIMEOUT,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn invalid(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::invalid(ErrorCode::BadRequest, detail)
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn unauthorized(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Unauthorized {
            code,
            detail: detail.into(),
        }
    }

    pub fn missing_authorization() -> Self {
        Self::unauthorized(
            ErrorCode::MissingAuthorization,
            "authorization header is not provided",
        )
    }

    pub fn malformed_authorization() -> Self {
        Self::unauthorized(
            ErrorCode::MalformedAuthorization,
            "invalid authorization header format",
        )
    }

    pub fn unsupported_scheme(scheme: &str) -> Self {
        Self::unauthorized(
            ErrorCode::UnsupportedAuthorizationScheme,
            format!("unsupported authorization type {scheme}"),
        )
    }

    pub fn unauthorized_user() -> Self {
        Self::unauthorized(
            ErrorCode::UnauthorizedUser,
            "resource doesn't belong to the authenticated user",
        )
    }

    pub fn forbidden(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Forbidden {
            code,
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<TokenError> for AppError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::InvalidToken => AppError::unauthorized(ErrorCode::InvalidToken, e.to_string()),
            TokenError::ExpiredToken => AppError::unauthorized(ErrorCode::ExpiredToken, e.to_string()),
            TokenError::InvalidKeySize { .. } => AppError::config(e.to_string()),
            TokenError::IdGeneration(_)
            | TokenError::Encoding(_)
            | TokenError::ExpiryOutOfRange { .. } => {
                AppError::internal(e.to_string())
            }
        }
    }
}

impl From<PasswordError> for AppError {
    fn from(e: PasswordError) -> Self {
        match e {
            PasswordError::Mismatch => AppError::unauthorized(
                ErrorCode::InvalidCredentials,
                "invalid username or password",
            ),
            PasswordError::Hash(detail) => AppError::internal(detail),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(detail) => AppError::invalid(ErrorCode::ValidationError, detail),
            DomainError::NotFound(kind, detail) => {
                let code = match kind {
                    NotFoundKind::Author => ErrorCode::AuthorNotFound,
                    NotFoundKind::Recipe => ErrorCode::RecipeNotFound,
                    _ => ErrorCode::NotFound,
                };
                AppError::not_found(code, detail)
            }
            DomainError::Conflict(kind, detail) => {
                let code = match kind {
                    ConflictKind::Unique => ErrorCode::UniqueViolation,
                    ConflictKind::ForeignKey => ErrorCode::FkViolation,
                    _ => ErrorCode::ValidationError,
                };
                AppError::forbidden(code, detail)
            }
            DomainError::Infra(kind, detail) => {
                let code = match kind {
                    InfraErrorKind::Timeout => ErrorCode::DbTimeout,
                    InfraErrorKind::DbUnavailable => ErrorCode::DbUnavailable,
                    _ => ErrorCode::DbError,
                };
                AppError::Db { code, detail }
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code().as_str();
        let trace_id = trace_ctx::trace_id();

        let problem_details = ProblemDetails {
            type_: format!("urn:recipes:error:{}", code.to_lowercase()),
            title: Self::humanize_code(code),
            status: status.as_u16(),
            detail: self.detail(),
            code: code.to_string(),
            trace_id: trace_id.clone(),
        };

        HttpResponse::build(status)
            .content_type("application/problem+json")
            .insert_header(("x-trace-id", trace_id))
            .json(problem_details)
    }
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;

    use super::*;

    #[test]
    fn token_errors_map_to_401_with_message() {
        let err = AppError::from(TokenError::ExpiredToken);
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.code(), ErrorCode::ExpiredToken);
        assert_eq!(err.detail(), "token has expired");

        let err = AppError::from(TokenError::InvalidToken);
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.detail(), "token is invalid");
    }

    #[test]
    fn key_size_error_is_config() {
        let err = AppError::from(TokenError::InvalidKeySize {
            expected: 32,
            actual: 3,
        });
        assert_eq!(err.code(), ErrorCode::ConfigError);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn expiry_out_of_range_is_internal_with_reason() {
        let err = AppError::from(TokenError::ExpiryOutOfRange { seconds: i64::MAX });
        assert_eq!(err.code(), ErrorCode::Internal);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.detail().contains("expiry is out of range"));
    }

    #[test]
    fn domain_errors_map_to_statuses() {
        let cases = [
            (
                DomainError::not_found(NotFoundKind::Recipe, "recipe 7 not found"),
                StatusCode::NOT_FOUND,
                ErrorCode::RecipeNotFound,
            ),
            (
                DomainError::conflict(ConflictKind::Unique, "email already registered"),
                StatusCode::FORBIDDEN,
                ErrorCode::UniqueViolation,
            ),
            (
                DomainError::conflict(ConflictKind::ForeignKey, "author does not exist"),
                StatusCode::FORBIDDEN,
                ErrorCode::FkViolation,
            ),
            (
                DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable"),
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorCode::DbUnavailable,
            ),
            (
                DomainError::validation("bad"),
                StatusCode::BAD_REQUEST,
                ErrorCode::ValidationError,
            ),
        ];

        for (domain, status, code) in cases {
            let err = AppError::from(domain);
            assert_eq!(err.status(), status);
            assert_eq!(err.code(), code);
        }
    }

    #[test]
    fn humanize_code_title_cases_words() {
        assert_eq!(AppError::humanize_code("EXPIRED_TOKEN"), "Expired Token");
    }

    #[actix_web::test]
    async fn error_response_is_problem_details() {
        let resp = AppError::unauthorized_user().error_response();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "application/problem+json"
        );
        assert_eq!(resp.headers().get("x-trace-id").unwrap(), "unknown");

        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], "UNAUTHORIZED_USER");
        assert_eq!(json["status"], 401);
        assert_eq!(json["title"], "Unauthorized User");
        assert_eq!(json["trace_id"], "unknown");
    }
}
