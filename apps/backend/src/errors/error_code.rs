//! Error codes for the recipes backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes. Every code
//! is SCREAMING_SNAKE_CASE and maps 1:1 to the string in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// No authorization header was sent
    MissingAuthorization,
    /// Authorization header is not `<scheme> <token>`
    MalformedAuthorization,
    /// Authorization scheme other than bearer
    UnsupportedAuthorizationScheme,
    /// Token failed decryption, authentication or decoding
    InvalidToken,
    /// Token is past its expiry
    ExpiredToken,
    /// Authenticated user does not own the resource
    UnauthorizedUser,
    /// Username/password pair rejected at login
    InvalidCredentials,

    // Request Validation
    InvalidUsername,
    InvalidEmail,
    InvalidPassword,
    InvalidRecipe,
    InvalidRecipeId,
    InvalidPagination,
    /// General validation error
    ValidationError,
    /// Malformed request body or query
    BadRequest,

    // Resource Not Found
    AuthorNotFound,
    RecipeNotFound,
    NotFound,

    // Database Constraint Violations
    /// Duplicate username or email
    UniqueViolation,
    /// Reference to a missing author, or author still referenced by recipes
    FkViolation,

    // System Errors
    DbError,
    DbUnavailable,
    DbTimeout,
    Internal,
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingAuthorization => "MISSING_AUTHORIZATION",
            Self::MalformedAuthorization => "MALFORMED_AUTHORIZATION",
            Self::UnsupportedAuthorizationScheme => "UNSUPPORTED_AUTHORIZATION_SCHEME",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::ExpiredToken => "EXPIRED_TOKEN",
            Self::UnauthorizedUser => "UNAUTHORIZED_USER",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",

            Self::InvalidUsername => "INVALID_USERNAME",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidPassword => "INVALID_PASSWORD",
            Self::InvalidRecipe => "INVALID_RECIPE",
            Self::InvalidRecipeId => "INVALID_RECIPE_ID",
            Self::InvalidPagination => "INVALID_PAGINATION",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::AuthorNotFound => "AUTHOR_NOT_FOUND",
            Self::RecipeNotFound => "RECIPE_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::UniqueViolation => "UNIQUE_VIOLATION",
            Self::FkViolation => "FK_VIOLATION",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
