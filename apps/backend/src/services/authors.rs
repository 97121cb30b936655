use time::OffsetDateTime;
use tracing::info;

use crate::auth::{check_password, hash_password, Payload, PasswordError, TokenMaker};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::logging::security;
use crate::repos::{Author, NewAuthor, Page, Store};
use crate::services::ownership::ensure_owner;
use crate::services::validation::{
    validate_email, validate_password, validate_password_min_len, validate_username,
};

#[derive(Debug, Clone)]
pub struct CreateAuthor {
    pub username: String,
    pub password: String,
    pub email: String,
}

/// Partial update; blank fields (after trimming) are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct AuthorChanges {
    pub username: String,
    pub email: Option<String>,
    pub password: Option<String>,
}

fn unique_conflict(e: DomainError, detail: &str) -> AppError {
    match e {
        DomainError::Conflict(ConflictKind::Unique, _) => {
            AppError::forbidden(ErrorCode::UniqueViolation, detail)
        }
        other => AppError::from(other),
    }
}

pub async fn create_author(store: &dyn Store, input: CreateAuthor) -> Result<Author, AppError> {
    validate_username(&input.username)?;
    validate_password_min_len(&input.password)?;
    validate_email(&input.email)?;

    let hashed_password = hash_password(&input.password)?;
    let author = store
        .create_author(NewAuthor {
            username: input.username,
            hashed_password,
            email: input.email,
        })
        .await
        .map_err(|e| unique_conflict(e, "username or email already registered"))?;

    info!(username = %author.username, email = %Redacted(&author.email), "Author created");
    Ok(author)
}

/// Verify credentials and issue an access token for `duration`.
pub async fn login(
    store: &dyn Store,
    token_maker: &dyn TokenMaker,
    duration: time::Duration,
    username: &str,
    password: &str,
) -> Result<(String, Author), AppError> {
    validate_username(username)?;
    validate_password_min_len(password)?;

    let author = match store.get_author(username).await {
        Ok(author) => author,
        Err(e @ DomainError::NotFound(..)) => {
            security::login_failed("unknown_author", username);
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    if let Err(e) = check_password(password, &author.hashed_password) {
        if matches!(e, PasswordError::Mismatch) {
            security::login_failed("password_mismatch", username);
        }
        return Err(e.into());
    }

    let token = token_maker.create_token(&author.username, duration)?;
    Ok((token, author))
}

pub async fn get_author(store: &dyn Store, username: &str) -> Result<Author, AppError> {
    validate_username(username)?;
    Ok(store.get_author(username).await?)
}

pub async fn list_authors(store: &dyn Store, page: Page) -> Result<Vec<Author>, AppError> {
    Ok(store.list_authors(page).await?)
}

/// The author is fetched first (404 when absent), then ownership is checked.
pub async fn update_author(
    store: &dyn Store,
    payload: &Payload,
    changes: AuthorChanges,
) -> Result<Author, AppError> {
    validate_username(&changes.username)?;

    let mut author = store.get_author(&changes.username).await?;
    ensure_owner(payload, &author.username, &format!("author {}", author.username))?;

    let now = OffsetDateTime::now_utc();
    let email = changes.email.as_deref().map(str::trim).unwrap_or_default();
    let password = changes.password.as_deref().map(str::trim).unwrap_or_default();

    if !email.is_empty() {
        validate_email(email)?;
        author.email = email.to_string();
        author.updated_at = now;
    }
    if !password.is_empty() {
        validate_password(password)?;
        author.hashed_password = hash_password(password)?;
        author.updated_at = now;
    }

    store
        .update_author(author)
        .await
        .map_err(|e| unique_conflict(e, "email already registered"))
}

pub async fn delete_author(
    store: &dyn Store,
    payload: &Payload,
    username: &str,
) -> Result<(), AppError> {
    validate_username(username)?;
    ensure_owner(payload, username, &format!("author {username}"))?;

    store.delete_author(username).await.map_err(|e| match e {
        DomainError::Conflict(ConflictKind::ForeignKey, _) => AppError::forbidden(
            ErrorCode::FkViolation,
            "author still owns recipes",
        ),
        other => AppError::from(other),
    })
}
