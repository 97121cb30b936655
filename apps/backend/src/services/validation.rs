//! Input rules shared by the author and recipe handlers.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::Page;

pub const PASSWORD_MIN_LEN: usize = 6;
pub const PASSWORD_MAX_LEN: usize = 24;
pub const PAGE_SIZE_MIN: u64 = 5;
pub const PAGE_SIZE_MAX: u64 = 10;

#[allow(clippy::unwrap_used)]
static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Non-empty, ASCII letters and digits only.
pub fn validate_username(username: &str) -> Result<(), AppError> {
    if username.is_empty() || !username.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::invalid(
            ErrorCode::InvalidUsername,
            "username must be a non-empty alphanumeric string",
        ));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), AppError> {
    if !EMAIL.is_match(email) {
        return Err(AppError::invalid(ErrorCode::InvalidEmail, "Invalid email"));
    }
    Ok(())
}

/// Password on update. Length in characters, not bytes.
pub fn validate_password(password: &str) -> Result<(), AppError> {
    let len = password.chars().count();
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
        return Err(AppError::invalid(
            ErrorCode::InvalidPassword,
            format!(
                "Invalid password: must be between {PASSWORD_MIN_LEN} and {PASSWORD_MAX_LEN} characters"
            ),
        ));
    }
    Ok(())
}

/// Registration and login only enforce the lower bound.
pub fn validate_password_min_len(password: &str) -> Result<(), AppError> {
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(AppError::invalid(
            ErrorCode::InvalidPassword,
            format!("password must be at least {PASSWORD_MIN_LEN} characters"),
        ));
    }
    Ok(())
}

pub fn validate_page(page_id: u64, page_size: u64) -> Result<Page, AppError> {
    if page_id < 1 {
        return Err(AppError::invalid(
            ErrorCode::InvalidPagination,
            "page_id must be at least 1",
        ));
    }
    if !(PAGE_SIZE_MIN..=PAGE_SIZE_MAX).contains(&page_size) {
        return Err(AppError::invalid(
            ErrorCode::InvalidPagination,
            format!("page_size must be between {PAGE_SIZE_MIN} and {PAGE_SIZE_MAX}"),
        ));
    }
    Ok(Page::new(page_id, page_size))
}

pub fn validate_recipe_id(id: i64) -> Result<(), AppError> {
    if id < 1 {
        return Err(AppError::invalid(
            ErrorCode::InvalidRecipeId,
            "recipe id must be at least 1",
        ));
    }
    Ok(())
}

pub fn validate_recipe_contents(ingredients: &[String], steps: &[String]) -> Result<(), AppError> {
    if ingredients.is_empty() || steps.is_empty() {
        return Err(AppError::invalid(
            ErrorCode::InvalidRecipe,
            "There should be at least one step and one ingredient per recipe",
        ));
    }
    Ok(())
}
