use time::OffsetDateTime;

use crate::auth::Payload;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::errors::ErrorCode;
use crate::repos::{NewRecipe, Page, Recipe, Store};
use crate::services::ownership::ensure_owner;
use crate::services::validation::{validate_recipe_contents, validate_recipe_id};

/// Replacement lists; an empty list leaves the stored one in place.
#[derive(Debug, Clone, Default)]
pub struct RecipeChanges {
    pub id: i64,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

/// The recipe is owned by the token subject.
pub async fn create_recipe(
    store: &dyn Store,
    payload: &Payload,
    ingredients: Vec<String>,
    steps: Vec<String>,
) -> Result<Recipe, AppError> {
    validate_recipe_contents(&ingredients, &steps)?;

    store
        .create_recipe(NewRecipe {
            author: payload.username.clone(),
            ingredients,
            steps,
        })
        .await
        .map_err(|e| match e {
            DomainError::Conflict(ConflictKind::ForeignKey, _) => AppError::forbidden(
                ErrorCode::FkViolation,
                format!("author {} does not exist", payload.username),
            ),
            other => AppError::from(other),
        })
}

pub async fn get_recipe(store: &dyn Store, id: i64) -> Result<Recipe, AppError> {
    validate_recipe_id(id)?;
    Ok(store.get_recipe(id).await?)
}

pub async fn list_recipes(store: &dyn Store, page: Page) -> Result<Vec<Recipe>, AppError> {
    Ok(store.list_recipes(page).await?)
}

pub async fn update_recipe(
    store: &dyn Store,
    payload: &Payload,
    changes: RecipeChanges,
) -> Result<Recipe, AppError> {
    validate_recipe_id(changes.id)?;

    let mut recipe = store.get_recipe(changes.id).await?;
    ensure_owner(payload, &recipe.author, &format!("recipe {}", recipe.id))?;

    let now = OffsetDateTime::now_utc();
    if !changes.steps.is_empty() {
        recipe.steps = changes.steps;
        recipe.updated_at = now;
    }
    if !changes.ingredients.is_empty() {
        recipe.ingredients = changes.ingredients;
        recipe.updated_at = now;
    }

    Ok(store.update_recipe(recipe).await?)
}

pub async fn delete_recipe(store: &dyn Store, payload: &Payload, id: i64) -> Result<(), AppError> {
    validate_recipe_id(id)?;

    let recipe = store.get_recipe(id).await?;
    ensure_owner(payload, &recipe.author, &format!("recipe {id}"))?;

    Ok(store.delete_recipe(id).await?)
}
