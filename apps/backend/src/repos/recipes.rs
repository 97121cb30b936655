//! Recipe repository functions (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::recipes_sea::{self as recipes_adapter, RecipeCreate, RecipeUpdate};
use crate::entities::recipes;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;

/// Recipe domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: i64,
    pub author: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub author: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl From<recipes::Model> for Recipe {
    fn from(model: recipes::Model) -> Self {
        Self {
            id: model.id,
            author: model.author,
            ingredients: model.ingredients.0,
            steps: model.steps.0,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

fn recipe_not_found(id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Recipe, format!("recipe {id} not found"))
}

pub async fn create_recipe<C: ConnectionTrait>(
    conn: &C,
    new: NewRecipe,
) -> Result<Recipe, DomainError> {
    let dto = RecipeCreate {
        author: new.author,
        ingredients: new.ingredients,
        steps: new.steps,
    };
    let model = recipes_adapter::create_recipe(conn, dto)
        .await
        .map_err(map_db_err)?;
    Ok(Recipe::from(model))
}

pub async fn find_recipe<C: ConnectionTrait>(conn: &C, id: i64) -> Result<Recipe, DomainError> {
    recipes_adapter::find_by_id(conn, id)
        .await
        .map_err(map_db_err)?
        .map(Recipe::from)
        .ok_or_else(|| recipe_not_found(id))
}

pub async fn list_recipes<C: ConnectionTrait>(
    conn: &C,
    limit: u64,
    offset: u64,
) -> Result<Vec<Recipe>, DomainError> {
    let models = recipes_adapter::list_page(conn, limit, offset)
        .await
        .map_err(map_db_err)?;
    Ok(models.into_iter().map(Recipe::from).collect())
}

pub async fn update_recipe<C: ConnectionTrait>(
    conn: &C,
    recipe: Recipe,
) -> Result<Recipe, DomainError> {
    let id = recipe.id;
    let dto = RecipeUpdate {
        id,
        ingredients: recipe.ingredients,
        steps: recipe.steps,
        updated_at: recipe.updated_at,
    };

    match recipes_adapter::update_recipe(conn, dto).await.map_err(map_db_err) {
        Ok(model) => Ok(Recipe::from(model)),
        Err(DomainError::NotFound(..)) => Err(recipe_not_found(id)),
        Err(e) => Err(e),
    }
}

pub async fn delete_recipe<C: ConnectionTrait>(conn: &C, id: i64) -> Result<(), DomainError> {
    let removed = recipes_adapter::delete_recipe(conn, id)
        .await
        .map_err(map_db_err)?;
    if removed == 0 {
        return Err(recipe_not_found(id));
    }
    Ok(())
}
