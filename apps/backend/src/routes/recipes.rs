use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::AppError;
use crate::extractors::{AuthPayload, ValidatedJson, ValidatedQuery};
use crate::middleware::BearerAuth;
use crate::repos::Recipe;
use crate::services::recipes::{self as recipes_service, RecipeChanges};
use crate::services::validation::validate_page;
use crate::state::app_state::AppState;

/// The author is taken from the token, never from the body.
#[derive(Debug, Deserialize)]
pub struct CreateRecipeRequest {
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRecipeRequest {
    pub id: i64,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page_id: u64,
    pub page_size: u64,
}

#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    pub id: i64,
    pub author: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            author: recipe.author,
            ingredients: recipe.ingredients,
            steps: recipe.steps,
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
        }
    }
}

async fn create_recipe(
    app_state: web::Data<AppState>,
    payload: AuthPayload,
    body: ValidatedJson<CreateRecipeRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let recipe = recipes_service::create_recipe(
        app_state.store.as_ref(),
        &payload,
        body.ingredients,
        body.steps,
    )
    .await?;
    Ok(HttpResponse::Ok().json(RecipeResponse::from(recipe)))
}

async fn get_recipe(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let recipe = recipes_service::get_recipe(app_state.store.as_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(RecipeResponse::from(recipe)))
}

async fn list_recipes(
    app_state: web::Data<AppState>,
    query: ValidatedQuery<ListQuery>,
) -> Result<HttpResponse, AppError> {
    let page = validate_page(query.page_id, query.page_size)?;
    let recipes = recipes_service::list_recipes(app_state.store.as_ref(), page).await?;
    let body: Vec<RecipeResponse> = recipes.into_iter().map(RecipeResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

async fn update_recipe(
    app_state: web::Data<AppState>,
    payload: AuthPayload,
    body: ValidatedJson<UpdateRecipeRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let recipe = recipes_service::update_recipe(
        app_state.store.as_ref(),
        &payload,
        RecipeChanges {
            id: body.id,
            ingredients: body.ingredients,
            steps: body.steps,
        },
    )
    .await?;
    Ok(HttpResponse::Ok().json(RecipeResponse::from(recipe)))
}

async fn delete_recipe(
    app_state: web::Data<AppState>,
    payload: AuthPayload,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    recipes_service::delete_recipe(app_state.store.as_ref(), &payload, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json("ok"))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .wrap(BearerAuth)
            .route(web::post().to(create_recipe))
            .route(web::get().to(list_recipes))
            .route(web::patch().to(update_recipe)),
    )
    .service(
        web::resource("/{id}")
            .wrap(BearerAuth)
            .route(web::get().to(get_recipe))
            .route(web::delete().to(delete_recipe)),
    );
}
