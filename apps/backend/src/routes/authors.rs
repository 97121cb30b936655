use actix_web::{guard, web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::AppError;
use crate::extractors::{AuthPayload, ValidatedJson, ValidatedQuery};
use crate::middleware::BearerAuth;
use crate::repos::Author;
use crate::services::authors::{self as authors_service, AuthorChanges, CreateAuthor};
use crate::services::validation::validate_page;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateAuthorRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAuthorRequest {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page_id: u64,
    pub page_size: u64,
}

#[derive(Debug, Serialize)]
pub struct CreateAuthorResponse {
    pub username: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Public view of an author; the password hash never leaves the service.
#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    pub username: String,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self {
            username: author.username,
            email: author.email,
            created_at: author.created_at,
            updated_at: author.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub author: AuthorResponse,
}

async fn create_author(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateAuthorRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let author = authors_service::create_author(
        app_state.store.as_ref(),
        CreateAuthor {
            username: body.username,
            password: body.password,
            email: body.email,
        },
    )
    .await?;

    Ok(HttpResponse::Ok().json(CreateAuthorResponse {
        username: author.username,
        created_at: author.created_at,
    }))
}

async fn login(
    app_state: web::Data<AppState>,
    body: ValidatedJson<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let (access_token, author) = authors_service::login(
        app_state.store.as_ref(),
        app_state.token_maker.as_ref(),
        app_state.security.token_duration,
        &body.username,
        &body.password,
    )
    .await?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        access_token,
        author: author.into(),
    }))
}

async fn get_author(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let author = authors_service::get_author(app_state.store.as_ref(), &path).await?;
    Ok(HttpResponse::Ok().json(AuthorResponse::from(author)))
}

async fn list_authors(
    app_state: web::Data<AppState>,
    query: ValidatedQuery<ListQuery>,
) -> Result<HttpResponse, AppError> {
    let page = validate_page(query.page_id, query.page_size)?;
    let authors = authors_service::list_authors(app_state.store.as_ref(), page).await?;
    let body: Vec<AuthorResponse> = authors.into_iter().map(AuthorResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

async fn update_author(
    app_state: web::Data<AppState>,
    payload: AuthPayload,
    body: ValidatedJson<UpdateAuthorRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let author = authors_service::update_author(
        app_state.store.as_ref(),
        &payload,
        AuthorChanges {
            username: body.username,
            email: body.email,
            password: body.password,
        },
    )
    .await?;

    Ok(HttpResponse::Ok().json(AuthorResponse::from(author)))
}

async fn delete_author(
    app_state: web::Data<AppState>,
    payload: AuthPayload,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    authors_service::delete_author(app_state.store.as_ref(), &payload, &path).await?;
    Ok(HttpResponse::Ok().json("ok"))
}

/// Reads and creation are public; PATCH and DELETE go through [`BearerAuth`].
///
/// Guarded resources are registered ahead of the public ones on the same
/// path, so a method that fails the guard falls through.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/login")
            .guard(guard::Post())
            .route(web::post().to(login)),
    )
    .service(
        web::resource("")
            .guard(guard::Patch())
            .wrap(BearerAuth)
            .route(web::patch().to(update_author)),
    )
    .service(
        web::resource("")
            .route(web::post().to(create_author))
            .route(web::get().to(list_authors)),
    )
    .service(
        web::resource("/{username}")
            .guard(guard::Delete())
            .wrap(BearerAuth)
            .route(web::delete().to(delete_author)),
    )
    .service(web::resource("/{username}").route(web::get().to(get_author)));
}
