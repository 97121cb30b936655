//! Author repository functions (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::authors_sea::{self as authors_adapter, AuthorCreate, AuthorUpdate};
use crate::entities::authors;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;

/// Author domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub username: String,
    pub hashed_password: String,
    pub email: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub username: String,
    pub hashed_password: String,
    pub email: String,
}

impl From<authors::Model> for Author {
    fn from(model: authors::Model) -> Self {
        Self {
            username: model.username,
            hashed_password: model.hashed_password,
            email: model.email,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

fn author_not_found(username: &str) -> DomainError {
    DomainError::not_found(NotFoundKind::Author, format!("author {username} not found"))
}

pub async fn create_author<C: ConnectionTrait>(
    conn: &C,
    new: NewAuthor,
) -> Result<Author, DomainError> {
    let dto = AuthorCreate::new(new.username, new.hashed_password, new.email);
    let model = authors_adapter::create_author(conn, dto)
        .await
        .map_err(map_db_err)?;
    Ok(Author::from(model))
}

pub async fn find_author<C: ConnectionTrait>(
    conn: &C,
    username: &str,
) -> Result<Author, DomainError> {
    authors_adapter::find_by_username(conn, username)
        .await
        .map_err(map_db_err)?
        .map(Author::from)
        .ok_or_else(|| author_not_found(username))
}

pub async fn list_authors<C: ConnectionTrait>(
    conn: &C,
    limit: u64,
    offset: u64,
) -> Result<Vec<Author>, DomainError> {
    let models = authors_adapter::list_page(conn, limit, offset)
        .await
        .map_err(map_db_err)?;
    Ok(models.into_iter().map(Author::from).collect())
}

pub async fn update_author<C: ConnectionTrait>(
    conn: &C,
    author: Author,
) -> Result<Author, DomainError> {
    let username = author.username.clone();
    let dto = AuthorUpdate {
        username: author.username,
        hashed_password: author.hashed_password,
        email: author.email,
        updated_at: author.updated_at,
    };

    match authors_adapter::update_author(conn, dto).await.map_err(map_db_err) {
        Ok(model) => Ok(Author::from(model)),
        Err(DomainError::NotFound(..)) => Err(author_not_found(&username)),
        Err(e) => Err(e),
    }
}

pub async fn delete_author<C: ConnectionTrait>(
    conn: &C,
    username: &str,
) -> Result<(), DomainError> {
    let removed = authors_adapter::delete_author(conn, username)
        .await
        .map_err(map_db_err)?;
    if removed == 0 {
        return Err(author_not_found(username));
    }
    Ok(())
}
