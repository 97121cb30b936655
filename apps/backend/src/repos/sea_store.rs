use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use super::{authors, recipes, Author, NewAuthor, NewRecipe, Page, Recipe, Store};
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

/// [`Store`] backed by a sea-orm connection pool.
#[derive(Debug, Clone)]
pub struct SeaStore {
    conn: DatabaseConnection,
}

impl SeaStore {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub fn conn(&self) -> &DatabaseConnection {
        &self.conn
    }
}

#[async_trait]
impl Store for SeaStore {
    async fn create_author(&self, new: NewAuthor) -> Result<Author, DomainError> {
        authors::create_author(&self.conn, new).await
    }

    async fn get_author(&self, username: &str) -> Result<Author, DomainError> {
        authors::find_author(&self.conn, username).await
    }

    async fn list_authors(&self, page: Page) -> Result<Vec<Author>, DomainError> {
        authors::list_authors(&self.conn, page.limit(), page.offset()).await
    }

    async fn update_author(&self, author: Author) -> Result<Author, DomainError> {
        authors::update_author(&self.conn, author).await
    }

    async fn delete_author(&self, username: &str) -> Result<(), DomainError> {
        authors::delete_author(&self.conn, username).await
    }

    async fn create_recipe(&self, new: NewRecipe) -> Result<Recipe, DomainError> {
        recipes::create_recipe(&self.conn, new).await
    }

    async fn get_recipe(&self, id: i64) -> Result<Recipe, DomainError> {
        recipes::find_recipe(&self.conn, id).await
    }

    async fn list_recipes(&self, page: Page) -> Result<Vec<Recipe>, DomainError> {
        recipes::list_recipes(&self.conn, page.limit(), page.offset()).await
    }

    async fn update_recipe(&self, recipe: Recipe) -> Result<Recipe, DomainError> {
        recipes::update_recipe(&self.conn, recipe).await
    }

    async fn delete_recipe(&self, id: i64) -> Result<(), DomainError> {
        recipes::delete_recipe(&self.conn, id).await
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.conn.ping().await.map_err(map_db_err)
    }
}
