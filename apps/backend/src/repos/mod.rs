//! Persistence boundary.
//!
//! Handlers and services talk to a [`Store`]; [`SeaStore`] backs it with
//! sea-orm. Every method reports failures as `DomainError`, with missing
//! rows as `NotFound` and constraint violations as `Conflict`.

use async_trait::async_trait;

use crate::errors::domain::DomainError;

pub mod authors;
pub mod recipes;
pub mod sea_store;

pub use authors::{Author, NewAuthor};
pub use recipes::{NewRecipe, Recipe};
pub use sea_store::SeaStore;

/// One-based page window for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page_id: u64,
    pub page_size: u64,
}

impl Page {
    pub fn new(page_id: u64, page_size: u64) -> Self {
        Self { page_id, page_size }
    }

    pub fn limit(&self) -> u64 {
        self.page_size
    }

    pub fn offset(&self) -> u64 {
        self.page_id.saturating_sub(1).saturating_mul(self.page_size)
    }
}

#[async_trait]
pub trait Store: Send + Sync {
    async fn create_author(&self, new: NewAuthor) -> Result<Author, DomainError>;
    async fn get_author(&self, username: &str) -> Result<Author, DomainError>;
    async fn list_authors(&self, page: Page) -> Result<Vec<Author>, DomainError>;
    /// Persists email, hashed password and `updated_at` of `author`.
    async fn update_author(&self, author: Author) -> Result<Author, DomainError>;
    async fn delete_author(&self, username: &str) -> Result<(), DomainError>;

    async fn create_recipe(&self, new: NewRecipe) -> Result<Recipe, DomainError>;
    async fn get_recipe(&self, id: i64) -> Result<Recipe, DomainError>;
    async fn list_recipes(&self, page: Page) -> Result<Vec<Recipe>, DomainError>;
    /// Persists ingredients, steps and `updated_at` of `recipe`.
    async fn update_recipe(&self, recipe: Recipe) -> Result<Recipe, DomainError>;
    async fn delete_recipe(&self, id: i64) -> Result<(), DomainError>;

    /// Round-trip to the backing database.
    async fn ping(&self) -> Result<(), DomainError>;
}
