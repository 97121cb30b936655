//! In-memory [`Store`] that records every call, for handler tests.
//!
//! Enforces the same constraints the database does: unique username and
//! email, recipe author must exist, authors owning recipes cannot be deleted.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use recipes_backend::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind,
};
use recipes_backend::repos::{Author, NewAuthor, NewRecipe, Page, Recipe, Store};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    CreateAuthor(String),
    GetAuthor(String),
    ListAuthors(Page),
    UpdateAuthor(Author),
    DeleteAuthor(String),
    CreateRecipe(NewRecipe),
    GetRecipe(i64),
    ListRecipes(Page),
    UpdateRecipe(Recipe),
    DeleteRecipe(i64),
    Ping,
}

#[derive(Default)]
struct Inner {
    authors: BTreeMap<String, Author>,
    recipes: BTreeMap<i64, Recipe>,
    next_recipe_id: i64,
    calls: Vec<StoreCall>,
    unavailable: bool,
}

#[derive(Default)]
pub struct RecordingStore {
    inner: Mutex<Inner>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the database were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.inner.lock().unwrap().unavailable = unavailable;
    }

    /// Insert an author directly, bypassing call recording.
    pub fn seed_author(&self, username: &str, hashed_password: &str, email: &str) -> Author {
        let now = OffsetDateTime::now_utc();
        let author = Author {
            username: username.to_string(),
            hashed_password: hashed_password.to_string(),
            email: email.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.inner
            .lock()
            .unwrap()
            .authors
            .insert(username.to_string(), author.clone());
        author
    }

    /// Insert a recipe directly, bypassing call recording and constraints.
    pub fn seed_recipe(&self, author: &str, ingredients: &[&str], steps: &[&str]) -> Recipe {
        let mut inner = self.inner.lock().unwrap();
        inner.next_recipe_id += 1;
        let now = OffsetDateTime::now_utc();
        let recipe = Recipe {
            id: inner.next_recipe_id,
            author: author.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            steps: steps.iter().map(|s| s.to_string()).collect(),
            created_at: now,
            updated_at: now,
        };
        inner.recipes.insert(recipe.id, recipe.clone());
        recipe
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.inner.lock().unwrap().calls.clear();
    }

    pub fn recipe_updates(&self) -> Vec<Recipe> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                StoreCall::UpdateRecipe(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    pub fn author_updates(&self) -> Vec<Author> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                StoreCall::UpdateAuthor(a) => Some(a),
                _ => None,
            })
            .collect()
    }

    /// True if any call other than reads was recorded.
    pub fn has_mutations(&self) -> bool {
        self.calls().iter().any(|c| {
            matches!(
                c,
                StoreCall::CreateAuthor(_)
                    | StoreCall::UpdateAuthor(_)
                    | StoreCall::DeleteAuthor(_)
                    | StoreCall::CreateRecipe(_)
                    | StoreCall::UpdateRecipe(_)
                    | StoreCall::DeleteRecipe(_)
            )
        })
    }

    pub fn stored_author(&self, username: &str) -> Option<Author> {
        self.inner.lock().unwrap().authors.get(username).cloned()
    }

    pub fn stored_recipe(&self, id: i64) -> Option<Recipe> {
        self.inner.lock().unwrap().recipes.get(&id).cloned()
    }

    fn record(&self, call: StoreCall) -> Result<std::sync::MutexGuard<'_, Inner>, DomainError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(call);
        if inner.unavailable {
            return Err(DomainError::infra(
                InfraErrorKind::DbUnavailable,
                "Database unavailable",
            ));
        }
        Ok(inner)
    }
}

fn author_not_found(username: &str) -> DomainError {
    DomainError::not_found(NotFoundKind::Author, format!("author {username} not found"))
}

fn recipe_not_found(id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Recipe, format!("recipe {id} not found"))
}

fn window<T: Clone>(items: impl Iterator<Item = T>, page: Page) -> Vec<T> {
    items
        .skip(page.offset() as usize)
        .take(page.limit() as usize)
        .collect()
}

#[async_trait]
impl Store for RecordingStore {
    async fn create_author(&self, new: NewAuthor) -> Result<Author, DomainError> {
        let mut inner = self.record(StoreCall::CreateAuthor(new.username.clone()))?;
        if inner.authors.contains_key(&new.username)
            || inner.authors.values().any(|a| a.email == new.email)
        {
            return Err(DomainError::conflict(
                ConflictKind::Unique,
                "Resource already exists",
            ));
        }
        let now = OffsetDateTime::now_utc();
        let author = Author {
            username: new.username,
            hashed_password: new.hashed_password,
            email: new.email,
            created_at: now,
            updated_at: now,
        };
        inner.authors.insert(author.username.clone(), author.clone());
        Ok(author)
    }

    async fn get_author(&self, username: &str) -> Result<Author, DomainError> {
        let inner = self.record(StoreCall::GetAuthor(username.to_string()))?;
        inner
            .authors
            .get(username)
            .cloned()
            .ok_or_else(|| author_not_found(username))
    }

    async fn list_authors(&self, page: Page) -> Result<Vec<Author>, DomainError> {
        let inner = self.record(StoreCall::ListAuthors(page))?;
        Ok(window(inner.authors.values().cloned(), page))
    }

    async fn update_author(&self, author: Author) -> Result<Author, DomainError> {
        let mut inner = self.record(StoreCall::UpdateAuthor(author.clone()))?;
        if inner
            .authors
            .values()
            .any(|a| a.username != author.username && a.email == author.email)
        {
            return Err(DomainError::conflict(
                ConflictKind::Unique,
                "Resource already exists",
            ));
        }
        match inner.authors.get_mut(&author.username) {
            Some(stored) => {
                stored.email = author.email;
                stored.hashed_password = author.hashed_password;
                stored.updated_at = author.updated_at;
                Ok(stored.clone())
            }
            None => Err(author_not_found(&author.username)),
        }
    }

    async fn delete_author(&self, username: &str) -> Result<(), DomainError> {
        let mut inner = self.record(StoreCall::DeleteAuthor(username.to_string()))?;
        if inner.recipes.values().any(|r| r.author == username) {
            return Err(DomainError::conflict(
                ConflictKind::ForeignKey,
                "Referenced resource is missing or still in use",
            ));
        }
        inner
            .authors
            .remove(username)
            .map(|_| ())
            .ok_or_else(|| author_not_found(username))
    }

    async fn create_recipe(&self, new: NewRecipe) -> Result<Recipe, DomainError> {
        let mut inner = self.record(StoreCall::CreateRecipe(new.clone()))?;
        if !inner.authors.contains_key(&new.author) {
            return Err(DomainError::conflict(
                ConflictKind::ForeignKey,
                "Referenced resource is missing or still in use",
            ));
        }
        inner.next_recipe_id += 1;
        let now = OffsetDateTime::now_utc();
        let recipe = Recipe {
            id: inner.next_recipe_id,
            author: new.author,
            ingredients: new.ingredients,
            steps: new.steps,
            created_at: now,
            updated_at: now,
        };
        inner.recipes.insert(recipe.id, recipe.clone());
        Ok(recipe)
    }

    async fn get_recipe(&self, id: i64) -> Result<Recipe, DomainError> {
        let inner = self.record(StoreCall::GetRecipe(id))?;
        inner
            .recipes
            .get(&id)
            .cloned()
            .ok_or_else(|| recipe_not_found(id))
    }

    async fn list_recipes(&self, page: Page) -> Result<Vec<Recipe>, DomainError> {
        let inner = self.record(StoreCall::ListRecipes(page))?;
        Ok(window(inner.recipes.values().cloned(), page))
    }

    async fn update_recipe(&self, recipe: Recipe) -> Result<Recipe, DomainError> {
        let mut inner = self.record(StoreCall::UpdateRecipe(recipe.clone()))?;
        match inner.recipes.get_mut(&recipe.id) {
            Some(stored) => {
                stored.ingredients = recipe.ingredients;
                stored.steps = recipe.steps;
                stored.updated_at = recipe.updated_at;
                Ok(stored.clone())
            }
            None => Err(recipe_not_found(recipe.id)),
        }
    }

    async fn delete_recipe(&self, id: i64) -> Result<(), DomainError> {
        let mut inner = self.record(StoreCall::DeleteRecipe(id))?;
        inner
            .recipes
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| recipe_not_found(id))
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.record(StoreCall::Ping).map(|_| ())
    }
}
