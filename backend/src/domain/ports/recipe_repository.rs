//! Port abstraction for recipe persistence adapters and their errors.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::{Recipe, RecipeDraft, RecipeId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by recipe repository adapters.
    pub enum RecipePersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "recipe repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "recipe repository query failed: {message}",
    }
}

/// Port for recipe CRUD against a backing store.
///
/// Absence is explicit: lookups, updates, and deletes of an unknown id
/// resolve to `None` rather than raising an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Persist a new recipe and return it with its generated id.
    async fn insert(&self, draft: RecipeDraft) -> Result<Recipe, RecipePersistenceError>;

    /// Return every persisted recipe in storage order.
    async fn list(&self) -> Result<Vec<Recipe>, RecipePersistenceError>;

    /// Fetch a recipe by identifier.
    async fn find_by_id(&self, id: &RecipeId)
        -> Result<Option<Recipe>, RecipePersistenceError>;

    /// Replace the mutable fields of the recipe matching `id`, leaving the
    /// id itself unchanged.
    async fn update(
        &self,
        id: &RecipeId,
        draft: RecipeDraft,
    ) -> Result<Option<Recipe>, RecipePersistenceError>;

    /// Remove the recipe matching `id`, returning its pre-deletion snapshot.
    async fn delete(&self, id: &RecipeId) -> Result<Option<Recipe>, RecipePersistenceError>;
}

/// In-memory adapter backing tests and database-less development runs.
///
/// Rows live in insertion order so `list` mirrors a table's storage order.
#[derive(Debug, Default)]
pub struct InMemoryRecipeRepository {
    rows: Mutex<Vec<Recipe>>,
}

impl InMemoryRecipeRepository {
    fn rows(&self) -> Result<MutexGuard<'_, Vec<Recipe>>, RecipePersistenceError> {
        self.rows
            .lock()
            .map_err(|_| RecipePersistenceError::query("recipe store lock poisoned"))
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeRepository {
    async fn insert(&self, draft: RecipeDraft) -> Result<Recipe, RecipePersistenceError> {
        let recipe = Recipe::from_draft(RecipeId::random(), draft);
        self.rows()?.push(recipe.clone());
        Ok(recipe)
    }

    async fn list(&self) -> Result<Vec<Recipe>, RecipePersistenceError> {
        Ok(self.rows()?.clone())
    }

    async fn find_by_id(
        &self,
        id: &RecipeId,
    ) -> Result<Option<Recipe>, RecipePersistenceError> {
        Ok(self.rows()?.iter().find(|row| row.id == *id).cloned())
    }

    async fn update(
        &self,
        id: &RecipeId,
        draft: RecipeDraft,
    ) -> Result<Option<Recipe>, RecipePersistenceError> {
        let mut rows = self.rows()?;
        Ok(rows.iter_mut().find(|row| row.id == *id).map(|row| {
            row.name = draft.name;
            row.directions = draft.directions;
            row.clone()
        }))
    }

    async fn delete(&self, id: &RecipeId) -> Result<Option<Recipe>, RecipePersistenceError> {
        let mut rows = self.rows()?;
        let position = rows.iter().position(|row| row.id == *id);
        Ok(position.map(|index| rows.remove(index)))
    }
}
