//! PostgreSQL-backed `RecipeRepository` implementation using Diesel.
//!
//! Insert, update, and delete all use `RETURNING` so the caller gets the
//! row exactly as the database persisted it; for delete that is the
//! pre-deletion snapshot.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RecipePersistenceError, RecipeRepository};
use crate::domain::{Recipe, RecipeDraft, RecipeId};

use super::diesel_error_mapping::{diesel_error_to_port, pool_error_to_port};
use super::models::{NewRecipeRow, RecipeChangeset, RecipeRow};
use super::pool::{DbPool, PoolError};
use super::schema::recipes;

/// Diesel-backed implementation of the recipe repository port.
#[derive(Clone)]
pub struct DieselRecipeRepository {
    pool: DbPool,
}

impl DieselRecipeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> RecipePersistenceError {
    pool_error_to_port(error, RecipePersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> RecipePersistenceError {
    diesel_error_to_port(
        error,
        RecipePersistenceError::query,
        RecipePersistenceError::connection,
    )
}

fn row_to_recipe(row: RecipeRow) -> Recipe {
    let RecipeRow {
        id,
        name,
        directions,
    } = row;
    Recipe {
        id: RecipeId::from(id),
        name,
        directions,
    }
}

#[async_trait]
impl RecipeRepository for DieselRecipeRepository {
    async fn insert(&self, draft: RecipeDraft) -> Result<Recipe, RecipePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewRecipeRow {
            id: *RecipeId::random().as_uuid(),
            name: &draft.name,
            directions: &draft.directions,
        };

        diesel::insert_into(recipes::table)
            .values(&new_row)
            .returning(RecipeRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(row_to_recipe)
            .map_err(map_diesel_error)
    }

    async fn list(&self) -> Result<Vec<Recipe>, RecipePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<RecipeRow> = recipes::table
            .select(RecipeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_recipe).collect())
    }

    async fn find_by_id(
        &self,
        id: &RecipeId,
    ) -> Result<Option<Recipe>, RecipePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = recipes::table
            .find(*id.as_uuid())
            .select(RecipeRow::as_select())
            .first::<RecipeRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_recipe))
    }

    async fn update(
        &self,
        id: &RecipeId,
        draft: RecipeDraft,
    ) -> Result<Option<Recipe>, RecipePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changeset = RecipeChangeset {
            name: &draft.name,
            directions: &draft.directions,
        };

        let row = diesel::update(recipes::table.find(*id.as_uuid()))
            .set(&changeset)
            .returning(RecipeRow::as_returning())
            .get_result::<RecipeRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_recipe))
    }

    async fn delete(&self, id: &RecipeId) -> Result<Option<Recipe>, RecipePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::delete(recipes::table.find(*id.as_uuid()))
            .returning(RecipeRow::as_returning())
            .get_result::<RecipeRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_recipe))
    }
}

#[cfg(test)]
mod tests {
    //! Error mapping and row conversion coverage; queries themselves are
    //! exercised against a live database in deployment environments.

    use rstest::rstest;
    use uuid::Uuid;

    use super::*;

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let repo_err = map_pool_error(PoolError::checkout("connection refused"));

        assert!(matches!(
            repo_err,
            RecipePersistenceError::Connection { .. }
        ));
        assert!(repo_err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn diesel_not_found_maps_to_query_error() {
        let repo_err = map_diesel_error(diesel::result::Error::NotFound);

        assert!(matches!(repo_err, RecipePersistenceError::Query { .. }));
        assert!(repo_err.to_string().contains("record not found"));
    }

    #[rstest]
    fn row_conversion_preserves_direction_order() {
        let id = Uuid::new_v4();
        let recipe = row_to_recipe(RecipeRow {
            id,
            name: "cookies".into(),
            directions: vec!["mix".into(), "bake".into(), "cool".into()],
        });

        assert_eq!(recipe.id, RecipeId::from(id));
        assert_eq!(recipe.directions, vec!["mix", "bake", "cool"]);
    }
}
