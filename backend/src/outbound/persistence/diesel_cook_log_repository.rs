//! PostgreSQL-backed `CookLogRepository` implementation using Diesel.
//!
//! Stores every caller-supplied field verbatim. `recipe_id` is written as
//! plain text with no lookup against the recipes table.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CookLogPersistenceError, CookLogRepository};
use crate::domain::{CookLog, CookLogDraft, CookLogId};

use super::diesel_error_mapping::{diesel_error_to_port, pool_error_to_port};
use super::models::{CookLogChangeset, CookLogRow, NewCookLogRow};
use super::pool::{DbPool, PoolError};
use super::schema::cook_logs;

/// Diesel-backed implementation of the cook log repository port.
#[derive(Clone)]
pub struct DieselCookLogRepository {
    pool: DbPool,
}

impl DieselCookLogRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CookLogPersistenceError {
    pool_error_to_port(error, CookLogPersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> CookLogPersistenceError {
    diesel_error_to_port(
        error,
        CookLogPersistenceError::query,
        CookLogPersistenceError::connection,
    )
}

fn row_to_cook_log(row: CookLogRow) -> CookLog {
    let CookLogRow {
        id,
        recipe_id,
        date_of_event,
        notes,
        rating,
    } = row;
    CookLog {
        id: CookLogId::from(id),
        recipe_id,
        date_of_event,
        notes,
        rating,
    }
}

#[async_trait]
impl CookLogRepository for DieselCookLogRepository {
    async fn insert(&self, draft: CookLogDraft) -> Result<CookLog, CookLogPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewCookLogRow {
            id: *CookLogId::random().as_uuid(),
            recipe_id: &draft.recipe_id,
            date_of_event: &draft.date_of_event,
            notes: &draft.notes,
            rating: &draft.rating,
        };

        diesel::insert_into(cook_logs::table)
            .values(&new_row)
            .returning(CookLogRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(row_to_cook_log)
            .map_err(map_diesel_error)
    }

    async fn list(&self) -> Result<Vec<CookLog>, CookLogPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CookLogRow> = cook_logs::table
            .select(CookLogRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_cook_log).collect())
    }

    async fn find_by_id(
        &self,
        id: &CookLogId,
    ) -> Result<Option<CookLog>, CookLogPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = cook_logs::table
            .find(*id.as_uuid())
            .select(CookLogRow::as_select())
            .first::<CookLogRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_cook_log))
    }

    async fn update(
        &self,
        id: &CookLogId,
        draft: CookLogDraft,
    ) -> Result<Option<CookLog>, CookLogPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changeset = CookLogChangeset {
            recipe_id: &draft.recipe_id,
            date_of_event: &draft.date_of_event,
            notes: &draft.notes,
            rating: &draft.rating,
        };

        let row = diesel::update(cook_logs::table.find(*id.as_uuid()))
            .set(&changeset)
            .returning(CookLogRow::as_returning())
            .get_result::<CookLogRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_cook_log))
    }

    async fn delete(&self, id: &CookLogId) -> Result<Option<CookLog>, CookLogPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::delete(cook_logs::table.find(*id.as_uuid()))
            .returning(CookLogRow::as_returning())
            .get_result::<CookLogRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_cook_log))
    }
}
