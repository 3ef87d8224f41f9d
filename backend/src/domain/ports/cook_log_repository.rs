//! Port abstraction for cook log persistence adapters and their errors.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::{CookLog, CookLogDraft, CookLogId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by cook log repository adapters.
    pub enum CookLogPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "cook log repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "cook log repository query failed: {message}",
    }
}

/// Port for cook log CRUD against a backing store.
///
/// Same contract as the recipe port: absence resolves to `None`, and the
/// `recipe_id` text in a draft is persisted without cross-entity checks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CookLogRepository: Send + Sync {
    /// Persist a new cook log and return it with its generated id.
    async fn insert(&self, draft: CookLogDraft) -> Result<CookLog, CookLogPersistenceError>;

    /// Return every persisted cook log in storage order.
    async fn list(&self) -> Result<Vec<CookLog>, CookLogPersistenceError>;

    /// Fetch a cook log by identifier.
    async fn find_by_id(
        &self,
        id: &CookLogId,
    ) -> Result<Option<CookLog>, CookLogPersistenceError>;

    /// Replace the mutable fields of the cook log matching `id`.
    async fn update(
        &self,
        id: &CookLogId,
        draft: CookLogDraft,
    ) -> Result<Option<CookLog>, CookLogPersistenceError>;

    /// Remove the cook log matching `id`, returning its pre-deletion
    /// snapshot.
    async fn delete(&self, id: &CookLogId) -> Result<Option<CookLog>, CookLogPersistenceError>;
}

/// In-memory adapter backing tests and database-less development runs.
#[derive(Debug, Default)]
pub struct InMemoryCookLogRepository {
    rows: Mutex<Vec<CookLog>>,
}

impl InMemoryCookLogRepository {
    fn rows(&self) -> Result<MutexGuard<'_, Vec<CookLog>>, CookLogPersistenceError> {
        self.rows
            .lock()
            .map_err(|_| CookLogPersistenceError::query("cook log store lock poisoned"))
    }
}

#[async_trait]
impl CookLogRepository for InMemoryCookLogRepository {
    async fn insert(&self, draft: CookLogDraft) -> Result<CookLog, CookLogPersistenceError> {
        let log = CookLog::from_draft(CookLogId::random(), draft);
        self.rows()?.push(log.clone());
        Ok(log)
    }

    async fn list(&self) -> Result<Vec<CookLog>, CookLogPersistenceError> {
        Ok(self.rows()?.clone())
    }

    async fn find_by_id(
        &self,
        id: &CookLogId,
    ) -> Result<Option<CookLog>, CookLogPersistenceError> {
        Ok(self.rows()?.iter().find(|row| row.id == *id).cloned())
    }

    async fn update(
        &self,
        id: &CookLogId,
        draft: CookLogDraft,
    ) -> Result<Option<CookLog>, CookLogPersistenceError> {
        let mut rows = self.rows()?;
        Ok(rows.iter_mut().find(|row| row.id == *id).map(|row| {
            row.recipe_id = draft.recipe_id;
            row.date_of_event = draft.date_of_event;
            row.notes = draft.notes;
            row.rating = draft.rating;
            row.clone()
        }))
    }

    async fn delete(&self, id: &CookLogId) -> Result<Option<CookLog>, CookLogPersistenceError> {
        let mut rows = self.rows()?;
        let position = rows.iter().position(|row| row.id == *id);
        Ok(position.map(|index| rows.remove(index)))
    }
}
