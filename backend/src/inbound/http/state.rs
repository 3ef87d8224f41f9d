//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CookLogRepository, InMemoryCookLogRepository, InMemoryRecipeRepository, RecipeRepository,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Recipe persistence port.
    pub recipes: Arc<dyn RecipeRepository>,
    /// Cook log persistence port.
    pub cook_logs: Arc<dyn CookLogRepository>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(recipes: Arc<dyn RecipeRepository>, cook_logs: Arc<dyn CookLogRepository>) -> Self {
        Self { recipes, cook_logs }
    }

    /// State backed by in-memory adapters, for tests and database-less runs.
    ///
    /// # Examples
    /// ```
    /// use actix_web::web;
    /// use backend::inbound::http::state::HttpState;
    ///
    /// let state = web::Data::new(HttpState::in_memory());
    /// let _recipes = state.recipes.clone();
    /// ```
    pub fn in_memory() -> Self {
        Self {
            recipes: Arc::new(InMemoryRecipeRepository::default()),
            cook_logs: Arc::new(InMemoryCookLogRepository::default()),
        }
    }
}
