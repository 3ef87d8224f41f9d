//! PostgreSQL persistence adapters built on Diesel.

mod diesel_cook_log_repository;
mod diesel_error_mapping;
mod diesel_recipe_repository;
mod models;
mod pool;
pub(crate) mod schema;

pub use diesel_cook_log_repository::DieselCookLogRepository;
pub use diesel_recipe_repository::DieselRecipeRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
