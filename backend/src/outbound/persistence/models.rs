//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Audit columns (`created_at`,
//! `updated_at`) stay in SQL; the read structs select only the columns the
//! domain cares about.

use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{cook_logs, recipes};

/// Row struct for reading from the recipes table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RecipeRow {
    pub id: Uuid,
    pub name: String,
    pub directions: Vec<String>,
}

/// Insertable struct for creating new recipe records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = recipes)]
pub(crate) struct NewRecipeRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub directions: &'a [String],
}

/// Changeset struct for replacing a recipe's mutable fields.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = recipes)]
pub(crate) struct RecipeChangeset<'a> {
    pub name: &'a str,
    pub directions: &'a [String],
}

/// Row struct for reading from the cook_logs table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = cook_logs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CookLogRow {
    pub id: Uuid,
    pub recipe_id: String,
    pub date_of_event: String,
    pub notes: String,
    pub rating: String,
}

/// Insertable struct for creating new cook log records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = cook_logs)]
pub(crate) struct NewCookLogRow<'a> {
    pub id: Uuid,
    pub recipe_id: &'a str,
    pub date_of_event: &'a str,
    pub notes: &'a str,
    pub rating: &'a str,
}

/// Changeset struct for replacing a cook log's mutable fields.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = cook_logs)]
pub(crate) struct CookLogChangeset<'a> {
    pub recipe_id: &'a str,
    pub date_of_event: &'a str,
    pub notes: &'a str,
    pub rating: &'a str,
}
