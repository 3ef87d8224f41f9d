//! Domain entities and ports.
//!
//! Purpose: define the strongly typed entities handled by the API together
//! with the persistence ports adapters implement. Types are plain data; the
//! serde contract (camelCase wire names, string identifiers) is documented on
//! each type's Rustdoc.
//!
//! Public surface:
//! - `Recipe` / `RecipeDraft` / `RecipeId` — recipe aggregate.
//! - `CookLog` / `CookLogDraft` / `CookLogId` — cook log aggregate.
//! - `Error` / `ErrorCode` — transport-agnostic error payload.
//! - `ports` — repository traits and their adapters' error enums.

pub mod cook_log;
pub mod error;
pub mod ports;
pub mod recipe;

pub use self::cook_log::{CookLog, CookLogDraft, CookLogId, InvalidCookLogId};
pub use self::error::{Error, ErrorCode};
pub use self::recipe::{InvalidRecipeId, Recipe, RecipeDraft, RecipeId};
