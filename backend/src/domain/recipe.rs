//! Recipe entity and its identifier.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Error returned when a recipe identifier fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("recipe id must be a valid UUID")]
pub struct InvalidRecipeId;

/// Stable recipe identifier, generated at insert time and immutable
/// thereafter.
///
/// Serialised as its canonical string form so clients always see string ids
/// regardless of the storage representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecipeId(Uuid);

impl RecipeId {
    /// Parse an identifier from its string form.
    pub fn new(id: impl AsRef<str>) -> Result<Self, InvalidRecipeId> {
        Uuid::parse_str(id.as_ref())
            .map(Self)
            .map_err(|_| InvalidRecipeId)
    }

    /// Generate a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for RecipeId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<RecipeId> for String {
    fn from(value: RecipeId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for RecipeId {
    type Error = InvalidRecipeId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A cooking recipe.
///
/// ## Invariants
/// - `id` is unique across recipes and immutable after insert.
/// - `directions` keep exactly the order they were submitted in, including
///   the empty sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Stable identifier, always a string on the wire.
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: RecipeId,
    /// Display label, stored verbatim.
    #[schema(example = "cookies")]
    pub name: String,
    /// Ordered preparation steps.
    #[schema(example = json!(["preheat oven to 375", "mix ingredients"]))]
    pub directions: Vec<String>,
}

impl Recipe {
    /// Assemble an entity from a generated identifier and submitted fields.
    pub fn from_draft(id: RecipeId, draft: RecipeDraft) -> Self {
        let RecipeDraft { name, directions } = draft;
        Self {
            id,
            name,
            directions,
        }
    }
}

/// Caller-supplied recipe fields; the server assigns the identifier.
///
/// Unknown JSON fields are ignored rather than rejected, mirroring the
/// verbatim-acceptance contract of the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    /// Display label.
    #[schema(example = "cookies")]
    pub name: String,
    /// Ordered preparation steps.
    pub directions: Vec<String>,
}
