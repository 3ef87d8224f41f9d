//! Cook log entity and its identifier.
//!
//! A cook log records one cooking session against a recipe. Every
//! caller-supplied field is stored verbatim: `recipe_id` is opaque text that
//! is never checked against existing recipes, `date_of_event` is not parsed
//! or normalised, and `rating` is free text such as `"4.5 stars"`.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Error returned when a cook log identifier fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cook log id must be a valid UUID")]
pub struct InvalidCookLogId;

/// Stable cook log identifier, generated at insert time and immutable
/// thereafter. Serialised as its canonical string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CookLogId(Uuid);

impl CookLogId {
    /// Parse an identifier from its string form.
    pub fn new(id: impl AsRef<str>) -> Result<Self, InvalidCookLogId> {
        Uuid::parse_str(id.as_ref())
            .map(Self)
            .map_err(|_| InvalidCookLogId)
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

impl From<Uuid> for CookLogId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for CookLogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<CookLogId> for String {
    fn from(value: CookLogId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for CookLogId {
    type Error = InvalidCookLogId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// One logged cooking session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CookLog {
    /// Stable identifier, always a string on the wire.
    #[schema(value_type = String, example = "7c9e6679-7425-40de-944b-e07fc1f90ae7")]
    pub id: CookLogId,
    /// Reference to a recipe id, stored as opaque text without validation.
    #[schema(example = "5")]
    pub recipe_id: String,
    /// Date of the session, accepted verbatim.
    #[schema(example = "03-25-21")]
    pub date_of_event: String,
    /// Free-text notes.
    #[schema(example = "it was delicious")]
    pub notes: String,
    /// Free-text rating, accepted verbatim.
    #[schema(example = "4.5 stars")]
    pub rating: String,
}

impl CookLog {
    /// Assemble an entity from a generated identifier and submitted fields.
    pub fn from_draft(id: CookLogId, draft: CookLogDraft) -> Self {
        let CookLogDraft {
            recipe_id,
            date_of_event,
            notes,
            rating,
        } = draft;
        Self {
            id,
            recipe_id,
            date_of_event,
            notes,
            rating,
        }
    }
}

/// Caller-supplied cook log fields; the server assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CookLogDraft {
    /// Reference to a recipe id, opaque text.
    #[schema(example = "5")]
    pub recipe_id: String,
    /// Date of the session, accepted verbatim.
    #[schema(example = "03-25-21")]
    pub date_of_event: String,
    /// Free-text notes.
    pub notes: String,
    /// Free-text rating.
    #[schema(example = "4.5 stars")]
    pub rating: String,
}
