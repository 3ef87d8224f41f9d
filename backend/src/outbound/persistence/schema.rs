//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly. When migrations
//! change the schema, regenerate with `diesel print-schema` or update this
//! file by hand.

diesel::table! {
    /// Persisted recipes.
    recipes (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Display label, stored verbatim.
        name -> Text,
        /// Ordered preparation steps.
        directions -> Array<Text>,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp (maintained by trigger).
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Persisted cook logs.
    ///
    /// `recipe_id` is opaque text: there is no foreign key to `recipes`.
    cook_logs (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Opaque reference to a recipe id, stored verbatim.
        recipe_id -> Text,
        /// Date of the session, stored verbatim.
        date_of_event -> Text,
        /// Free-text notes.
        notes -> Text,
        /// Free-text rating.
        rating -> Text,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp (maintained by trigger).
        updated_at -> Timestamptz,
    }
}
