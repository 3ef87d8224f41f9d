//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] aggregates every HTTP endpoint and the schemas they exchange.
//! The generated specification backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::{CookLog, CookLogDraft, Error, ErrorCode, Recipe, RecipeDraft};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipe lab API",
        description = "HTTP interface for managing cooking recipes and their cook logs."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::recipes::create_recipe,
        crate::inbound::http::recipes::list_recipes,
        crate::inbound::http::recipes::get_recipe,
        crate::inbound::http::recipes::update_recipe,
        crate::inbound::http::recipes::delete_recipe,
        crate::inbound::http::cook_logs::create_cook_log,
        crate::inbound::http::cook_logs::list_cook_logs,
        crate::inbound::http::cook_logs::get_cook_log,
        crate::inbound::http::cook_logs::update_cook_log,
        crate::inbound::http::cook_logs::delete_cook_log,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(Recipe, RecipeDraft, CookLog, CookLogDraft, Error, ErrorCode)),
    tags(
        (name = "recipes", description = "Recipe CRUD operations"),
        (name = "log", description = "Cook log CRUD operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
