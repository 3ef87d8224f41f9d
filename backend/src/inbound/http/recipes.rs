//! Recipe API handlers.
//!
//! ```text
//! POST   /api/v1/recipes        {"name":"cookies","directions":["mix","bake"]}
//! GET    /api/v1/recipes
//! GET    /api/v1/recipes/{id}
//! PUT    /api/v1/recipes/{id}   {"name":"good cookies","directions":["mix","bake"]}
//! DELETE /api/v1/recipes/{id}
//! ```

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::domain::ports::RecipePersistenceError;
use crate::domain::{Error, Recipe, RecipeDraft, RecipeId};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

fn map_persistence_error(error: RecipePersistenceError) -> Error {
    match error {
        RecipePersistenceError::Connection { message } => Error::service_unavailable(message),
        RecipePersistenceError::Query { message } => Error::internal(message),
    }
}

fn parse_id(raw: &str) -> Result<RecipeId, Error> {
    RecipeId::new(raw).map_err(|err| Error::invalid_request(err.to_string()))
}

fn recipe_not_found(id: &RecipeId) -> Error {
    Error::not_found(format!("no recipe with id {id}"))
}

/// Create a recipe from caller-supplied fields.
#[utoipa::path(
    post,
    path = "/api/v1/recipes",
    request_body = RecipeDraft,
    responses(
        (status = 201, description = "Recipe created", body = Recipe),
        (status = 400, description = "Malformed request body", body = Error),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["recipes"],
    operation_id = "createRecipe"
)]
#[post("/recipes")]
pub async fn create_recipe(
    state: web::Data<HttpState>,
    payload: web::Json<RecipeDraft>,
) -> ApiResult<HttpResponse> {
    let recipe = state
        .recipes
        .insert(payload.into_inner())
        .await
        .map_err(map_persistence_error)?;
    Ok(HttpResponse::Created().json(recipe))
}

/// List every persisted recipe.
#[utoipa::path(
    get,
    path = "/api/v1/recipes",
    responses(
        (status = 200, description = "All recipes", body = [Recipe]),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["recipes"],
    operation_id = "listRecipes"
)]
#[get("/recipes")]
pub async fn list_recipes(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Recipe>>> {
    let recipes = state.recipes.list().await.map_err(map_persistence_error)?;
    Ok(web::Json(recipes))
}

/// Fetch a single recipe by id.
#[utoipa::path(
    get,
    path = "/api/v1/recipes/{id}",
    params(("id" = String, Path, description = "Recipe identifier")),
    responses(
        (status = 200, description = "The recipe", body = Recipe),
        (status = 400, description = "Malformed identifier", body = Error),
        (status = 404, description = "No such recipe", body = Error)
    ),
    tags = ["recipes"],
    operation_id = "getRecipe"
)]
#[get("/recipes/{id}")]
pub async fn get_recipe(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Recipe>> {
    let id = parse_id(&path)?;
    let recipe = state
        .recipes
        .find_by_id(&id)
        .await
        .map_err(map_persistence_error)?
        .ok_or_else(|| recipe_not_found(&id))?;
    Ok(web::Json(recipe))
}

/// Replace the mutable fields of a recipe; the id never changes.
#[utoipa::path(
    put,
    path = "/api/v1/recipes/{id}",
    params(("id" = String, Path, description = "Recipe identifier")),
    request_body = RecipeDraft,
    responses(
        (status = 200, description = "The updated recipe", body = Recipe),
        (status = 400, description = "Malformed identifier or body", body = Error),
        (status = 404, description = "No such recipe", body = Error)
    ),
    tags = ["recipes"],
    operation_id = "updateRecipe"
)]
#[put("/recipes/{id}")]
pub async fn update_recipe(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<RecipeDraft>,
) -> ApiResult<web::Json<Recipe>> {
    let id = parse_id(&path)?;
    let recipe = state
        .recipes
        .update(&id, payload.into_inner())
        .await
        .map_err(map_persistence_error)?
        .ok_or_else(|| recipe_not_found(&id))?;
    Ok(web::Json(recipe))
}

/// Delete a recipe, returning it as it existed before deletion.
#[utoipa::path(
    delete,
    path = "/api/v1/recipes/{id}",
    params(("id" = String, Path, description = "Recipe identifier")),
    responses(
        (status = 200, description = "The deleted recipe", body = Recipe),
        (status = 400, description = "Malformed identifier", body = Error),
        (status = 404, description = "No such recipe", body = Error)
    ),
    tags = ["recipes"],
    operation_id = "deleteRecipe"
)]
#[delete("/recipes/{id}")]
pub async fn delete_recipe(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Recipe>> {
    let id = parse_id(&path)?;
    let recipe = state
        .recipes
        .delete(&id)
        .await
        .map_err(map_persistence_error)?
        .ok_or_else(|| recipe_not_found(&id))?;
    Ok(web::Json(recipe))
}
