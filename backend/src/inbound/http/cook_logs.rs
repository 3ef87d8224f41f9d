//! Cook log API handlers.
//!
//! The resource is mounted at the singular `/api/v1/log` path for
//! compatibility with existing clients.
//!
//! ```text
//! POST   /api/v1/log        {"recipeId":"5","dateOfEvent":"03-25-21","notes":"...","rating":"4.5 stars"}
//! GET    /api/v1/log
//! GET    /api/v1/log/{id}
//! PUT    /api/v1/log/{id}
//! DELETE /api/v1/log/{id}
//! ```

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::domain::ports::CookLogPersistenceError;
use crate::domain::{CookLog, CookLogDraft, CookLogId, Error};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

fn map_persistence_error(error: CookLogPersistenceError) -> Error {
    match error {
        CookLogPersistenceError::Connection { message } => Error::service_unavailable(message),
        CookLogPersistenceError::Query { message } => Error::internal(message),
    }
}

fn parse_id(raw: &str) -> Result<CookLogId, Error> {
    CookLogId::new(raw).map_err(|err| Error::invalid_request(err.to_string()))
}

fn log_not_found(id: &CookLogId) -> Error {
    Error::not_found(format!("no cook log with id {id}"))
}

/// Create a cook log; every field is stored verbatim.
#[utoipa::path(
    post,
    path = "/api/v1/log",
    request_body = CookLogDraft,
    responses(
        (status = 201, description = "Cook log created", body = CookLog),
        (status = 400, description = "Malformed request body", body = Error),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["log"],
    operation_id = "createCookLog"
)]
#[post("/log")]
pub async fn create_cook_log(
    state: web::Data<HttpState>,
    payload: web::Json<CookLogDraft>,
) -> ApiResult<HttpResponse> {
    let log = state
        .cook_logs
        .insert(payload.into_inner())
        .await
        .map_err(map_persistence_error)?;
    Ok(HttpResponse::Created().json(log))
}

/// List every persisted cook log.
#[utoipa::path(
    get,
    path = "/api/v1/log",
    responses(
        (status = 200, description = "All cook logs", body = [CookLog]),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["log"],
    operation_id = "listCookLogs"
)]
#[get("/log")]
pub async fn list_cook_logs(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<CookLog>>> {
    let logs = state.cook_logs.list().await.map_err(map_persistence_error)?;
    Ok(web::Json(logs))
}

/// Fetch a single cook log by id.
#[utoipa::path(
    get,
    path = "/api/v1/log/{id}",
    params(("id" = String, Path, description = "Cook log identifier")),
    responses(
        (status = 200, description = "The cook log", body = CookLog),
        (status = 400, description = "Malformed identifier", body = Error),
        (status = 404, description = "No such cook log", body = Error)
    ),
    tags = ["log"],
    operation_id = "getCookLog"
)]
#[get("/log/{id}")]
pub async fn get_cook_log(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<CookLog>> {
    let id = parse_id(&path)?;
    let log = state
        .cook_logs
        .find_by_id(&id)
        .await
        .map_err(map_persistence_error)?
        .ok_or_else(|| log_not_found(&id))?;
    Ok(web::Json(log))
}

/// Replace the mutable fields of a cook log; the id never changes.
#[utoipa::path(
    put,
    path = "/api/v1/log/{id}",
    params(("id" = String, Path, description = "Cook log identifier")),
    request_body = CookLogDraft,
    responses(
        (status = 200, description = "The updated cook log", body = CookLog),
        (status = 400, description = "Malformed identifier or body", body = Error),
        (status = 404, description = "No such cook log", body = Error)
    ),
    tags = ["log"],
    operation_id = "updateCookLog"
)]
#[put("/log/{id}")]
pub async fn update_cook_log(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<CookLogDraft>,
) -> ApiResult<web::Json<CookLog>> {
    let id = parse_id(&path)?;
    let log = state
        .cook_logs
        .update(&id, payload.into_inner())
        .await
        .map_err(map_persistence_error)?
        .ok_or_else(|| log_not_found(&id))?;
    Ok(web::Json(log))
}

/// Delete a cook log, returning it as it existed before deletion.
#[utoipa::path(
    delete,
    path = "/api/v1/log/{id}",
    params(("id" = String, Path, description = "Cook log identifier")),
    responses(
        (status = 200, description = "The deleted cook log", body = CookLog),
        (status = 400, description = "Malformed identifier", body = Error),
        (status = 404, description = "No such cook log", body = Error)
    ),
    tags = ["log"],
    operation_id = "deleteCookLog"
)]
#[delete("/log/{id}")]
pub async fn delete_cook_log(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<CookLog>> {
    let id = parse_id(&path)?;
    let log = state
        .cook_logs
        .delete(&id)
        .await
        .map_err(map_persistence_error)?
        .ok_or_else(|| log_not_found(&id))?;
    Ok(web::Json(log))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{test as actix_test, web, App};
    use serde_json::{json, Value};

    use crate::domain::ports::{InMemoryRecipeRepository, MockCookLogRepository};

    use super::*;

    fn test_app(
        state: HttpState,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new().app_data(web::Data::new(state)).service(
            web::scope("/api/v1")
                .service(create_cook_log)
                .service(list_cook_logs)
                .service(get_cook_log)
                .service(update_cook_log)
                .service(delete_cook_log),
        )
    }

    fn delicious() -> CookLogDraft {
        CookLogDraft {
            recipe_id: "5".into(),
            date_of_event: "03-25-21".into(),
            notes: "it was delicious".into(),
            rating: "4.5 stars".into(),
        }
    }

    #[actix_web::test]
    async fn creates_a_cook_log() {
        let app = actix_test::init_service(test_app(HttpState::in_memory())).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/v1/log")
            .set_json(json!({
                "recipeId": "5",
                "dateOfEvent": "03-25-21",
                "notes": "it was delicious",
                "rating": "4.5 stars"
            }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("cook log payload");
        assert!(value.get("id").and_then(Value::as_str).is_some());
        assert_eq!(value.get("recipeId").and_then(Value::as_str), Some("5"));
        assert_eq!(
            value.get("dateOfEvent").and_then(Value::as_str),
            Some("03-25-21")
        );
        assert_eq!(
            value.get("notes").and_then(Value::as_str),
            Some("it was delicious")
        );
        assert_eq!(
            value.get("rating").and_then(Value::as_str),
            Some("4.5 stars")
        );
    }

    #[actix_web::test]
    async fn gets_all_cook_logs() {
        let state = HttpState::in_memory();
        let app = actix_test::init_service(test_app(state.clone())).await;

        let mut seeded = Vec::new();
        for (recipe_id, rating) in [("5", "4.5 stars"), ("6", "3 stars"), ("7", "5 stars")] {
            let mut draft = delicious();
            draft.recipe_id = recipe_id.into();
            draft.rating = rating.into();
            seeded.push(state.cook_logs.insert(draft).await.expect("seed log"));
        }

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/api/v1/log").to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = actix_test::read_body(response).await;
        let listed: Vec<CookLog> = serde_json::from_slice(&body).expect("cook log list");
        for log in seeded {
            assert!(listed.contains(&log));
        }
    }

    #[actix_web::test]
    async fn gets_a_cook_log_by_id() {
        let state = HttpState::in_memory();
        let app = actix_test::init_service(test_app(state.clone())).await;
        let seeded = state
            .cook_logs
            .insert(delicious())
            .await
            .expect("seed log");

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/api/v1/log/{}", seeded.id))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = actix_test::read_body(response).await;
        let fetched: CookLog = serde_json::from_slice(&body).expect("cook log payload");
        assert_eq!(fetched, seeded);
    }

    #[actix_web::test]
    async fn updates_a_cook_log_by_id() {
        let state = HttpState::in_memory();
        let app = actix_test::init_service(test_app(state.clone())).await;
        let seeded = state
            .cook_logs
            .insert(delicious())
            .await
            .expect("seed log");

        let request = actix_test::TestRequest::put()
            .uri(&format!("/api/v1/log/{}", seeded.id))
            .set_json(json!({
                "recipeId": "5",
                "dateOfEvent": "03-26-21",
                "notes": "even better reheated",
                "rating": "5 stars"
            }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = actix_test::read_body(response).await;
        let updated: CookLog = serde_json::from_slice(&body).expect("cook log payload");
        assert_eq!(updated.id, seeded.id);
        assert_eq!(updated.notes, "even better reheated");
        assert_eq!(updated.rating, "5 stars");
    }

    #[actix_web::test]
    async fn deletes_a_cook_log_by_id() {
        let state = HttpState::in_memory();
        let app = actix_test::init_service(test_app(state.clone())).await;
        let seeded = state
            .cook_logs
            .insert(delicious())
            .await
            .expect("seed log");

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri(&format!("/api/v1/log/{}", seeded.id))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = actix_test::read_body(response).await;
        let deleted: CookLog = serde_json::from_slice(&body).expect("cook log payload");
        assert_eq!(deleted, seeded);

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/api/v1/log/{}", seeded.id))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn unknown_id_returns_not_found_payload() {
        let app = actix_test::init_service(test_app(HttpState::in_memory())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/api/v1/log/{}", CookLogId::random()))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("error payload");
        assert_eq!(value.get("code").and_then(Value::as_str), Some("not_found"));
    }

    #[actix_web::test]
    async fn malformed_id_returns_invalid_request() {
        let app = actix_test::init_service(test_app(HttpState::in_memory())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri("/api/v1/log/5")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("error payload");
        assert_eq!(
            value.get("code").and_then(Value::as_str),
            Some("invalid_request")
        );
    }

    #[actix_web::test]
    async fn query_failures_surface_as_internal_errors() {
        let mut cook_logs = MockCookLogRepository::new();
        cook_logs
            .expect_list()
            .returning(|| Err(CookLogPersistenceError::query("database query failed")));
        let state = HttpState::new(
            Arc::new(InMemoryRecipeRepository::default()),
            Arc::new(cook_logs),
        );
        let app = actix_test::init_service(test_app(state)).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/api/v1/log").to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("error payload");
        // Internal messages are redacted at the HTTP boundary.
        assert_eq!(
            value.get("message").and_then(Value::as_str),
            Some("Internal server error")
        );
    }
}
