//! End-to-end coverage for the cook log HTTP surface.
//!
//! Same harness as the recipe suite: real handlers over in-memory adapters.

use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test as actix_test, web, App, Error};
use serde_json::{json, Value};

use backend::domain::CookLog;
use backend::inbound::http::cook_logs::{
    create_cook_log, delete_cook_log, get_cook_log, list_cook_logs, update_cook_log,
};
use backend::inbound::http::state::HttpState;
use backend::Trace;

async fn spawn_app() -> impl Service<Request, Response = ServiceResponse, Error = Error> {
    actix_test::init_service(
        App::new()
            .app_data(web::Data::new(HttpState::in_memory()))
            .wrap(Trace)
            .service(
                web::scope("/api/v1")
                    .service(create_cook_log)
                    .service(list_cook_logs)
                    .service(get_cook_log)
                    .service(update_cook_log)
                    .service(delete_cook_log),
            ),
    )
    .await
}

#[actix_rt::test]
async fn creating_a_log_returns_every_field_plus_an_id() {
    let app = spawn_app().await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/log")
            .set_json(json!({
                "recipeId": "5",
                "dateOfEvent": "03-25-21",
                "notes": "it was delicious",
                "rating": "4.5 stars"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let value: Value =
        serde_json::from_slice(&actix_test::read_body(response).await).expect("cook log payload");
    assert!(value.get("id").and_then(Value::as_str).is_some());
    assert_eq!(value.get("recipeId"), Some(&json!("5")));
    assert_eq!(value.get("dateOfEvent"), Some(&json!("03-25-21")));
    assert_eq!(value.get("notes"), Some(&json!("it was delicious")));
    assert_eq!(value.get("rating"), Some(&json!("4.5 stars")));
}

#[actix_rt::test]
async fn list_contains_every_created_log() {
    let app = spawn_app().await;

    let payloads = [
        json!({
            "recipeId": "5",
            "dateOfEvent": "03-25-21",
            "notes": "it was delicious",
            "rating": "4.5 stars"
        }),
        json!({
            "recipeId": "6",
            "dateOfEvent": "04-25-21",
            "notes": "it was ok",
            "rating": "3 stars"
        }),
        json!({
            "recipeId": "7",
            "dateOfEvent": "05-25-21",
            "notes": "it was amaze balls",
            "rating": "5 stars"
        }),
    ];

    let mut created = Vec::new();
    for payload in payloads {
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/log")
                .set_json(payload)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let log: CookLog = serde_json::from_slice(&actix_test::read_body(response).await)
            .expect("cook log payload");
        created.push(log);
    }

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/v1/log").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let listed: Vec<CookLog> =
        serde_json::from_slice(&actix_test::read_body(response).await).expect("cook log list");

    assert_eq!(listed.len(), 3);
    for log in created {
        assert!(listed.contains(&log));
    }
}

#[actix_rt::test]
async fn log_lifecycle_round_trips_through_the_api() {
    let app = spawn_app().await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/log")
            .set_json(json!({
                "recipeId": "5",
                "dateOfEvent": "03-25-21",
                "notes": "it was delicious",
                "rating": "4.5 stars"
            }))
            .to_request(),
    )
    .await;
    let created: CookLog =
        serde_json::from_slice(&actix_test::read_body(response).await).expect("cook log payload");

    // Fetch by id.
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/log/{}", created.id))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: CookLog =
        serde_json::from_slice(&actix_test::read_body(response).await).expect("cook log payload");
    assert_eq!(fetched, created);

    // Replace the mutable fields.
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/api/v1/log/{}", created.id))
            .set_json(json!({
                "recipeId": "5",
                "dateOfEvent": "03-26-21",
                "notes": "better the next day",
                "rating": "5 stars"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated: CookLog =
        serde_json::from_slice(&actix_test::read_body(response).await).expect("cook log payload");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.rating, "5 stars");

    // Delete returns the snapshot, then the log is gone.
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/api/v1/log/{}", created.id))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let deleted: CookLog =
        serde_json::from_slice(&actix_test::read_body(response).await).expect("cook log payload");
    assert_eq!(deleted, updated);

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/log/{}", created.id))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn dangling_recipe_references_are_accepted() {
    let app = spawn_app().await;

    // No recipe with this reference exists anywhere; the log is stored anyway.
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/log")
            .set_json(json!({
                "recipeId": "no-such-recipe",
                "dateOfEvent": "yesterday, roughly",
                "notes": "",
                "rating": "would not cook again"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let value: Value =
        serde_json::from_slice(&actix_test::read_body(response).await).expect("cook log payload");
    assert_eq!(value.get("recipeId"), Some(&json!("no-such-recipe")));
    assert_eq!(value.get("dateOfEvent"), Some(&json!("yesterday, roughly")));
}
