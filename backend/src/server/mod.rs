//! Server construction and route wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use backend::inbound::http::cook_logs::{
    create_cook_log, delete_cook_log, get_cook_log, list_cook_logs, update_cook_log,
};
use backend::inbound::http::health::{live, ready, HealthState};
use backend::inbound::http::recipes::{
    create_recipe, delete_recipe, get_recipe, list_recipes, update_recipe,
};
use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::{DieselCookLogRepository, DieselRecipeRepository};
#[cfg(debug_assertions)]
use backend::ApiDoc;
use backend::Trace;

/// Build the handler state from configuration.
///
/// Uses Diesel-backed repositories when a pool is configured and falls back
/// to in-memory adapters otherwise, keeping the server usable for local
/// development without a database.
fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => HttpState::new(
            Arc::new(DieselRecipeRepository::new(pool.clone())),
            Arc::new(DieselCookLogRepository::new(pool.clone())),
        ),
        None => {
            info!("no database configured; serving from in-memory stores");
            HttpState::in_memory()
        }
    }
}

/// Create the HTTP server from configuration.
///
/// # Errors
///
/// Returns [`std::io::Error`] when binding the listen address fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config));
    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness flag stays shared.
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        let api = web::scope("/api/v1")
            .service(create_recipe)
            .service(list_recipes)
            .service(get_recipe)
            .service(update_recipe)
            .service(delete_recipe)
            .service(create_cook_log)
            .service(list_cook_logs)
            .service(get_cook_log)
            .service(update_cook_log)
            .service(delete_cook_log);

        #[allow(unused_mut)]
        let mut app = App::new()
            .app_data(http_state.clone())
            .app_data(server_health_state.clone())
            .wrap(Trace)
            .service(api)
            .service(ready)
            .service(live);

        #[cfg(debug_assertions)]
        {
            app = app
                .service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));
        }

        app
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
