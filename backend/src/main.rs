//! Backend entry-point: wires persistence, REST endpoints, and OpenAPI docs.

mod server;

use std::env;
use std::net::SocketAddr;

use diesel::Connection;
use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_async::AsyncPgConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use backend::outbound::persistence::{DbPool, PoolConfig};
use server::{create_server, ServerConfig};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let bind_addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.into())
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR: {e}")))?;

    let mut config = ServerConfig::new(bind_addr);
    match env::var("DATABASE_URL") {
        Ok(database_url) => {
            run_migrations(database_url.clone()).await?;
            let pool = DbPool::new(PoolConfig::new(database_url))
                .await
                .map_err(|e| std::io::Error::other(format!("pool construction failed: {e}")))?;
            config = config.with_db_pool(pool);
        }
        Err(_) => warn!("DATABASE_URL not set; falling back to in-memory stores (dev only)"),
    }

    info!(addr = %bind_addr, "starting server");
    create_server(config)?.await
}

/// Apply pending migrations before serving traffic.
///
/// Migrations run on a blocking thread because the migration harness drives
/// the async connection through its synchronous wrapper.
async fn run_migrations(database_url: String) -> std::io::Result<()> {
    tokio::task::spawn_blocking(move || {
        let mut conn = AsyncConnectionWrapper::<AsyncPgConnection>::establish(&database_url)
            .map_err(|e| std::io::Error::other(format!("database connection failed: {e}")))?;
        conn.run_pending_migrations(MIGRATIONS)
            .map(|versions| {
                info!(applied = versions.len(), "migrations up to date");
            })
            .map_err(|e| std::io::Error::other(format!("migration run failed: {e}")))
    })
    .await
    .map_err(|e| std::io::Error::other(format!("migration task failed: {e}")))?
}
