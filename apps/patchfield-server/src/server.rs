use anyhow::{Context, Result};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use users::UsersModule;

use crate::config::AppConfig;
use crate::shutdown;

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
}

async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Root router: health check plus every module's routes, traced per request.
pub fn build_router(config: &AppConfig) -> Router {
    let users = UsersModule::in_memory(&config.users);
    Router::new()
        .route("/health", get(health))
        .merge(users.router())
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until a shutdown signal arrives.
///
/// # Errors
/// Returns an error if the bind address is invalid, the port cannot be bound or
/// the server fails while running.
pub async fn run(config: AppConfig) -> Result<()> {
    let addr = config.bind_addr()?;
    let app = build_router(&config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(addr = %listener.local_addr()?, "Patchfield server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Patchfield server stopped");
    Ok(())
}
