//! HTTP server for the todo API.
//!
//! # Overview
//! Exposes `todo_core::TodoService` over axum routes under `/todos` and
//! persists items in SQLite through `SqliteTodoRepository`.
//!
//! # Design
//! - `app` takes any `TodoRepository`, so tests can drive the full router
//!   against the in-memory store or an in-memory SQLite database.
//! - Handlers only translate between HTTP and the service. Status codes come
//!   from the `ServiceError` variant, never from message text.

pub mod config;
pub mod db;
pub mod error;
pub mod layers;
pub mod logging;
pub mod routes;
pub mod sqlite;

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use todo_core::{TodoRepository, TodoService};
use tokio::net::TcpListener;

pub use config::Config;
pub use sqlite::SqliteTodoRepository;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TodoService>,
}

impl AppState {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self {
            service: Arc::new(TodoService::new(repository)),
        }
    }
}

/// Router with the todo routes and no middleware.
pub fn app(repository: Arc<dyn TodoRepository>) -> Router {
    routes::router(AppState::new(repository))
}

/// Connect, migrate and optionally seed the database, then build the full
/// router including middleware.
pub async fn build(config: &Config) -> Result<Router> {
    let pool = db::connect(&config.database_url, config.max_connections).await?;
    db::migrate(&pool).await?;
    if config.seed {
        db::seed_once(&pool).await?;
    }

    let repository = Arc::new(SqliteTodoRepository::new(pool));
    Ok(layers::apply(app(repository), &config.cors_origins))
}

/// Serve `router` on `listener` until Ctrl-C.
pub async fn run(listener: TcpListener, router: Router) -> Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "listening");
    }
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutdown requested");
    }
}
