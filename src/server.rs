/// Server setup and initialization
///
/// Wires together the workbench, the snapshot store, and the HTTP routes.
/// Provides the application factory used by the binary and by tests.

use crate::{
    api::{create_canvas_routes, create_workflow_routes, AppState},
    config::Config,
    designer::Workbench,
    workflow::storage::{build_snapshot_store, SnapshotStore},
};
use anyhow::Result;
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// Create the main Axum application with all routes
///
/// Builds a fresh workbench from the configuration and hands saved snapshots to
/// the given store.
pub fn create_app(config: &Config, store: Arc<dyn SnapshotStore>) -> Router {
    tracing::info!("📊 Initializing workbench (seed samples: {})", config.collection.seed_samples);
    tracing::debug!("🎯 Canvas config: {:?}", config.canvas);
    let workbench = Workbench::from_config(config);

    let app_state = AppState {
        workbench: Arc::new(Mutex::new(workbench)),
        store,
    };

    tracing::info!("📡 Creating HTTP router with all endpoints");
    Router::new()
        // Health check endpoint
        .route("/healthz", get(health_check))
        // Workflow list and designer lifecycle
        .merge(create_workflow_routes())
        // Template palette and canvas events
        .merge(create_canvas_routes())
        .with_state(app_state)
}

/// Start the HTTP server with the given configuration
///
/// Saved snapshots go to the store named by `config.persistence`.
pub async fn start_server(config: Config) -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(true)
        .with_level(true)
        .init();

    tracing::info!("Starting flowcanvas server...");

    let store = build_snapshot_store(config.persistence.snapshot_store);
    let app = create_app(&config, store);

    // Bind to the configured address
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server listening on http://{}", bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// Health check endpoint handler
async fn health_check() -> &'static str {
    "ok"
}
