/// Canvas endpoints
///
/// Serves the template palette and applies routed input events to the open
/// designer session. Every event response carries the full canvas view so the
/// front end can redraw.

use crate::{
    api::workflows::AppState,
    designer::{CanvasEvent, CanvasView},
    workflow::{templates::list_templates, types::NodeTemplate},
};
use axum::{extract::State, http::StatusCode, response::Json, routing::get, routing::post, Router};
use serde::Serialize;

/// Response for a canvas event
#[derive(Debug, Serialize)]
pub struct CanvasEventResponse {
    /// Whether the event changed anything observable
    pub changed: bool,
    pub canvas: CanvasView,
}

/// Create canvas routes
pub fn create_canvas_routes() -> Router<AppState> {
    Router::new()
        .route("/api/templates", get(templates))
        .route("/api/designer", get(current_canvas))
        .route("/api/designer/events", post(apply_event))
}

/// Node template palette
///
/// GET /api/templates
async fn templates() -> Json<&'static [NodeTemplate]> {
    Json(list_templates())
}

/// Current canvas of the open designer session
///
/// GET /api/designer
async fn current_canvas(State(state): State<AppState>) -> Result<Json<CanvasView>, StatusCode> {
    let workbench = state.workbench.lock().await;
    workbench
        .session()
        .map(|session| Json(session.view()))
        .ok_or(StatusCode::NOT_FOUND)
}

/// Apply one input event to the open designer session
///
/// POST /api/designer/events
/// Body: { "node": { "nodeId": "...", "action": { "type": "rename", "name": "..." } } }
///    or { "canvas": { "type": "drop", "clientPoint": {...}, "canvasOrigin": {...} } }
async fn apply_event(
    State(state): State<AppState>,
    Json(event): Json<CanvasEvent>,
) -> Result<Json<CanvasEventResponse>, StatusCode> {
    let mut workbench = state.workbench.lock().await;
    let Some(session) = workbench.session_mut() else {
        tracing::warn!("❌ Canvas event received outside the designer");
        return Err(StatusCode::NOT_FOUND);
    };

    tracing::debug!("📥 Canvas event: {:?}", event);
    let effect = session.handle(event);

    Ok(Json(CanvasEventResponse {
        changed: effect.is_change(),
        canvas: session.view(),
    }))
}
