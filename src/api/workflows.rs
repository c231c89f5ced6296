/// Workflow list and designer lifecycle endpoints
///
/// Covers the list view (create, open, switch view) and the designer's
/// toolbar (rename, save). Persistence runs after the workbench lock is
/// released, so a slow store never blocks canvas events.

use crate::{
    designer::{CanvasView, View, Workbench},
    workflow::{
        storage::{persist_with_ack, SaveAck, SnapshotStore},
        types::{WorkflowSnapshot, WorkflowSummary},
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Workflow list, active view, and designer session. Events are applied
    /// one at a time in arrival order under this lock.
    pub workbench: Arc<Mutex<Workbench>>,
    /// Persistence collaborator for saved snapshots
    pub store: Arc<dyn SnapshotStore>,
}

/// Response for the list view
#[derive(Debug, Serialize)]
pub struct WorkflowListResponse {
    pub view: View,
    pub workflows: Vec<WorkflowListEntry>,
}

/// One row of the list view: the summary plus its display label for last run
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowListEntry {
    #[serde(flatten)]
    pub summary: WorkflowSummary,
    pub last_run_label: String,
}

impl From<&WorkflowSummary> for WorkflowListEntry {
    fn from(summary: &WorkflowSummary) -> Self {
        Self {
            last_run_label: summary.last_run_label().to_string(),
            summary: summary.clone(),
        }
    }
}

/// Request body for view switching
#[derive(Debug, Deserialize)]
pub struct SwitchViewRequest {
    pub view: View,
}

/// Response for view switching
#[derive(Debug, Serialize)]
pub struct SwitchViewResponse {
    pub view: View,
    pub switched: bool,
}

/// Request body for renaming the open workflow
#[derive(Debug, Deserialize)]
pub struct RenameRequest {
    pub name: String,
}

/// Response for the save action
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub snapshot: WorkflowSnapshot,
    pub ack: SaveAck,
}

/// Create workflow list and designer lifecycle routes
pub fn create_workflow_routes() -> Router<AppState> {
    Router::new()
        .route("/api/workflows", get(list_workflows))
        .route("/api/workflows", post(create_workflow))
        .route("/api/workflows/{id}/open", post(open_workflow))
        .route("/api/view", put(switch_view))
        .route("/api/designer/name", put(rename_current))
        .route("/api/designer/save", post(save_current))
}

/// List all workflows
///
/// GET /api/workflows
/// Returns: { "view": "list", "workflows": [{ "id": "...", "name": "...", "status": "draft", "lastRun": null, "lastRunLabel": "Never" }] }
async fn list_workflows(State(state): State<AppState>) -> Json<WorkflowListResponse> {
    let workbench = state.workbench.lock().await;
    Json(WorkflowListResponse {
        view: workbench.view(),
        workflows: workbench.list_workflows().iter().map(WorkflowListEntry::from).collect(),
    })
}

/// Create a new workflow and open it in the designer
///
/// POST /api/workflows
async fn create_workflow(State(state): State<AppState>) -> Json<WorkflowSummary> {
    let summary = state.workbench.lock().await.create_workflow();
    tracing::info!("🔥 Created workflow: {} ({})", summary.id, summary.name);
    Json(summary)
}

/// Open an existing workflow in the designer
///
/// POST /api/workflows/{id}/open
async fn open_workflow(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CanvasView>, StatusCode> {
    let mut workbench = state.workbench.lock().await;
    if workbench.open_workflow(&id).is_none() {
        return Err(StatusCode::NOT_FOUND);
    }
    workbench
        .session()
        .map(|session| Json(session.view()))
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Switch between list, designer, and monitor views
///
/// PUT /api/view
/// Body: { "view": "monitor" }
async fn switch_view(
    State(state): State<AppState>,
    Json(payload): Json<SwitchViewRequest>,
) -> Json<SwitchViewResponse> {
    let mut workbench = state.workbench.lock().await;
    let switched = workbench.switch_view(payload.view);
    Json(SwitchViewResponse {
        view: workbench.view(),
        switched,
    })
}

/// Rename the workflow open in the designer
///
/// PUT /api/designer/name
/// Body: { "name": "Invoice Sync" }
async fn rename_current(
    State(state): State<AppState>,
    Json(payload): Json<RenameRequest>,
) -> Result<Json<CanvasView>, StatusCode> {
    let mut workbench = state.workbench.lock().await;
    if !workbench.rename_current(payload.name) {
        return Err(StatusCode::NOT_FOUND);
    }
    workbench
        .session()
        .map(|session| Json(session.view()))
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Save the workflow open in the designer
///
/// POST /api/designer/save
/// Returns: { "snapshot": { ... }, "ack": { "status": "saved" } }
///
/// The list entry is renamed only once the store accepts the snapshot; a
/// failed save leaves the summary and any earlier saved snapshot untouched.
async fn save_current(State(state): State<AppState>) -> Result<Json<SaveResponse>, StatusCode> {
    let snapshot = state
        .workbench
        .lock()
        .await
        .snapshot_current()
        .ok_or(StatusCode::NOT_FOUND)?;

    let ack = persist_with_ack(state.store.as_ref(), &snapshot).await;
    if ack == SaveAck::Saved {
        state.workbench.lock().await.commit_save(&snapshot);
        tracing::info!("✅ Workflow '{}' saved successfully", snapshot.name);
    }

    Ok(Json(SaveResponse { snapshot, ack }))
}
