/// Designer session
///
/// Owns everything that exists only while one workflow is open in the
/// designer: its node store, drag gesture, and selection. Dropping the
/// session discards all of it.

use crate::config::CanvasConfig;
use crate::designer::controller::{CanvasController, CanvasEffect, CanvasEvent};
use crate::designer::snapshot::save_workflow;
use crate::designer::store::NodeStore;
use crate::workflow::types::{
    NodeTemplate, NodeUpdate, Position, WorkflowNode, WorkflowSnapshot, WorkflowSummary,
};
use serde::Serialize;

/// Render state handed to the drawing surface after each mutation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasView {
    pub workflow_id: String,
    pub name: String,
    /// Nodes in z-order
    pub nodes: Vec<WorkflowNode>,
    pub selected_node_id: Option<String>,
    pub dragging: Option<NodeTemplate>,
}

#[derive(Debug, Clone)]
pub struct DesignerSession {
    workflow_id: String,
    /// Name as edited in the toolbar; reaches the summary only on save
    name: String,
    store: NodeStore,
    controller: CanvasController,
}

impl DesignerSession {
    /// Open a session with an empty canvas
    pub fn new(summary: &WorkflowSummary, canvas: &CanvasConfig) -> Self {
        Self {
            workflow_id: summary.id.clone(),
            name: summary.name.clone(),
            store: NodeStore::new(canvas.default_origin),
            controller: CanvasController::new(canvas.drop_offset),
        }
    }

    /// Open a session repopulated from a saved snapshot
    pub fn restore(summary: &WorkflowSummary, snapshot: &WorkflowSnapshot, canvas: &CanvasConfig) -> Self {
        Self {
            workflow_id: summary.id.clone(),
            name: summary.name.clone(),
            store: NodeStore::from_nodes(snapshot.nodes.clone(), canvas.default_origin),
            controller: CanvasController::new(canvas.drop_offset),
        }
    }

    pub fn workflow_id(&self) -> &str {
        &self.workflow_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn list_nodes(&self) -> &[WorkflowNode] {
        self.store.list_nodes()
    }

    pub fn selected(&self) -> Option<&str> {
        self.controller.selected()
    }

    pub fn dragging(&self) -> Option<&NodeTemplate> {
        self.controller.dragging()
    }

    pub fn create_node(&mut self, template: &NodeTemplate, position: Option<Position>) -> WorkflowNode {
        self.store.create_node(template, position)
    }

    pub fn update_node(&mut self, node_id: &str, update: NodeUpdate) -> bool {
        self.store.update_node(node_id, update)
    }

    pub fn delete_node(&mut self, node_id: &str) -> Option<WorkflowNode> {
        self.controller.delete_node(&mut self.store, node_id)
    }

    pub fn start_drag(&mut self, template: NodeTemplate) {
        self.controller.start_drag(template);
    }

    pub fn cancel_drag(&mut self) -> bool {
        self.controller.cancel_drag()
    }

    pub fn drop_on_canvas(&mut self, client_point: Position, canvas_origin: Position) -> Option<WorkflowNode> {
        self.controller
            .drop_on_canvas(&mut self.store, client_point, canvas_origin)
    }

    pub fn select_node(&mut self, node_id: &str) -> bool {
        self.controller.select_node(&self.store, node_id)
    }

    pub fn click_canvas_background(&mut self) -> bool {
        self.controller.click_canvas_background()
    }

    /// Apply one routed input event
    pub fn handle(&mut self, event: CanvasEvent) -> CanvasEffect {
        self.controller.handle(&mut self.store, event)
    }

    /// Snapshot of the current canvas under the session's current name
    pub fn snapshot(&self) -> WorkflowSnapshot {
        save_workflow(&self.workflow_id, &self.name, self.store.list_nodes())
    }

    pub fn view(&self) -> CanvasView {
        CanvasView {
            workflow_id: self.workflow_id.clone(),
            name: self.name.clone(),
            nodes: self.store.list_nodes().to_vec(),
            selected_node_id: self.controller.selected().map(str::to_string),
            dragging: self.controller.dragging().copied(),
        }
    }
}
