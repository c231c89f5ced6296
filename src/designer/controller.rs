/// Canvas interaction controller
///
/// Turns drag, drop, and click input into node store mutations. Tracks the
/// palette drag gesture and the single selected node.
///
/// Input arrives on two separate channels. `NodeInteraction` covers everything
/// that happens inside a node (select click, rename field, delete and settings
/// buttons). `CanvasInteraction` covers the palette gesture and background
/// clicks. The input layer maps each physical event to exactly one
/// `CanvasEvent`, so typing into a node's name field can never also deselect it.

use crate::designer::store::NodeStore;
use crate::workflow::templates::find_template;
use crate::workflow::types::{NodeConfig, NodeTemplate, NodeUpdate, Position, WorkflowNode};
use serde::{Deserialize, Serialize};

/// One physical input event, routed to exactly one channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CanvasEvent {
    Node(NodeInteraction),
    Canvas(CanvasInteraction),
}

/// Interaction with a node's own surface or inline controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInteraction {
    pub node_id: String,
    pub action: NodeAction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeAction {
    /// Click on the node body
    Select,
    /// Keystroke in the inline name field
    Rename { name: String },
    /// Node repositioned by the rendering layer
    Move { position: Position },
    /// Config edited from the settings affordance
    Configure { config: NodeConfig },
    /// Delete button
    Delete,
    /// Settings button; consumed without side effects
    OpenSettings,
}

/// Interaction with the palette or the empty canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CanvasInteraction {
    /// Palette item picked up, addressed by template label
    StartDrag { template: String },
    /// Drag released outside the canvas
    CancelDrag,
    /// Drag released over the canvas at a client-space point
    #[serde(rename_all = "camelCase")]
    Drop {
        client_point: Position,
        canvas_origin: Position,
    },
    /// Click on empty canvas
    BackgroundClick,
}

/// What an event changed, so the rendering layer knows whether to redraw
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEffect {
    /// Nothing observable changed
    None,
    DragStarted,
    DragCancelled,
    NodeCreated(WorkflowNode),
    NodeUpdated(String),
    NodeDeleted(String),
    SelectionChanged(Option<String>),
}

impl CanvasEffect {
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Drag and selection state machine for one designer session
#[derive(Debug, Clone)]
pub struct CanvasController {
    /// Template being dragged from the palette, if a gesture is in progress
    drag: Option<NodeTemplate>,
    /// Currently selected node; always present in the paired store
    selection: Option<String>,
    /// Subtracted from drop points so the node's top-left sits off the cursor
    drop_offset: Position,
}

impl CanvasController {
    pub fn new(drop_offset: Position) -> Self {
        Self {
            drag: None,
            selection: None,
            drop_offset,
        }
    }

    /// Template of the drag gesture in progress
    pub fn dragging(&self) -> Option<&NodeTemplate> {
        self.drag.as_ref()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Idle -> Dragging. A new gesture replaces any unresolved one.
    pub fn start_drag(&mut self, template: NodeTemplate) {
        tracing::debug!("Drag started: {}", template.label);
        self.drag = Some(template);
    }

    /// Dragging -> Idle without creating a node
    pub fn cancel_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }

    /// Map a client-space drop point to the new node's canvas-local top-left
    pub fn resolve_drop_point(&self, client_point: Position, canvas_origin: Position) -> Position {
        client_point.offset_by(canvas_origin).offset_by(self.drop_offset)
    }

    /// Dragging -> Idle, creating one node from the dragged template
    ///
    /// A drop without an active drag is ignored.
    pub fn drop_on_canvas(
        &mut self,
        store: &mut NodeStore,
        client_point: Position,
        canvas_origin: Position,
    ) -> Option<WorkflowNode> {
        let Some(template) = self.drag.take() else {
            tracing::debug!("Ignoring drop with no drag in progress");
            return None;
        };
        let position = self.resolve_drop_point(client_point, canvas_origin);
        Some(store.create_node(&template, Some(position)))
    }

    /// Exclusively select `node_id`; a stale id leaves the selection as is
    pub fn select_node(&mut self, store: &NodeStore, node_id: &str) -> bool {
        if !store.contains(node_id) {
            tracing::warn!("Ignoring selection of unknown node: {}", node_id);
            return false;
        }
        self.selection = Some(node_id.to_string());
        true
    }

    /// Clear the selection unconditionally
    pub fn click_canvas_background(&mut self) -> bool {
        self.selection.take().is_some()
    }

    /// Delete a node, clearing the selection if it pointed at it
    pub fn delete_node(&mut self, store: &mut NodeStore, node_id: &str) -> Option<WorkflowNode> {
        let removed = store.delete_node(node_id)?;
        if self.selection.as_deref() == Some(node_id) {
            self.selection = None;
        }
        Some(removed)
    }

    /// Dispatch one input event
    pub fn handle(&mut self, store: &mut NodeStore, event: CanvasEvent) -> CanvasEffect {
        match event {
            CanvasEvent::Node(interaction) => self.handle_node(store, interaction),
            CanvasEvent::Canvas(interaction) => self.handle_canvas(store, interaction),
        }
    }

    fn handle_node(&mut self, store: &mut NodeStore, interaction: NodeInteraction) -> CanvasEffect {
        let NodeInteraction { node_id, action } = interaction;
        let update = match action {
            NodeAction::Select => {
                return if self.select_node(store, &node_id) {
                    CanvasEffect::SelectionChanged(Some(node_id))
                } else {
                    CanvasEffect::None
                };
            }
            NodeAction::Delete => {
                return match self.delete_node(store, &node_id) {
                    Some(_) => CanvasEffect::NodeDeleted(node_id),
                    None => CanvasEffect::None,
                };
            }
            NodeAction::OpenSettings => return CanvasEffect::None,
            NodeAction::Rename { name } => NodeUpdate::display_name(name),
            NodeAction::Move { position } => NodeUpdate::position(position),
            NodeAction::Configure { config } => NodeUpdate {
                config: Some(config),
                ..NodeUpdate::default()
            },
        };

        if store.update_node(&node_id, update) {
            CanvasEffect::NodeUpdated(node_id)
        } else {
            CanvasEffect::None
        }
    }

    fn handle_canvas(&mut self, store: &mut NodeStore, interaction: CanvasInteraction) -> CanvasEffect {
        match interaction {
            CanvasInteraction::StartDrag { template } => match find_template(&template) {
                Some(template) => {
                    self.start_drag(template);
                    CanvasEffect::DragStarted
                }
                None => {
                    tracing::warn!("Ignoring drag of unknown template: {}", template);
                    CanvasEffect::None
                }
            },
            CanvasInteraction::CancelDrag => {
                if self.cancel_drag() {
                    CanvasEffect::DragCancelled
                } else {
                    CanvasEffect::None
                }
            }
            CanvasInteraction::Drop {
                client_point,
                canvas_origin,
            } => self
                .drop_on_canvas(store, client_point, canvas_origin)
                .map_or(CanvasEffect::None, CanvasEffect::NodeCreated),
            CanvasInteraction::BackgroundClick => {
                if self.click_canvas_background() {
                    CanvasEffect::SelectionChanged(None)
                } else {
                    CanvasEffect::None
                }
            }
        }
    }
}
