/// flowcanvas: design-time canvas editor for workflow automation builders
///
/// This library provides the in-memory model behind a drag-and-drop workflow
/// designer: a template palette, an ordered node store, a drag/selection state
/// machine, a workflow list, and snapshot-based saving.

// Core configuration and setup
pub mod config;

// Workflow data layer - templates, summaries, snapshots, and persistence collaborators
pub mod workflow;

// Designer layer - node store, canvas controller, sessions, and views
pub mod designer;

// HTTP API layer - JSON endpoints for the list view and the canvas
pub mod api;

// Server setup and initialization
pub mod server;

// Re-export commonly used types for external consumers
pub use designer::{CanvasEvent, DesignerSession, NodeStore, View, Workbench};
pub use server::{create_app, start_server};
pub use workflow::{NodeTemplate, WorkflowNode, WorkflowSnapshot, WorkflowSummary};
