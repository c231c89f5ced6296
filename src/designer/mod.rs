/// Designer Layer
///
/// This module provides the interactive canvas editor for a single workflow:
/// - Ordered node store for placed nodes
/// - Drag/selection state machine driven by routed input events
/// - Snapshot construction on save
/// - Session lifecycle and view switching

// Ordered, in-memory node collection
pub mod store;

// Drag gesture and selection state machine
pub mod controller;

// Snapshot construction for the save action
pub mod snapshot;

// Per-workflow designer session
pub mod session;

// Workflow list, views, and the active session
pub mod workbench;

// Re-export main types
pub use controller::{CanvasController, CanvasEffect, CanvasEvent, CanvasInteraction, NodeAction, NodeInteraction};
pub use session::{CanvasView, DesignerSession};
pub use snapshot::save_workflow;
pub use store::NodeStore;
pub use workbench::{View, Workbench};
