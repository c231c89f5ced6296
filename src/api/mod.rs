/// HTTP API Layer
///
/// This module exposes the editor to a front end over JSON. It handles:
/// - Workflow list and view switching
/// - Designer lifecycle (open, rename, save)
/// - Template palette and routed canvas events

// Workflow list and designer lifecycle endpoints
pub mod workflows;

// Template palette and canvas event endpoints
pub mod canvas;

// Re-export router builders
pub use canvas::create_canvas_routes;
pub use workflows::{create_workflow_routes, AppState};
