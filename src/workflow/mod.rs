/// Workflow Management Layer
///
/// This module holds the data shared by every part of the editor:
/// - Type definitions (templates, nodes, summaries, snapshots)
/// - The static node template catalog
/// - The workflow summary registry
/// - Snapshot persistence collaborators

// Core workflow type definitions
pub mod types;

// Static palette of draggable node templates
pub mod templates;

// Workflow summaries shown in the list view
pub mod registry;

// Persistence collaborators that receive saved snapshots
pub mod storage;

// Re-export commonly used types
pub use registry::WorkflowRegistry;
pub use storage::{
    build_snapshot_store, persist_with_ack, LogSnapshotStore, MemorySnapshotStore, SaveAck,
    SnapshotStore,
};
pub use templates::{find_template, list_templates};
pub use types::{
    ConfigValue, NodeConfig, NodeKind, NodeTemplate, NodeUpdate, Position, WorkflowNode,
    WorkflowSnapshot, WorkflowStatus, WorkflowSummary,
};
