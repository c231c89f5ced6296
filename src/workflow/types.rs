/// Core workflow type definitions
///
/// Defines the structures shared by the canvas editor: node templates, placed
/// nodes, workflow summaries, and saved snapshots. Everything that crosses the
/// HTTP boundary is serialized as camelCase JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Format version stamped on every saved snapshot
pub const SNAPSHOT_FORMAT_VERSION: &str = "1.0";

/// The kind of step a node represents in an automation workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Entry point that starts a workflow (schedule, inbound API call)
    Trigger,
    /// A concrete unit of work (API call, email, script)
    Action,
    /// A branch point
    Condition,
}

/// Immutable catalog entry for a draggable node kind
///
/// Templates live for the whole process, so their text fields are static.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodeTemplate {
    pub kind: NodeKind,
    pub label: &'static str,
    /// Tag the rendering layer maps to an icon and accent color (e.g., "clock")
    pub category: &'static str,
}

/// A point in canvas-local (or client) coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`
    pub fn offset_by(self, other: Position) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

/// Primitive value stored in a node's open config map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Open key/value configuration attached to a node. No schema is imposed.
pub type NodeConfig = BTreeMap<String, ConfigValue>;

/// A node instance placed on the canvas
///
/// `id`, `kind`, `label` and `category` are fixed at creation; only
/// `position`, `display_name` and `config` change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowNode {
    /// Unique identifier within the owning node store (uuid v4)
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
    pub category: String,
    /// Top-left corner in canvas-local coordinates
    pub position: Position,
    /// User-editable name, empty until the user types one
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub config: NodeConfig,
}

/// Partial update merged into an existing node
///
/// Absent fields are left untouched. A supplied `config` replaces the
/// previous map wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<NodeConfig>,
}

impl NodeUpdate {
    pub fn display_name(name: impl Into<String>) -> Self {
        Self {
            display_name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn position(position: Position) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }
}

/// Lifecycle status shown in the workflow list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    #[default]
    Draft,
    Active,
}

/// Entry in the workflow list view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSummary {
    pub id: String,
    pub name: String,
    pub status: WorkflowStatus,
    /// Human readable "last run" marker; `None` when the workflow never ran
    pub last_run: Option<String>,
}

impl WorkflowSummary {
    /// Label shown in the list view ("Never" for workflows that never ran)
    pub fn last_run_label(&self) -> &str {
        self.last_run.as_deref().unwrap_or("Never")
    }
}

/// Point-in-time, persistable representation of one workflow's canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSnapshot {
    pub id: String,
    pub name: String,
    pub nodes: Vec<WorkflowNode>,
    pub version: String,
    pub created_at: DateTime<Utc>,
}
