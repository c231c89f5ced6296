/// Workflow collection registry
///
/// Holds the workflow summaries shown in the list view, in creation order, and
/// the last snapshot saved for each workflow. Summaries are never removed.

use crate::workflow::types::{WorkflowSnapshot, WorkflowStatus, WorkflowSummary};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

/// Name given to every freshly created workflow
pub const DEFAULT_WORKFLOW_NAME: &str = "New Workflow";

/// Last workflow id handed out, shared by every registry in the process
static LAST_WORKFLOW_ID: AtomicI64 = AtomicI64::new(0);

/// Allocate a time-based workflow id that is strictly increasing for the
/// lifetime of the process, even when two calls land in the same millisecond.
fn next_workflow_id() -> String {
    let now = chrono::Utc::now().timestamp_millis();
    let previous = LAST_WORKFLOW_ID
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now.max(last + 1))
        })
        .unwrap_or_else(|last| last);
    now.max(previous + 1).to_string()
}

/// In-memory registry of workflow summaries
#[derive(Debug, Default)]
pub struct WorkflowRegistry {
    /// Summaries in creation order
    workflows: Vec<WorkflowSummary>,
    /// Last saved snapshot per workflow id
    saved: HashMap<String, WorkflowSnapshot>,
}

impl WorkflowRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with the sample workflows shown on first launch
    pub fn with_samples() -> Self {
        Self {
            workflows: vec![
                WorkflowSummary {
                    id: "1".to_string(),
                    name: "Email Notification Workflow".to_string(),
                    status: WorkflowStatus::Active,
                    last_run: Some("2 hours ago".to_string()),
                },
                WorkflowSummary {
                    id: "2".to_string(),
                    name: "Data Processing Pipeline".to_string(),
                    status: WorkflowStatus::Draft,
                    last_run: None,
                },
            ],
            saved: HashMap::new(),
        }
    }

    /// All summaries in insertion order
    pub fn list_workflows(&self) -> &[WorkflowSummary] {
        &self.workflows
    }

    /// Append a new draft workflow and return its summary
    pub fn create_workflow(&mut self) -> WorkflowSummary {
        let summary = WorkflowSummary {
            id: next_workflow_id(),
            name: DEFAULT_WORKFLOW_NAME.to_string(),
            status: WorkflowStatus::Draft,
            last_run: None,
        };
        self.workflows.push(summary.clone());

        tracing::info!("Created workflow: {}", summary.id);
        summary
    }

    /// Look up a summary by id
    pub fn get_workflow(&self, workflow_id: &str) -> Option<&WorkflowSummary> {
        self.workflows.iter().find(|w| w.id == workflow_id)
    }

    /// Write a saved snapshot back into the matching record
    ///
    /// Updates the summary's display name and remembers the snapshot for the
    /// restore-on-reopen policy. Unknown ids are ignored.
    pub fn record_save(&mut self, snapshot: &WorkflowSnapshot) -> bool {
        let Some(summary) = self.workflows.iter_mut().find(|w| w.id == snapshot.id) else {
            tracing::warn!("Save recorded for unknown workflow: {}", snapshot.id);
            return false;
        };
        summary.name = snapshot.name.clone();
        self.saved.insert(snapshot.id.clone(), snapshot.clone());
        true
    }

    /// Last snapshot saved for a workflow during this process
    pub fn saved_snapshot(&self, workflow_id: &str) -> Option<&WorkflowSnapshot> {
        self.saved.get(workflow_id)
    }

    pub fn len(&self) -> usize {
        self.workflows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workflows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::types::SNAPSHOT_FORMAT_VERSION;

    fn snapshot(id: &str, name: &str) -> WorkflowSnapshot {
        WorkflowSnapshot {
            id: id.to_string(),
            name: name.to_string(),
            nodes: Vec::new(),
            version: SNAPSHOT_FORMAT_VERSION.to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn create_twice_yields_distinct_drafts() {
        let mut registry = WorkflowRegistry::new();
        let first = registry.create_workflow();
        let second = registry.create_workflow();

        assert_ne!(first.id, second.id);
        assert_eq!(registry.len(), 2);
        for summary in registry.list_workflows() {
            assert_eq!(summary.name, DEFAULT_WORKFLOW_NAME);
            assert_eq!(summary.status, WorkflowStatus::Draft);
            assert_eq!(summary.last_run, None);
        }
    }

    #[test]
    fn ids_stay_unique_under_rapid_creation() {
        let mut registry = WorkflowRegistry::new();
        let ids: std::collections::HashSet<String> =
            (0..500).map(|_| registry.create_workflow().id).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn samples_keep_insertion_order() {
        let mut registry = WorkflowRegistry::with_samples();
        let created = registry.create_workflow();

        let names: Vec<&str> = registry.list_workflows().iter().map(|w| w.name.as_str()).collect();
        assert_eq!(
            names,
            ["Email Notification Workflow", "Data Processing Pipeline", "New Workflow"]
        );
        assert_eq!(registry.list_workflows()[2].id, created.id);
        assert_eq!(registry.list_workflows()[0].status, WorkflowStatus::Active);
    }

    #[test]
    fn record_save_renames_summary_and_keeps_snapshot() {
        let mut registry = WorkflowRegistry::new();
        let created = registry.create_workflow();

        assert!(registry.record_save(&snapshot(&created.id, "My Flow")));
        assert_eq!(registry.get_workflow(&created.id).unwrap().name, "My Flow");
        assert_eq!(registry.saved_snapshot(&created.id).unwrap().name, "My Flow");
    }

    #[test]
    fn record_save_ignores_unknown_workflow() {
        let mut registry = WorkflowRegistry::new();
        assert!(!registry.record_save(&snapshot("missing", "Ghost")));
        assert!(registry.saved_snapshot("missing").is_none());
    }
}
