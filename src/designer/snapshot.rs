/// Snapshot construction for saved workflows

use crate::workflow::types::{WorkflowNode, WorkflowSnapshot, SNAPSHOT_FORMAT_VERSION};

/// Build a persistable snapshot of a workflow's canvas
///
/// Copies the nodes; the caller's store is never touched. No validation is
/// performed, so an empty canvas produces a valid snapshot.
pub fn save_workflow(workflow_id: &str, name: &str, nodes: &[WorkflowNode]) -> WorkflowSnapshot {
    WorkflowSnapshot {
        id: workflow_id.to_string(),
        name: name.to_string(),
        nodes: nodes.to_vec(),
        version: SNAPSHOT_FORMAT_VERSION.to_string(),
        created_at: chrono::Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::designer::store::NodeStore;
    use crate::workflow::templates::find_template;
    use crate::workflow::types::Position;

    #[test]
    fn snapshot_carries_name_nodes_and_timestamp() {
        let mut store = NodeStore::new(Position::new(100.0, 100.0));
        let a = store.create_node(&find_template("API Trigger").unwrap(), None);
        let b = store.create_node(&find_template("Send Email").unwrap(), None);

        let snapshot = save_workflow("wf-1", "My Flow", store.list_nodes());

        assert_eq!(snapshot.id, "wf-1");
        assert_eq!(snapshot.name, "My Flow");
        assert_eq!(snapshot.nodes, vec![a, b]);
        assert_eq!(snapshot.version, "1.0");
        assert!(!snapshot.created_at.to_rfc3339().is_empty());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn empty_canvas_saves() {
        let snapshot = save_workflow("wf-2", "Empty", &[]);
        assert!(snapshot.nodes.is_empty());

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["version"], "1.0");
        assert!(json["createdAt"].as_str().is_some_and(|ts| !ts.is_empty()));
    }
}
