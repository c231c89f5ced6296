/// Workflow node store
///
/// The ordered collection of nodes placed on the canvas for one designer
/// session. Insertion order doubles as z-order: later nodes render on top.
/// Lookups by a missing id are tolerated as no-ops throughout.

use crate::workflow::types::{NodeTemplate, NodeUpdate, Position, WorkflowNode};

/// In-memory, single-session node collection
#[derive(Debug, Clone)]
pub struct NodeStore {
    nodes: Vec<WorkflowNode>,
    /// Position used when a node is created without coordinates
    default_origin: Position,
}

impl NodeStore {
    pub fn new(default_origin: Position) -> Self {
        Self {
            nodes: Vec::new(),
            default_origin,
        }
    }

    /// Rebuild a store from previously saved nodes, keeping their order
    pub fn from_nodes(nodes: Vec<WorkflowNode>, default_origin: Position) -> Self {
        Self { nodes, default_origin }
    }

    /// Stamp a new node from a template and append it on top
    pub fn create_node(&mut self, template: &NodeTemplate, position: Option<Position>) -> WorkflowNode {
        let node = WorkflowNode {
            id: uuid::Uuid::new_v4().to_string(),
            kind: template.kind,
            label: template.label.to_string(),
            category: template.category.to_string(),
            position: position.unwrap_or(self.default_origin),
            display_name: String::new(),
            config: Default::default(),
        };
        self.nodes.push(node.clone());

        tracing::debug!(
            "Created node {} ({}) at ({}, {})",
            node.id,
            node.label,
            node.position.x,
            node.position.y
        );
        node
    }

    /// Merge a partial update into the node with `node_id`
    ///
    /// Returns `false` when no such node exists.
    pub fn update_node(&mut self, node_id: &str, update: NodeUpdate) -> bool {
        let Some(node) = self.get_mut(node_id) else {
            tracing::warn!("Ignoring update for unknown node: {}", node_id);
            return false;
        };

        if let Some(display_name) = update.display_name {
            node.display_name = display_name;
        }
        if let Some(position) = update.position {
            node.position = position;
        }
        if let Some(config) = update.config {
            node.config = config;
        }
        true
    }

    /// Remove the node with `node_id`, returning it if it was present
    pub fn delete_node(&mut self, node_id: &str) -> Option<WorkflowNode> {
        let index = self.nodes.iter().position(|n| n.id == node_id)?;
        let removed = self.nodes.remove(index);
        tracing::debug!("Deleted node {}", removed.id);
        Some(removed)
    }

    /// Read-only view of every node in z-order
    pub fn list_nodes(&self) -> &[WorkflowNode] {
        &self.nodes
    }

    pub fn get(&self, node_id: &str) -> Option<&WorkflowNode> {
        self.nodes.iter().find(|n| n.id == node_id)
    }

    fn get_mut(&mut self, node_id: &str) -> Option<&mut WorkflowNode> {
        self.nodes.iter_mut().find(|n| n.id == node_id)
    }

    pub fn contains(&self, node_id: &str) -> bool {
        self.get(node_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::templates::find_template;
    use crate::workflow::types::{ConfigValue, NodeConfig, NodeKind};
    use std::collections::HashSet;

    fn store() -> NodeStore {
        NodeStore::new(Position::new(100.0, 100.0))
    }

    fn api_call() -> NodeTemplate {
        find_template("API Call").unwrap()
    }

    #[test]
    fn create_node_copies_template_fields() {
        let mut store = store();
        store.create_node(&api_call(), Some(Position::new(40.0, 40.0)));

        let nodes = store.list_nodes();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].kind, NodeKind::Action);
        assert_eq!(nodes[0].label, "API Call");
        assert_eq!(nodes[0].category, "database");
        assert_eq!(nodes[0].position, Position::new(40.0, 40.0));
        assert_eq!(nodes[0].display_name, "");
        assert!(nodes[0].config.is_empty());
    }

    #[test]
    fn create_node_without_position_uses_default_origin() {
        let mut store = store();
        let node = store.create_node(&api_call(), None);
        assert_eq!(node.position, Position::new(100.0, 100.0));
    }

    #[test]
    fn node_ids_are_pairwise_distinct() {
        let mut store = store();
        for template in crate::workflow::templates::list_templates().iter().cycle().take(60) {
            store.create_node(template, None);
        }
        let ids: HashSet<&str> = store.list_nodes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids.len(), 60);
    }

    #[test]
    fn update_display_name_leaves_other_fields() {
        let mut store = store();
        let before = store.create_node(&api_call(), Some(Position::new(10.0, 20.0)));

        assert!(store.update_node(&before.id, NodeUpdate::display_name("x")));

        let after = store.get(&before.id).unwrap();
        assert_eq!(after.display_name, "x");
        assert_eq!(
            WorkflowNode {
                display_name: String::new(),
                ..after.clone()
            },
            before
        );
    }

    #[test]
    fn update_merges_position_and_replaces_config() {
        let mut store = store();
        let node = store.create_node(&api_call(), None);
        store.update_node(
            &node.id,
            NodeUpdate {
                config: Some(NodeConfig::from([("url".to_string(), ConfigValue::from("a"))])),
                ..NodeUpdate::default()
            },
        );
        store.update_node(
            &node.id,
            NodeUpdate {
                position: Some(Position::new(5.0, 6.0)),
                config: Some(NodeConfig::from([("method".to_string(), ConfigValue::from("GET"))])),
                ..NodeUpdate::default()
            },
        );

        let node = store.get(&node.id).unwrap();
        assert_eq!(node.position, Position::new(5.0, 6.0));
        assert_eq!(node.config.len(), 1);
        assert_eq!(node.config["method"], ConfigValue::from("GET"));
    }

    #[test]
    fn update_unknown_node_is_noop() {
        let mut store = store();
        store.create_node(&api_call(), None);
        let before = store.list_nodes().to_vec();

        assert!(!store.update_node("missing", NodeUpdate::display_name("x")));
        assert_eq!(store.list_nodes(), before.as_slice());
    }

    #[test]
    fn delete_preserves_order_of_remaining_nodes() {
        let mut store = store();
        let a = store.create_node(&api_call(), None);
        let b = store.create_node(&api_call(), None);
        let c = store.create_node(&api_call(), None);

        assert_eq!(store.delete_node(&b.id).map(|n| n.id), Some(b.id.clone()));

        let ids: Vec<&str> = store.list_nodes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, [a.id.as_str(), c.id.as_str()]);
    }

    #[test]
    fn delete_is_idempotent() {
        let mut store = store();
        let a = store.create_node(&api_call(), None);
        store.create_node(&api_call(), None);

        assert!(store.delete_node(&a.id).is_some());
        assert!(store.delete_node(&a.id).is_none());
        assert_eq!(store.len(), 1);
    }
}
