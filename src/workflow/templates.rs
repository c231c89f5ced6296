/// Node template catalog
///
/// The fixed palette of node kinds a user can drag onto the canvas. Consumed by
/// the palette UI and by the canvas controller when stamping new nodes.

use crate::workflow::types::{NodeKind, NodeTemplate};

static TEMPLATES: [NodeTemplate; 6] = [
    NodeTemplate { kind: NodeKind::Trigger, label: "Schedule Trigger", category: "clock" },
    NodeTemplate { kind: NodeKind::Trigger, label: "API Trigger", category: "zap" },
    NodeTemplate { kind: NodeKind::Action, label: "API Call", category: "database" },
    NodeTemplate { kind: NodeKind::Action, label: "Send Email", category: "mail" },
    NodeTemplate { kind: NodeKind::Action, label: "Run Script", category: "code" },
    NodeTemplate { kind: NodeKind::Condition, label: "If/Else", category: "git-branch" },
];

/// All templates in palette order
pub fn list_templates() -> &'static [NodeTemplate] {
    &TEMPLATES
}

/// Look up a template by its label (labels are unique within the catalog)
pub fn find_template(label: &str) -> Option<NodeTemplate> {
    TEMPLATES.iter().find(|t| t.label == label).copied()
}
