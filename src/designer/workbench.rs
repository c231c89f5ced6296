/// Workbench: the workflow list plus the active designer session
///
/// Owns the summary registry and decides which view is showing. Entering the
/// designer (new or existing workflow) opens a session; switching away drops it
/// without saving.

use crate::config::{CanvasConfig, Config, ReopenPolicy};
use crate::designer::session::DesignerSession;
use crate::workflow::registry::WorkflowRegistry;
use crate::workflow::types::{WorkflowSnapshot, WorkflowSummary};
use serde::{Deserialize, Serialize};

/// Top-level screen; exactly one is active at a time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    List,
    Designer,
    Monitor,
}

#[derive(Debug)]
pub struct Workbench {
    registry: WorkflowRegistry,
    canvas: CanvasConfig,
    view: View,
    /// Present exactly when `view == View::Designer`
    session: Option<DesignerSession>,
}

impl Workbench {
    pub fn new(registry: WorkflowRegistry, canvas: CanvasConfig) -> Self {
        Self {
            registry,
            canvas,
            view: View::List,
            session: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let registry = if config.collection.seed_samples {
            WorkflowRegistry::with_samples()
        } else {
            WorkflowRegistry::new()
        };
        Self::new(registry, config.canvas)
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn list_workflows(&self) -> &[WorkflowSummary] {
        self.registry.list_workflows()
    }

    pub fn session(&self) -> Option<&DesignerSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut DesignerSession> {
        self.session.as_mut()
    }

    /// Create a draft workflow and open it in the designer with an empty canvas
    pub fn create_workflow(&mut self) -> WorkflowSummary {
        let summary = self.registry.create_workflow();
        self.enter_designer(DesignerSession::new(&summary, &self.canvas));
        summary
    }

    /// Open an existing workflow in the designer
    ///
    /// The canvas starts empty unless the reopen policy restores the last
    /// snapshot saved in this process. Unknown ids leave the current view as is.
    pub fn open_workflow(&mut self, workflow_id: &str) -> Option<WorkflowSummary> {
        let Some(summary) = self.registry.get_workflow(workflow_id).cloned() else {
            tracing::warn!("Ignoring open of unknown workflow: {}", workflow_id);
            return None;
        };

        let saved = match self.canvas.reopen_policy {
            ReopenPolicy::Empty => None,
            ReopenPolicy::RestoreFromSnapshot => self.registry.saved_snapshot(workflow_id),
        };
        let session = match saved {
            Some(snapshot) => DesignerSession::restore(&summary, snapshot, &self.canvas),
            None => DesignerSession::new(&summary, &self.canvas),
        };
        self.enter_designer(session);

        tracing::info!("Opened workflow: {} ({})", summary.id, summary.name);
        Some(summary)
    }

    /// Rename the workflow being designed; the list picks it up on save
    pub fn rename_current(&mut self, name: impl Into<String>) -> bool {
        match self.session.as_mut() {
            Some(session) => {
                session.rename(name);
                true
            }
            None => false,
        }
    }

    /// Snapshot the open workflow without touching the list
    ///
    /// Returns `None` outside the designer. Handing the snapshot to a
    /// persistence collaborator is the caller's job; only once it is accepted
    /// should the caller `commit_save` it.
    pub fn snapshot_current(&self) -> Option<WorkflowSnapshot> {
        self.session.as_ref().map(DesignerSession::snapshot)
    }

    /// Write an accepted snapshot back into its summary
    ///
    /// Renames the list entry and remembers the snapshot for the restore
    /// policy. A snapshot whose persistence failed must not be committed.
    pub fn commit_save(&mut self, snapshot: &WorkflowSnapshot) -> bool {
        if !self.registry.record_save(snapshot) {
            return false;
        }

        tracing::info!(
            "Saved workflow: {} ({}) with {} nodes",
            snapshot.id,
            snapshot.name,
            snapshot.nodes.len()
        );
        true
    }

    /// Switch screens
    ///
    /// Leaving the designer discards the session. The designer itself can only
    /// be entered through `create_workflow` or `open_workflow`, so asking for it
    /// directly just reports whether it is already showing.
    pub fn switch_view(&mut self, view: View) -> bool {
        match view {
            View::Designer => self.view == View::Designer,
            View::List | View::Monitor => {
                if self.session.take().is_some() {
                    tracing::debug!("Discarded unsaved designer session");
                }
                self.view = view;
                tracing::info!("Switched to {:?} view", view);
                true
            }
        }
    }

    fn enter_designer(&mut self, session: DesignerSession) {
        self.session = Some(session);
        self.view = View::Designer;
    }
}
