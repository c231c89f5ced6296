/// Snapshot persistence collaborators
///
/// The editor hands every saved snapshot to a `SnapshotStore`. The core never
/// retries or inspects the outcome beyond reporting success or failure, so the
/// store is free to be a log sink, an in-memory map, or a remote service.

use crate::{config::SnapshotStoreKind, workflow::types::WorkflowSnapshot};
use anyhow::Result;
use arc_swap::ArcSwap;
use async_trait::async_trait;
use serde::Serialize;
use std::{collections::HashMap, sync::Arc};

/// Destination for saved workflow snapshots
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Persist one snapshot, replacing any earlier snapshot with the same id
    async fn persist(&self, snapshot: &WorkflowSnapshot) -> Result<()>;
}

/// Outcome of a save, as reported to the user-facing layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SaveAck {
    Saved,
    Failed { message: String },
}

/// Hand a snapshot to the store and translate the result into an ack
///
/// Failures are logged and reported once; nothing is retried.
pub async fn persist_with_ack(store: &dyn SnapshotStore, snapshot: &WorkflowSnapshot) -> SaveAck {
    match store.persist(snapshot).await {
        Ok(()) => SaveAck::Saved,
        Err(e) => {
            tracing::error!("Failed to persist workflow {}: {}", snapshot.id, e);
            SaveAck::Failed {
                message: e.to_string(),
            }
        }
    }
}

/// Build the store selected by configuration
pub fn build_snapshot_store(kind: SnapshotStoreKind) -> Arc<dyn SnapshotStore> {
    tracing::info!("💾 Using {:?} snapshot store", kind);
    match kind {
        SnapshotStoreKind::Memory => Arc::new(MemorySnapshotStore::new()),
        SnapshotStoreKind::Log => Arc::new(LogSnapshotStore),
    }
}

/// Store that only logs the snapshot and acknowledges it
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSnapshotStore;

#[async_trait]
impl SnapshotStore for LogSnapshotStore {
    async fn persist(&self, snapshot: &WorkflowSnapshot) -> Result<()> {
        let json = serde_json::to_string(snapshot)?;
        tracing::info!("Saving workflow: {}", json);
        Ok(())
    }
}

/// Lock-free in-memory snapshot store
///
/// Uses ArcSwap so readers (list endpoints, tests) never contend with a save
/// in progress. Each write publishes a fresh map.
#[derive(Debug)]
pub struct MemorySnapshotStore {
    /// Key: workflow_id, Value: latest snapshot
    snapshots: ArcSwap<HashMap<String, WorkflowSnapshot>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self {
            snapshots: ArcSwap::new(Arc::new(HashMap::new())),
        }
    }

    /// Latest snapshot for a workflow (lock-free read)
    pub fn get_snapshot(&self, workflow_id: &str) -> Option<WorkflowSnapshot> {
        self.snapshots.load().get(workflow_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.snapshots.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.load().is_empty()
    }
}

impl Default for MemorySnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnapshotStore for MemorySnapshotStore {
    async fn persist(&self, snapshot: &WorkflowSnapshot) -> Result<()> {
        self.snapshots.rcu(|current| {
            let mut next = (**current).clone();
            next.insert(snapshot.id.clone(), snapshot.clone());
            next
        });

        tracing::debug!(
            "Stored snapshot for workflow {} ({} nodes)",
            snapshot.id,
            snapshot.nodes.len()
        );
        Ok(())
    }
}
