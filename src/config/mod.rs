/// Configuration management for the flowcanvas editor
///
/// Handles server configuration, canvas tuning values, collection defaults, and
/// the choice of snapshot store.

use crate::workflow::types::Position;
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Canvas interaction tuning
    pub canvas: CanvasConfig,
    /// Workflow collection defaults
    pub collection: CollectionConfig,
    /// Where saved snapshots go
    pub persistence: PersistenceConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address (e.g., "0.0.0.0")
    pub host: String,
    /// Server port number
    pub port: u16,
}

/// Canvas interaction configuration
///
/// These are visual tuning values, kept here so the controller logic never
/// hardcodes pixel constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasConfig {
    /// Correction subtracted from a drop point so the cursor lands inside the
    /// node instead of at its top-left corner (default: 100, 50)
    pub drop_offset: Position,
    /// Position used when a node is created without coordinates (default: 100, 100)
    pub default_origin: Position,
    /// What the designer shows when a previously saved workflow is reopened
    pub reopen_policy: ReopenPolicy,
}

/// Canvas contents on reopening a saved workflow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReopenPolicy {
    /// Reopened workflows start with an empty canvas. Summaries never carry
    /// node graphs, so this is the historical behavior.
    #[default]
    Empty,
    /// Reopened workflows are repopulated from their last saved snapshot
    RestoreFromSnapshot,
}

impl ReopenPolicy {
    /// Parse the env var form ("empty" / "restore")
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "empty" => Some(Self::Empty),
            "restore" | "restore-from-snapshot" => Some(Self::RestoreFromSnapshot),
            _ => None,
        }
    }
}

/// Workflow collection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionConfig {
    /// Seed the list view with the two sample workflows on startup
    pub seed_samples: bool,
}

/// Snapshot persistence configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistenceConfig {
    pub snapshot_store: SnapshotStoreKind,
}

/// Snapshot store backing the save action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SnapshotStoreKind {
    /// Keep the latest snapshot per workflow for the lifetime of the process
    #[default]
    Memory,
    /// Log each snapshot as JSON and acknowledge it
    Log,
}

impl SnapshotStoreKind {
    /// Parse the env var form ("memory" / "log")
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" => Some(Self::Memory),
            "log" => Some(Self::Log),
            _ => None,
        }
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            drop_offset: Position::new(100.0, 50.0),
            default_origin: Position::new(100.0, 100.0),
            reopen_policy: ReopenPolicy::Empty,
        }
    }
}

impl CanvasConfig {
    /// Canvas defaults overridden by FLOWCANVAS_* environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            drop_offset: Position::new(
                env_or("FLOWCANVAS_DROP_OFFSET_X", defaults.drop_offset.x),
                env_or("FLOWCANVAS_DROP_OFFSET_Y", defaults.drop_offset.y),
            ),
            default_origin: defaults.default_origin,
            reopen_policy: std::env::var("FLOWCANVAS_REOPEN_POLICY")
                .ok()
                .and_then(|v| ReopenPolicy::parse(&v))
                .unwrap_or(defaults.reopen_policy),
        }
    }
}

impl Default for Config {
    /// Default configuration with ENV_VAR support for container deployment
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: std::env::var("FLOWCANVAS_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env_or("FLOWCANVAS_PORT", 3004),
            },
            canvas: CanvasConfig::from_env(),
            collection: CollectionConfig {
                seed_samples: env_or("FLOWCANVAS_SEED_SAMPLES", true),
            },
            persistence: PersistenceConfig {
                snapshot_store: std::env::var("FLOWCANVAS_SNAPSHOT_STORE")
                    .ok()
                    .and_then(|v| SnapshotStoreKind::parse(&v))
                    .unwrap_or_default(),
            },
        }
    }
}

/// Read and parse an environment variable, falling back on absence or parse failure
fn env_or<T: std::str::FromStr>(key: &str, fallback: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_defaults_match_drop_correction() {
        let canvas = CanvasConfig::default();
        assert_eq!(canvas.drop_offset, Position::new(100.0, 50.0));
        assert_eq!(canvas.default_origin, Position::new(100.0, 100.0));
        assert_eq!(canvas.reopen_policy, ReopenPolicy::Empty);
    }

    #[test]
    fn reopen_policy_parses_env_forms() {
        assert_eq!(ReopenPolicy::parse("empty"), Some(ReopenPolicy::Empty));
        assert_eq!(ReopenPolicy::parse(" Restore "), Some(ReopenPolicy::RestoreFromSnapshot));
        assert_eq!(ReopenPolicy::parse("sometimes"), None);
    }

    #[test]
    fn snapshot_store_parses_env_forms() {
        assert_eq!(SnapshotStoreKind::parse("memory"), Some(SnapshotStoreKind::Memory));
        assert_eq!(SnapshotStoreKind::parse(" LOG "), Some(SnapshotStoreKind::Log));
        assert_eq!(SnapshotStoreKind::parse("sqlite"), None);
        assert_eq!(PersistenceConfig::default().snapshot_store, SnapshotStoreKind::Memory);
    }

    #[test]
    fn env_or_falls_back_on_garbage() {
        assert_eq!(env_or("FLOWCANVAS_TEST_UNSET_VARIABLE", 7u16), 7);
    }
}
