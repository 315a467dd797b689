//! Discovery snapshots.
//!
//! Platform device enumeration lives outside this workspace; what crosses
//! the boundary is a snapshot: the config list one discovery pass produced,
//! stamped with when it ran. Snapshots round-trip through JSON so hosts can
//! persist them or feed them to the planner out of process.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::source::SourceConfig;

/// Errors raised while reading or writing discovery snapshots.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// The outcome of one discovery pass over the attached devices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoverySnapshot {
    /// Snapshot schema version.
    pub version: String,

    /// RFC 3339 timestamp of the discovery pass.
    pub discovered_at: String,

    /// Discovered source configs, in enumeration order.
    pub sources: Vec<SourceConfig>,
}

impl DiscoverySnapshot {
    /// Wrap a freshly discovered config list, stamped with the current time.
    pub fn new(sources: Vec<SourceConfig>) -> Self {
        DiscoverySnapshot {
            version: "1.0".to_string(),
            discovered_at: chrono::Utc::now().to_rfc3339(),
            sources,
        }
    }

    /// Parse a snapshot from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the snapshot to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref().to_path_buf();
        let json = std::fs::read_to_string(&path).map_err(|source| SnapshotError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| SnapshotError::Parse { path, source })
    }

    /// Save the snapshot to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let path = path.as_ref().to_path_buf();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json).map_err(|source| SnapshotError::Io { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::CameraDriver;
    use crate::format::PixelFormat;

    fn sample_snapshot() -> DiscoverySnapshot {
        DiscoverySnapshot::new(vec![
            SourceConfig {
                name: "front".to_string(),
                driver: CameraDriver::V4l2,
                device: "/dev/video0".to_string(),
                format: PixelFormat::Yuyv,
                ..Default::default()
            },
            SourceConfig {
                name: "rear".to_string(),
                driver: CameraDriver::V4l2,
                device: "/dev/video2".to_string(),
                format: PixelFormat::Yuyv,
                color: false,
                ..Default::default()
            },
        ])
    }

    #[test]
    fn test_snapshot_json_round_trip() {
        let snapshot = sample_snapshot();
        let json = snapshot.to_json().unwrap();
        let parsed = DiscoverySnapshot::from_json(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn test_snapshot_stamp_is_rfc3339() {
        let snapshot = sample_snapshot();
        assert!(chrono::DateTime::parse_from_rfc3339(&snapshot.discovered_at).is_ok());
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(DiscoverySnapshot::from_json("{ not json").is_err());
    }
}
