//! Capture backend identifiers.

use serde::{Deserialize, Serialize};

/// Identifies the capture backend a source config belongs to.
///
/// Compatibility grouping never mixes drivers. [`CameraDriver::Grid`] marks
/// the synthesized composite configs the layout planner emits; the engine
/// rejects it on child configs, so grids never nest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraDriver {
    /// Video4Linux2 device node.
    V4l2,
    /// Portable UVC backend.
    Uvc,
    /// Pre-recorded file playback.
    File,
    /// Deterministic in-memory source for tests and development.
    Synthetic,
    /// Grid composite synthesized by the layout planner.
    Grid,
}

impl CameraDriver {
    /// Whether this is the composite marker rather than a real backend.
    pub fn is_grid(&self) -> bool {
        matches!(self, CameraDriver::Grid)
    }
}

impl std::fmt::Display for CameraDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CameraDriver::V4l2 => "v4l2",
            CameraDriver::Uvc => "uvc",
            CameraDriver::File => "file",
            CameraDriver::Synthetic => "synthetic",
            CameraDriver::Grid => "grid",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_marker() {
        assert!(CameraDriver::Grid.is_grid());
        assert!(!CameraDriver::V4l2.is_grid());
        assert!(!CameraDriver::Synthetic.is_grid());
    }

    #[test]
    fn test_driver_serde_names() {
        let json = serde_json::to_string(&CameraDriver::V4l2).unwrap();
        assert_eq!(json, "\"v4l2\"");
        let parsed: CameraDriver = serde_json::from_str("\"grid\"").unwrap();
        assert_eq!(parsed, CameraDriver::Grid);
    }
}
