//! Tunable camera setting modes.

use serde::{Deserialize, Serialize};

/// A per-device tunable setting forwarded through the capture contract.
///
/// Which modes a backend actually honors is the backend's business; the
/// contract only fixes how queries and writes travel. A grid composite
/// answers queries from its first child and fans writes out to every child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraSetting {
    Brightness,
    Contrast,
    Saturation,
    Sharpness,
    Gain,
    Exposure,
    Focus,
    WhiteBalance,
    Gamma,
    Hue,
}

impl CameraSetting {
    /// Every mode, for settings sweeps and diagnostic dumps.
    pub const ALL: [CameraSetting; 10] = [
        CameraSetting::Brightness,
        CameraSetting::Contrast,
        CameraSetting::Saturation,
        CameraSetting::Sharpness,
        CameraSetting::Gain,
        CameraSetting::Exposure,
        CameraSetting::Focus,
        CameraSetting::WhiteBalance,
        CameraSetting::Gamma,
        CameraSetting::Hue,
    ];
}

impl std::fmt::Display for CameraSetting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CameraSetting::Brightness => "brightness",
            CameraSetting::Contrast => "contrast",
            CameraSetting::Saturation => "saturation",
            CameraSetting::Sharpness => "sharpness",
            CameraSetting::Gain => "gain",
            CameraSetting::Exposure => "exposure",
            CameraSetting::Focus => "focus",
            CameraSetting::WhiteBalance => "white_balance",
            CameraSetting::Gamma => "gamma",
            CameraSetting::Hue => "hue",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_mode() {
        assert_eq!(CameraSetting::ALL.len(), 10);
        assert!(CameraSetting::ALL.contains(&CameraSetting::WhiteBalance));
    }

    #[test]
    fn test_setting_serde_names() {
        let json = serde_json::to_string(&CameraSetting::WhiteBalance).unwrap();
        assert_eq!(json, "\"white_balance\"");
        let parsed: CameraSetting = serde_json::from_str("\"exposure\"").unwrap();
        assert_eq!(parsed, CameraSetting::Exposure);
    }
}
