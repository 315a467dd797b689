//! Synthetic capture backend.
//!
//! A deterministic in-memory source for tests and development rigs. Every
//! frame it delivers is filled with a single byte derived from the device
//! identifier, so mosaics built from synthetic sources can be checked tile
//! by tile.

use std::collections::HashMap;

use gridcam_camera_model::{BufferFormat, CameraDriver, CameraSetting, SourceConfig};

use crate::source::{CaptureSource, SourceFactory};

const SETTING_MIN: i32 = 0;
const SETTING_MAX: i32 = 255;
const SETTING_DEFAULT: i32 = 128;
const SETTING_STEP: i32 = 1;

/// In-memory capture source with fully deterministic output.
///
/// Supports every setting mode over a fixed 0..=255 range. The frame
/// buffer is allocated on `init` and sized from the config's geometry and
/// color flag.
pub struct SyntheticCamera {
    config: SourceConfig,
    frame: Option<Vec<u8>>,
    running: bool,
    values: HashMap<CameraSetting, i32>,
    autos: HashMap<CameraSetting, bool>,
}

impl SyntheticCamera {
    /// Create a synthetic source for `config`.
    pub fn new(mut config: SourceConfig) -> Self {
        config.derive_buffer_format();
        SyntheticCamera {
            config,
            frame: None,
            running: false,
            values: HashMap::new(),
            autos: HashMap::new(),
        }
    }

    /// The byte every frame from `device` is filled with: the wrapping sum
    /// of the identifier's bytes.
    pub fn fill_byte(device: &str) -> u8 {
        device.bytes().fold(0u8, |acc, b| acc.wrapping_add(b))
    }

    /// The config this source was created from.
    pub fn config(&self) -> &SourceConfig {
        &self.config
    }
}

impl CaptureSource for SyntheticCamera {
    fn init(&mut self) -> bool {
        let fill = Self::fill_byte(&self.config.device);
        self.frame = Some(vec![fill; self.config.frame_bytes()]);
        true
    }

    fn close(&mut self) -> bool {
        self.frame = None;
        self.running = false;
        true
    }

    fn start(&mut self) -> bool {
        if self.frame.is_none() {
            return false;
        }
        self.running = true;
        true
    }

    fn stop(&mut self) -> bool {
        self.running = false;
        true
    }

    fn reset(&mut self) -> bool {
        self.frame.is_some()
    }

    fn next_frame(&mut self) -> Option<&[u8]> {
        if !self.running {
            return None;
        }
        self.frame.as_deref()
    }

    fn width(&self) -> u32 {
        self.config.width
    }

    fn height(&self) -> u32 {
        self.config.height
    }

    fn fps(&self) -> u32 {
        self.config.fps
    }

    fn format(&self) -> BufferFormat {
        self.config.buffer_format
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn setting(&self, mode: CameraSetting) -> i32 {
        self.values.get(&mode).copied().unwrap_or(SETTING_DEFAULT)
    }

    fn setting_min(&self, _mode: CameraSetting) -> i32 {
        SETTING_MIN
    }

    fn setting_max(&self, _mode: CameraSetting) -> i32 {
        SETTING_MAX
    }

    fn setting_default(&self, _mode: CameraSetting) -> i32 {
        SETTING_DEFAULT
    }

    fn setting_step(&self, _mode: CameraSetting) -> i32 {
        SETTING_STEP
    }

    fn has_setting(&self, _mode: CameraSetting) -> bool {
        true
    }

    fn setting_auto(&self, mode: CameraSetting) -> bool {
        self.autos.get(&mode).copied().unwrap_or(false)
    }

    fn has_setting_auto(&self, _mode: CameraSetting) -> bool {
        true
    }

    fn set_setting(&mut self, mode: CameraSetting, value: i32) -> bool {
        if !(SETTING_MIN..=SETTING_MAX).contains(&value) {
            return false;
        }
        self.values.insert(mode, value);
        true
    }

    fn set_setting_auto(&mut self, mode: CameraSetting, auto: bool) -> bool {
        self.autos.insert(mode, auto);
        true
    }

    fn set_default_setting(&mut self, mode: CameraSetting) -> bool {
        self.values.insert(mode, SETTING_DEFAULT);
        true
    }

    fn log_info(&self) {
        tracing::info!(
            name = %self.config.name,
            device = %self.config.device,
            width = self.config.width,
            height = self.config.height,
            fps = self.config.fps,
            format = %self.config.buffer_format,
            "synthetic source"
        );
    }
}

/// Factory for synthetic sources.
///
/// Accepts only configs carrying [`CameraDriver::Synthetic`].
#[derive(Debug, Default)]
pub struct SyntheticFactory;

impl SourceFactory for SyntheticFactory {
    fn create(&self, config: &SourceConfig) -> Option<Box<dyn CaptureSource>> {
        if config.driver != CameraDriver::Synthetic {
            return None;
        }
        Some(Box::new(SyntheticCamera::new(config.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthetic_config(device: &str) -> SourceConfig {
        SourceConfig {
            name: format!("synthetic {device}"),
            device: device.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_lifecycle_gates_frame_delivery() {
        let mut cam = SyntheticCamera::new(synthetic_config("synth0"));

        assert!(!cam.start());
        assert!(cam.next_frame().is_none());

        assert!(cam.init());
        assert!(cam.next_frame().is_none());

        assert!(cam.start());
        assert!(cam.is_running());
        let expected = SyntheticCamera::fill_byte("synth0");
        let frame = cam.next_frame().unwrap();
        assert_eq!(frame.len(), 640 * 480 * 3);
        assert!(frame.iter().all(|&b| b == expected));

        assert!(cam.stop());
        assert!(!cam.is_running());
        assert!(cam.next_frame().is_none());

        assert!(cam.close());
        assert!(!cam.start());
    }

    #[test]
    fn test_mono_config_allocates_one_byte_per_pixel() {
        let mut config = synthetic_config("synth1");
        config.color = false;
        let mut cam = SyntheticCamera::new(config);

        assert_eq!(cam.format(), BufferFormat::Gray);
        assert!(cam.init());
        assert!(cam.start());
        assert_eq!(cam.next_frame().unwrap().len(), 640 * 480);
    }

    #[test]
    fn test_settings_round_trip_and_clamp() {
        let mut cam = SyntheticCamera::new(synthetic_config("synth2"));
        let mode = CameraSetting::Brightness;

        assert!(cam.has_setting(mode));
        assert_eq!(cam.setting(mode), SETTING_DEFAULT);
        assert!(cam.set_setting(mode, 42));
        assert_eq!(cam.setting(mode), 42);

        assert!(!cam.set_setting(mode, 300));
        assert!(!cam.set_setting(mode, -1));
        assert_eq!(cam.setting(mode), 42);

        assert!(cam.set_default_setting(mode));
        assert_eq!(cam.setting(mode), SETTING_DEFAULT);
    }

    #[test]
    fn test_auto_mode_toggles_independently() {
        let mut cam = SyntheticCamera::new(synthetic_config("synth3"));

        assert!(!cam.setting_auto(CameraSetting::Exposure));
        assert!(cam.set_setting_auto(CameraSetting::Exposure, true));
        assert!(cam.setting_auto(CameraSetting::Exposure));
        assert!(!cam.setting_auto(CameraSetting::Focus));
    }

    #[test]
    fn test_factory_rejects_foreign_drivers() {
        let factory = SyntheticFactory;
        let mut config = synthetic_config("synth4");
        assert!(factory.create(&config).is_some());

        config.driver = CameraDriver::V4l2;
        assert!(factory.create(&config).is_none());

        config.driver = CameraDriver::Grid;
        assert!(factory.create(&config).is_none());
    }

    #[test]
    fn test_fill_byte_is_stable_per_device() {
        assert_eq!(
            SyntheticCamera::fill_byte("synth0"),
            SyntheticCamera::fill_byte("synth0")
        );
        assert_ne!(
            SyntheticCamera::fill_byte("synth0"),
            SyntheticCamera::fill_byte("synth1")
        );
    }
}
