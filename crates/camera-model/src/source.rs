//! Source configuration records.

use serde::{Deserialize, Serialize};

use crate::driver::CameraDriver;
use crate::format::{BufferFormat, PixelFormat};

/// Describes one capture source.
///
/// Discovery produces one of these per device mode. The layout planner also
/// synthesizes composite configs whose `children` carry the member devices
/// and whose driver is [`CameraDriver::Grid`].
///
/// The defaults describe a synthetic 640x480 color source at 30 fps, which
/// keeps struct-update syntax short in tests and tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Human-readable source name.
    pub name: String,

    /// Capture backend this config belongs to.
    pub driver: CameraDriver,

    /// Backend-specific device identifier, e.g. `/dev/video2`. Empty for
    /// synthesized composites.
    pub device: String,

    /// Capture width in pixels.
    pub width: u32,

    /// Capture height in pixels.
    pub height: u32,

    /// Capture frame rate in frames per second.
    pub fps: u32,

    /// Wire format advertised at discovery time.
    pub format: PixelFormat,

    /// Whether the source delivers color frames.
    pub color: bool,

    /// Decoded buffer layout. Derived from `color` when the config is
    /// handed to an engine; discovery records may leave it defaulted.
    #[serde(default)]
    pub buffer_format: BufferFormat,

    /// Member configs of a grid composite, in discovery order. Empty for
    /// real devices.
    #[serde(default)]
    pub children: Vec<SourceConfig>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            name: String::new(),
            driver: CameraDriver::Synthetic,
            device: String::new(),
            width: 640,
            height: 480,
            fps: 30,
            format: PixelFormat::Unknown,
            color: true,
            buffer_format: BufferFormat::Rgb,
            children: Vec::new(),
        }
    }
}

impl SourceConfig {
    /// Whether two sources can tile into the same grid.
    ///
    /// Compatibility means identical width, height, frame rate, wire format
    /// and driver. Names, device identifiers and color flags do not take
    /// part in the comparison.
    pub fn is_compatible_with(&self, other: &SourceConfig) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.fps == other.fps
            && self.format == other.format
            && self.driver == other.driver
    }

    /// Set `buffer_format` from the color flag.
    pub fn derive_buffer_format(&mut self) {
        self.buffer_format = BufferFormat::for_color(self.color);
    }

    /// Size in bytes of one decoded frame at this geometry.
    pub fn frame_bytes(&self) -> usize {
        self.width as usize * self.height as usize * self.buffer_format.bytes_per_pixel()
    }

    /// Whether this config is a synthesized grid composite.
    pub fn is_composite(&self) -> bool {
        self.driver.is_grid()
    }
}
