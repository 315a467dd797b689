//! The capture contract.
//!
//! Every source, physical or composed, sits behind [`CaptureSource`].
//! Hosts drive it with plain boolean lifecycle calls; frame delivery
//! borrows the source's internal buffer. [`SourceFactory`] is the seam a
//! host plugs its backends into, and the one the grid compositor uses to
//! open its children.

use gridcam_camera_model::{BufferFormat, CameraSetting, SourceConfig};

/// One capture source behind a uniform contract.
///
/// Lifecycle and settings calls report success as `bool`; a `false` from a
/// composite means at least one member failed, never that none were tried.
/// A source is expected to be driven `init` -> `start` -> frames ->
/// `stop` -> `close`; re-initialization requires an intervening `close`.
pub trait CaptureSource: Send {
    /// Open the source and allocate its frame buffer.
    fn init(&mut self) -> bool;

    /// Release the source and its buffers.
    fn close(&mut self) -> bool;

    /// Begin frame delivery.
    fn start(&mut self) -> bool;

    /// Halt frame delivery.
    fn stop(&mut self) -> bool;

    /// Re-synchronize the source without a full close/init cycle.
    fn reset(&mut self) -> bool;

    /// Deliver the next frame.
    ///
    /// The slice borrows the source's internal buffer and holds
    /// `height() * width() * format().bytes_per_pixel()` bytes, valid until
    /// the next call on the source. `None` means no frame could be
    /// delivered; the source may stop running as a consequence.
    fn next_frame(&mut self) -> Option<&[u8]>;

    /// Frame width in pixels.
    fn width(&self) -> u32;

    /// Frame height in pixels.
    fn height(&self) -> u32;

    /// Configured frame rate.
    fn fps(&self) -> u32;

    /// Decoded layout of delivered frames.
    fn format(&self) -> BufferFormat;

    /// Whether the source is currently delivering frames.
    fn is_running(&self) -> bool;

    /// Current value of a setting.
    fn setting(&self, mode: CameraSetting) -> i32;

    /// Smallest accepted value for a setting.
    fn setting_min(&self, mode: CameraSetting) -> i32;

    /// Largest accepted value for a setting.
    fn setting_max(&self, mode: CameraSetting) -> i32;

    /// Factory default value for a setting.
    fn setting_default(&self, mode: CameraSetting) -> i32;

    /// Distance between accepted values for a setting.
    fn setting_step(&self, mode: CameraSetting) -> i32;

    /// Whether the source supports a setting at all.
    fn has_setting(&self, mode: CameraSetting) -> bool;

    /// Whether a setting is currently in automatic mode.
    fn setting_auto(&self, mode: CameraSetting) -> bool;

    /// Whether a setting offers an automatic mode.
    fn has_setting_auto(&self, mode: CameraSetting) -> bool;

    /// Apply a new value to a setting.
    fn set_setting(&mut self, mode: CameraSetting, value: i32) -> bool;

    /// Switch a setting between automatic and manual control.
    fn set_setting_auto(&mut self, mode: CameraSetting, auto: bool) -> bool;

    /// Restore a setting to its factory default.
    fn set_default_setting(&mut self, mode: CameraSetting) -> bool;

    /// Log a description of the source and its configuration.
    fn log_info(&self);
}

/// Builds capture sources from configs.
///
/// `create` returns `None` when the config is not one this factory can
/// open; the caller decides whether that is fatal. The grid compositor
/// treats it as an initialization failure.
pub trait SourceFactory: Send {
    /// Instantiate a source for `config`, or `None` if unsupported.
    fn create(&self, config: &SourceConfig) -> Option<Box<dyn CaptureSource>>;
}
