//! The grid compositor.
//!
//! [`GridCamera`] owns one child source per grid cell and presents the
//! whole mosaic as a single [`CaptureSource`]. Lifecycle and settings
//! calls fan out to every child; frame delivery pulls one frame per child
//! and stitches them row-major into one contiguous buffer.

use gridcam_camera_model::{BufferFormat, CameraSetting, SourceConfig};
use gridcam_common::{GridcamError, GridcamResult};

use crate::source::{CaptureSource, SourceFactory};

/// A composite capture source that tiles child sources into a grid.
///
/// Built from a planner candidate: the config's `children` list the member
/// sources in row-major cell order, and the layout is recovered from the
/// composite geometry (`columns = width / child width`, `rows = height /
/// child height`). Children are created through the host-supplied factory
/// when `init` runs.
pub struct GridCamera {
    config: SourceConfig,
    factory: Box<dyn SourceFactory>,
    cameras: Vec<Box<dyn CaptureSource>>,
    buffer: Option<Vec<u8>>,
    columns: u32,
    rows: u32,
    running: bool,
}

impl GridCamera {
    /// Create an engine for a composite config.
    ///
    /// Each child's buffer format is derived from its color flag here;
    /// devices are not touched until `init`.
    pub fn new(mut config: SourceConfig, factory: Box<dyn SourceFactory>) -> Self {
        for child in &mut config.children {
            child.derive_buffer_format();
        }
        GridCamera {
            config,
            factory,
            cameras: Vec::new(),
            buffer: None,
            columns: 0,
            rows: 0,
            running: false,
        }
    }

    /// The composite config, with child buffer formats derived.
    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Close and drop every child brought up so far.
    fn close_children(&mut self) {
        for cam in &mut self.cameras {
            cam.close();
        }
        self.cameras.clear();
    }

    fn try_init(&mut self) -> GridcamResult<()> {
        // Children from an earlier init must not survive into the new set.
        self.close_children();

        let children = self.config.children.clone();
        let Some(first) = children.first() else {
            return Err(GridcamError::config("no child sources configured"));
        };

        if first.width == 0 || first.height == 0 {
            return Err(GridcamError::layout("child sources report zero dimensions"));
        }

        self.columns = self.config.width / first.width;
        self.rows = self.config.height / first.height;

        let cells = self.columns as usize * self.rows as usize;
        if cells != children.len() {
            return Err(GridcamError::layout(format!(
                "{}x{} grid does not cover {} child sources",
                self.columns,
                self.rows,
                children.len()
            )));
        }

        for child in &children {
            if child.driver.is_grid() {
                return Err(GridcamError::unsupported(
                    "cascading grid sources are not supported",
                ));
            }
            if child.height != first.height {
                return Err(GridcamError::layout("child sources differ in height"));
            }
            if child.width != first.width {
                return Err(GridcamError::layout("child sources differ in width"));
            }
            if child.format != first.format {
                return Err(GridcamError::layout("child sources differ in wire format"));
            }
            if child.color != first.color {
                return Err(GridcamError::layout("child sources differ in color mode"));
            }
        }

        for child in &children {
            let Some(mut cam) = self.factory.create(child) else {
                self.close_children();
                return Err(GridcamError::capture(format!(
                    "no source created for '{}'",
                    child.device
                )));
            };
            if !cam.init() {
                self.close_children();
                return Err(GridcamError::capture(format!(
                    "child source '{}' failed to initialize",
                    child.device
                )));
            }
            self.cameras.push(cam);
        }

        self.config.buffer_format = BufferFormat::for_color(first.color);
        if self.buffer.is_none() {
            self.buffer = Some(vec![0u8; self.config.frame_bytes()]);
        }

        Ok(())
    }
}

impl CaptureSource for GridCamera {
    /// Validate the layout, create and initialize every child, and
    /// allocate the composite buffer.
    ///
    /// On failure, children already brought up are closed before this
    /// returns, so a failed init never leaves devices open.
    fn init(&mut self) -> bool {
        match self.try_init() {
            Ok(()) => {
                tracing::info!(
                    name = %self.config.name,
                    columns = self.columns,
                    rows = self.rows,
                    children = self.cameras.len(),
                    "grid source initialized"
                );
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "grid source failed to initialize");
                false
            }
        }
    }

    /// Close and drop every child and release the composite buffer.
    ///
    /// All children are attempted regardless of individual failures; the
    /// result is the AND of their outcomes. A subsequent `init` starts
    /// from an empty child set.
    fn close(&mut self) -> bool {
        let mut result = true;
        for cam in &mut self.cameras {
            result &= cam.close();
        }
        self.cameras.clear();
        self.buffer = None;
        result
    }

    /// Start every child.
    ///
    /// All children are attempted; if any fails, every child is stopped
    /// again and the composite stays not running.
    fn start(&mut self) -> bool {
        let mut result = true;
        for cam in &mut self.cameras {
            result &= cam.start();
        }

        if !result {
            self.stop();
        }
        self.running = result;

        result
    }

    /// Stop every child.
    ///
    /// All children are attempted; the result is the AND of their
    /// outcomes. The composite is left marked running exactly when the
    /// fold failed: `is_running` reports `!result` after this call.
    fn stop(&mut self) -> bool {
        let mut result = true;
        for cam in &mut self.cameras {
            result &= cam.stop();
        }

        self.running = !result;

        result
    }

    /// Reset every child; the running state is left untouched.
    fn reset(&mut self) -> bool {
        let mut result = true;
        for cam in &mut self.cameras {
            result &= cam.reset();
        }
        result
    }

    /// Pull one frame from every child and stitch the mosaic.
    ///
    /// Children are visited in cell order: left to right across each grid
    /// row, top row first. A child that fails to deliver aborts the walk,
    /// marks the composite not running and yields `None`.
    fn next_frame(&mut self) -> Option<&[u8]> {
        let buffer = self.buffer.as_mut()?;
        let columns = self.columns as usize;

        let mut child_origin = 0usize;
        let mut grid_column = 0usize;
        let mut grid_row = 0usize;

        for cam in self.cameras.iter_mut() {
            let width = cam.width() as usize;
            let height = cam.height() as usize;
            let bpp = cam.format().bytes_per_pixel();
            let line_size = width * bpp;

            let Some(frame) = cam.next_frame() else {
                self.running = false;
                return None;
            };

            // Interleave the child's lines at the composite row stride.
            let mut write_pos = child_origin;
            for line in frame.chunks_exact(line_size).take(height) {
                buffer[write_pos..write_pos + line_size].copy_from_slice(line);
                write_pos += line_size * columns;
            }

            if columns <= 1 || grid_column == columns - 1 {
                grid_column = 0;
                grid_row += 1;
                child_origin = width * columns * height * grid_row * bpp;
            } else {
                grid_column += 1;
                child_origin += line_size;
            }
        }

        self.buffer.as_deref()
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
        self.cameras.first().map(|cam| cam.setting(mode)).unwrap_or(0)
    }

    fn setting_min(&self, mode: CameraSetting) -> i32 {
        self.cameras
            .first()
            .map(|cam| cam.setting_min(mode))
            .unwrap_or(0)
    }

    fn setting_max(&self, mode: CameraSetting) -> i32 {
        self.cameras
            .first()
            .map(|cam| cam.setting_max(mode))
            .unwrap_or(0)
    }

    fn setting_default(&self, mode: CameraSetting) -> i32 {
        self.cameras
            .first()
            .map(|cam| cam.setting_default(mode))
            .unwrap_or(0)
    }

    fn setting_step(&self, mode: CameraSetting) -> i32 {
        self.cameras
            .first()
            .map(|cam| cam.setting_step(mode))
            .unwrap_or(0)
    }

    fn has_setting(&self, mode: CameraSetting) -> bool {
        self.cameras
            .first()
            .map(|cam| cam.has_setting(mode))
            .unwrap_or(false)
    }

    fn setting_auto(&self, mode: CameraSetting) -> bool {
        self.cameras
            .first()
            .map(|cam| cam.setting_auto(mode))
            .unwrap_or(false)
    }

    fn has_setting_auto(&self, mode: CameraSetting) -> bool {
        self.cameras
            .first()
            .map(|cam| cam.has_setting_auto(mode))
            .unwrap_or(false)
    }

    fn set_setting(&mut self, mode: CameraSetting, value: i32) -> bool {
        let mut result = true;
        for cam in &mut self.cameras {
            result &= cam.set_setting(mode, value);
        }
        result
    }

    fn set_setting_auto(&mut self, mode: CameraSetting, auto: bool) -> bool {
        let mut result = true;
        for cam in &mut self.cameras {
            result &= cam.set_setting_auto(mode, auto);
        }
        result
    }

    fn set_default_setting(&mut self, mode: CameraSetting) -> bool {
        let mut result = true;
        for cam in &mut self.cameras {
            result &= cam.set_default_setting(mode);
        }
        result
    }

    fn log_info(&self) {
        tracing::info!(
            name = %self.config.name,
            children = self.cameras.len(),
            columns = self.columns,
            rows = self.rows,
            "grid source"
        );
        for cam in &self.cameras {
            cam.log_info();
        }
    }
}
